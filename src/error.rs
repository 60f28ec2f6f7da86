//! 统一错误类型模块
//!
//! 提供 loginform 库中所有操作的错误类型定义。
//!
//! 密码校验本身是全函数，不会返回错误；错误只出现在构建密码策略时
//! （无效的正则表达式、空描述、格式错误的配置等）。

use std::fmt;

/// loginform 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// loginform 库的错误类型
#[derive(Debug)]
pub enum Error {
    /// 配置错误
    Config(ConfigError),
}

impl Error {
    /// 创建一个无效配置值错误
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config(ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        })
    }
}

/// 配置相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 正则表达式无法编译
    InvalidPattern { pattern: String, message: String },
    /// 要求缺少描述
    EmptyDescription { index: usize },
    /// 配置项既没有 `pattern` 也没有 `min_length`，或两者都有
    AmbiguousMatcher { index: usize },
    /// 无效的配置值
    InvalidValue { key: String, message: String },
    /// 配置文档无法解析
    Malformed(String),
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern '{}': {}", pattern, message)
            }
            ConfigError::EmptyDescription { index } => {
                write!(f, "requirement #{} has an empty description", index)
            }
            ConfigError::AmbiguousMatcher { index } => write!(
                f,
                "requirement #{} must set exactly one of 'pattern' or 'min_length'",
                index
            ),
            ConfigError::InvalidValue { key, message } => {
                write!(f, "invalid configuration value for '{}': {}", key, message)
            }
            ConfigError::Malformed(msg) => write!(f, "malformed configuration: {}", msg),
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// From 实现 - 方便错误转换
// ============================================================================

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(ConfigError::Malformed(err.to_string()))
    }
}
