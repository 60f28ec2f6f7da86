//! 密码要求定义
//!
//! 一个要求由匹配器和面向用户的描述组成。匹配器要么是正则表达式，
//! 要么是按 Unicode 标量值计数的最小长度。

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// 文本匹配谓词
#[derive(Clone)]
pub enum Matcher {
    /// 至少包含 N 个 Unicode 标量值（`str::chars().count()`）
    ///
    /// 每个标量值计为 1：多字节字符、换行符、组合附加符号都单独计数，
    /// 例如 `"e\u{301}"` 的长度为 2。
    MinLength(usize),
    /// 正则表达式在密码中任意位置找到匹配即满足
    Pattern(Regex),
}

impl Matcher {
    /// 编译正则表达式匹配器
    pub fn pattern(pattern: &str) -> Result<Self> {
        Regex::new(pattern).map(Matcher::Pattern).map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// 检查密码是否满足该谓词
    pub fn matches(&self, password: &str) -> bool {
        match self {
            Matcher::MinLength(min) => password.chars().count() >= *min,
            Matcher::Pattern(re) => re.is_match(password),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::MinLength(min) => f.debug_tuple("MinLength").field(min).finish(),
            Matcher::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
        }
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Matcher::MinLength(a), Matcher::MinLength(b)) => a == b,
            (Matcher::Pattern(a), Matcher::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Matcher {}

/// 一条命名的密码要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    matcher: Matcher,
    description: String,
}

impl Requirement {
    /// 由匹配器和描述创建要求
    pub fn new(matcher: Matcher, description: impl Into<String>) -> Self {
        Self {
            matcher,
            description: description.into(),
        }
    }

    /// 创建最小长度要求
    pub fn min_length(min: usize, description: impl Into<String>) -> Self {
        Self::new(Matcher::MinLength(min), description)
    }

    /// 创建正则表达式要求
    ///
    /// 正则表达式无法编译时返回 [`ConfigError::InvalidPattern`]。
    pub fn pattern(pattern: &str, description: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Matcher::pattern(pattern)?, description))
    }

    /// 匹配器
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// 面向用户的描述
    pub fn description(&self) -> &str {
        &self.description
    }

    /// 检查密码是否满足该要求
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        self.matcher.matches(password)
    }

    /// 对密码求值，得到一条结果
    pub fn check(&self, password: &str) -> RequirementResult {
        RequirementResult {
            description: self.description.clone(),
            satisfied: self.is_satisfied_by(password),
        }
    }
}

/// 单条要求的求值结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementResult {
    /// 要求的描述
    pub description: String,
    /// 是否满足
    pub satisfied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_min_length_counts_scalar_values() {
        let m = Matcher::MinLength(9);

        assert!(m.matches("Pässwörd1"));
        assert_eq!("Pässwörd1".len(), 11);
        assert!(!Matcher::MinLength(3).matches("e\u{301}"));
        assert!(Matcher::MinLength(2).matches("e\u{301}"));
        assert!(Matcher::MinLength(9).matches("ab\ncd\nefg"));
    }

    #[test]
    fn test_min_length_zero_always_matches() {
        assert!(Matcher::MinLength(0).matches(""));
    }

    #[test]
    fn test_pattern_matches_anywhere() {
        let m = Matcher::pattern("[0-9]").unwrap();

        assert!(m.matches("abc1def"));
        assert!(!m.matches("abcdef"));
        assert!(!m.matches(""));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Requirement::pattern("[a-", "broken").unwrap_err();

        match err {
            Error::Config(ConfigError::InvalidPattern { pattern, .. }) => {
                assert_eq!(pattern, "[a-");
            }
            other => panic!("Expected InvalidPattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_carries_description() {
        let req = Requirement::pattern("[A-Z]", "At least one uppercase letter").unwrap();

        let result = req.check("abc");
        assert_eq!(result.description, "At least one uppercase letter");
        assert!(!result.satisfied);

        assert!(req.check("aBc").satisfied);
    }

    #[test]
    fn test_matcher_equality_by_source() {
        assert_eq!(
            Matcher::pattern("[a-z]").unwrap(),
            Matcher::pattern("[a-z]").unwrap()
        );
        assert_ne!(Matcher::MinLength(9), Matcher::MinLength(8));
        assert_ne!(Matcher::MinLength(1), Matcher::pattern(".").unwrap());
    }

    #[test]
    fn test_matcher_debug_shows_source() {
        let m = Matcher::pattern("[^A-Za-z0-9]").unwrap();
        assert_eq!(format!("{:?}", m), "Pattern(\"[^A-Za-z0-9]\")");
    }
}
