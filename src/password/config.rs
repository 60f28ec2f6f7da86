//! 密码策略配置
//!
//! 以 serde 可序列化的形式描述策略，便于从 JSON 加载。每个条目必须
//! 恰好设置 `pattern` 或 `min_length` 之一，且 `min_length` 不能为 0。
//!
//! ```rust
//! use loginform::password::PolicyConfig;
//!
//! let json = r#"{
//!     "requirements": [
//!         { "min_length": 12, "description": "At least 12 characters long" },
//!         { "pattern": "[0-9]", "description": "At least one number" }
//!     ]
//! }"#;
//!
//! let policy = PolicyConfig::from_json(json).unwrap().build().unwrap();
//! assert_eq!(policy.len(), 2);
//! assert!(policy.is_satisfied("correct horse 9"));
//! ```

use serde::{Deserialize, Serialize};

use super::policy::PasswordPolicy;
use super::requirement::{Matcher, Requirement};
use crate::error::{ConfigError, Error, Result};

/// 单条要求的配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementConfig {
    /// 正则表达式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// 最小长度（Unicode 标量值）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// 面向用户的描述
    pub description: String,
}

/// 策略配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// 要求列表，顺序即展示顺序
    pub requirements: Vec<RequirementConfig>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::from(&PasswordPolicy::canonical())
    }
}

impl PolicyConfig {
    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为格式化的 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 编译为策略
    pub fn build(&self) -> Result<PasswordPolicy> {
        let requirements = self
            .requirements
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_requirement(index))
            .collect::<Result<Vec<_>>>()?;

        PasswordPolicy::new(requirements)
    }
}

impl RequirementConfig {
    fn to_requirement(&self, index: usize) -> Result<Requirement> {
        let matcher = match (&self.pattern, self.min_length) {
            (Some(pattern), None) => Matcher::pattern(pattern)?,
            (None, Some(0)) => {
                return Err(Error::invalid_value(
                    format!("requirements[{}].min_length", index),
                    "must be positive",
                ));
            }
            (None, Some(min)) => Matcher::MinLength(min),
            _ => return Err(ConfigError::AmbiguousMatcher { index }.into()),
        };

        Ok(Requirement::new(matcher, self.description.clone()))
    }
}

impl TryFrom<&PolicyConfig> for PasswordPolicy {
    type Error = Error;

    fn try_from(config: &PolicyConfig) -> Result<Self> {
        config.build()
    }
}

impl From<&PasswordPolicy> for PolicyConfig {
    fn from(policy: &PasswordPolicy) -> Self {
        let requirements = policy
            .requirements()
            .iter()
            .map(|r| {
                let (pattern, min_length) = match r.matcher() {
                    Matcher::MinLength(min) => (None, Some(*min)),
                    Matcher::Pattern(re) => (Some(re.as_str().to_string()), None),
                };
                RequirementConfig {
                    pattern,
                    min_length,
                    description: r.description().to_string(),
                }
            })
            .collect();

        Self { requirements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_canonical() {
        let config = PolicyConfig::default();

        assert_eq!(config.requirements.len(), 5);
        assert_eq!(config.requirements[0].min_length, Some(9));
        assert_eq!(config.requirements[4].pattern.as_deref(), Some("[^A-Za-z0-9]"));
        assert_eq!(config.build().unwrap(), PasswordPolicy::canonical());
    }

    #[test]
    fn test_json_omits_unset_matcher() {
        let json = PolicyConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value["requirements"][0];
        assert_eq!(first["min_length"], 9);
        assert!(first.get("pattern").is_none());
    }

    #[test]
    fn test_ambiguous_entry_rejected() {
        let json = r#"{ "requirements": [
            { "description": "ok", "min_length": 3 },
            { "description": "both", "min_length": 3, "pattern": "x" }
        ] }"#;

        let err = PolicyConfig::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::AmbiguousMatcher { index: 1 })
        ));
    }

    #[test]
    fn test_neither_matcher_rejected() {
        let config = PolicyConfig {
            requirements: vec![RequirementConfig {
                pattern: None,
                min_length: None,
                description: "nothing".to_string(),
            }],
        };

        assert!(matches!(
            PasswordPolicy::try_from(&config),
            Err(Error::Config(ConfigError::AmbiguousMatcher { index: 0 }))
        ));
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let json = r#"{ "requirements": [
            { "pattern": "[0-9]", "description": "At least one number" },
            { "min_length": 0, "description": "Anything goes" }
        ] }"#;

        let err = PolicyConfig::from_json(json).unwrap().build().unwrap_err();
        match err {
            Error::Config(ConfigError::InvalidValue { key, message }) => {
                assert_eq!(key, "requirements[1].min_length");
                assert_eq!(message, "must be positive");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_pattern_in_config() {
        let json = r#"{ "requirements": [ { "description": "bad", "pattern": "(" } ] }"#;

        let err = PolicyConfig::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let err = PolicyConfig::from_json("{ \"requirements\": 5 }").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Malformed(_))));
    }
}
