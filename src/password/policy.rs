//! 密码策略求值
//!
//! 策略是一组有序的 [`Requirement`]。求值时每条要求都会被独立检查，
//! 从不短路，因此调用方总能拿到完整的结果列表用于展示。

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::requirement::{Requirement, RequirementResult};
use crate::error::{ConfigError, Result};

// ============================================================================
// 默认策略
// ============================================================================

/// 长度要求的描述
pub const DESC_MIN_LENGTH: &str = "At least 9 characters long";
/// 小写字母要求的描述
pub const DESC_LOWERCASE: &str = "At least one lowercase letter";
/// 大写字母要求的描述
pub const DESC_UPPERCASE: &str = "At least one uppercase letter";
/// 数字要求的描述
pub const DESC_DIGIT: &str = "At least one number";
/// 特殊字符要求的描述
pub const DESC_SPECIAL: &str = "At least one special character";

/// 默认策略的最小长度
pub const CANONICAL_MIN_LENGTH: usize = 9;

static CANONICAL: LazyLock<PasswordPolicy> = LazyLock::new(|| PasswordPolicy {
    requirements: vec![
        Requirement::min_length(CANONICAL_MIN_LENGTH, DESC_MIN_LENGTH),
        static_pattern("[a-z]", DESC_LOWERCASE),
        static_pattern("[A-Z]", DESC_UPPERCASE),
        static_pattern("[0-9]", DESC_DIGIT),
        static_pattern("[^A-Za-z0-9]", DESC_SPECIAL),
    ],
});

fn static_pattern(pattern: &str, description: &str) -> Requirement {
    Requirement::pattern(pattern, description).expect("built-in pattern is valid")
}

/// 默认策略的共享引用
pub fn canonical_policy() -> &'static PasswordPolicy {
    &CANONICAL
}

// ============================================================================
// 求值结果
// ============================================================================

/// 一次策略求值的完整结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEvaluation {
    /// 每条要求的结果，顺序与策略中的要求一致
    pub results: Vec<RequirementResult>,
    /// 所有要求是否都满足
    pub all_satisfied: bool,
}

impl PolicyEvaluation {
    /// 未满足的要求描述，按策略顺序
    pub fn unsatisfied(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|r| !r.satisfied)
            .map(|r| r.description.as_str())
    }

    /// 已满足的要求数量
    pub fn satisfied_count(&self) -> usize {
        self.results.iter().filter(|r| r.satisfied).count()
    }
}

/// 对任意要求列表求值
///
/// 纯函数：结果只取决于密码和要求列表。空列表视为全部满足。
pub fn evaluate(password: &str, requirements: &[Requirement]) -> PolicyEvaluation {
    let results: Vec<RequirementResult> = requirements.iter().map(|r| r.check(password)).collect();
    let all_satisfied = results.iter().all(|r| r.satisfied);

    PolicyEvaluation {
        results,
        all_satisfied,
    }
}

/// 使用默认策略校验密码
///
/// # Example
///
/// ```rust
/// use loginform::password::validate_password;
///
/// assert!(validate_password("Password1!").all_satisfied);
/// assert!(!validate_password("short1!").all_satisfied);
/// ```
pub fn validate_password(password: &str) -> PolicyEvaluation {
    canonical_policy().evaluate(password)
}

// ============================================================================
// PasswordPolicy
// ============================================================================

/// 有序的密码要求集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    requirements: Vec<Requirement>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}

impl PasswordPolicy {
    /// 由要求列表创建策略
    ///
    /// 任何一条要求的描述为空时返回 [`ConfigError::EmptyDescription`]。
    pub fn new(requirements: Vec<Requirement>) -> Result<Self> {
        if let Some(index) = requirements
            .iter()
            .position(|r| r.description().trim().is_empty())
        {
            return Err(ConfigError::EmptyDescription { index }.into());
        }

        Ok(Self { requirements })
    }

    /// 默认策略：长度至少 9，包含小写、大写、数字和特殊字符
    pub fn canonical() -> Self {
        PasswordPolicy::clone(&CANONICAL)
    }

    /// 创建构建器
    pub fn builder() -> PasswordPolicyBuilder {
        PasswordPolicyBuilder::default()
    }

    /// 所有要求，按展示顺序
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// 要求数量
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// 是否没有任何要求
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// 对密码求值
    pub fn evaluate(&self, password: &str) -> PolicyEvaluation {
        evaluate(password, &self.requirements)
    }

    /// 密码是否满足所有要求
    pub fn is_satisfied(&self, password: &str) -> bool {
        self.requirements.iter().all(|r| r.is_satisfied_by(password))
    }

    /// 密码尚未满足的要求描述
    pub fn unsatisfied(&self, password: &str) -> Vec<&str> {
        self.requirements
            .iter()
            .filter(|r| !r.is_satisfied_by(password))
            .map(|r| r.description())
            .collect()
    }
}

/// PasswordPolicy 构建器
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicyBuilder {
    requirements: Vec<Requirement>,
}

impl PasswordPolicyBuilder {
    /// 追加最小长度要求
    pub fn min_length(mut self, min: usize, description: impl Into<String>) -> Self {
        self.requirements
            .push(Requirement::min_length(min, description));
        self
    }

    /// 追加正则表达式要求
    pub fn pattern(mut self, pattern: &str, description: impl Into<String>) -> Result<Self> {
        self.requirements
            .push(Requirement::pattern(pattern, description)?);
        Ok(self)
    }

    /// 追加已构造的要求
    pub fn requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// 构建策略
    pub fn build(self) -> Result<PasswordPolicy> {
        PasswordPolicy::new(self.requirements)
    }
}
