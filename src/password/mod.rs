//! 密码策略模块
//!
//! 对候选密码逐条检查一组有序的要求，给出每条要求的满足情况和整体结果。
//!
//! ## 默认策略
//!
//! 1. 至少 9 个字符（按 Unicode 标量值计数）
//! 2. 至少一个 ASCII 小写字母
//! 3. 至少一个 ASCII 大写字母
//! 4. 至少一个数字
//! 5. 至少一个非 ASCII 字母、非数字的字符（包括空白和非 ASCII 字符）
//!
//! ## 示例
//!
//! ```rust
//! use loginform::password::PasswordPolicy;
//!
//! let policy = PasswordPolicy::canonical();
//! let eval = policy.evaluate("alllowercase1!");
//!
//! assert!(!eval.all_satisfied);
//! assert_eq!(
//!     eval.unsatisfied().collect::<Vec<_>>(),
//!     vec!["At least one uppercase letter"]
//! );
//! ```
//!
//! ### 自定义策略
//!
//! ```rust
//! use loginform::password::PasswordPolicy;
//!
//! let policy = PasswordPolicy::builder()
//!     .min_length(12, "At least 12 characters long")
//!     .pattern(r"\d", "At least one number")?
//!     .build()?;
//!
//! assert!(policy.is_satisfied("twelve chars 1"));
//! # Ok::<(), loginform::Error>(())
//! ```

mod config;
mod policy;
mod requirement;

pub use config::{PolicyConfig, RequirementConfig};
pub use policy::{
    CANONICAL_MIN_LENGTH, DESC_DIGIT, DESC_LOWERCASE, DESC_MIN_LENGTH, DESC_SPECIAL,
    DESC_UPPERCASE, PasswordPolicy, PasswordPolicyBuilder, PolicyEvaluation, canonical_policy,
    evaluate, validate_password,
};
pub use requirement::{Matcher, Requirement, RequirementResult};
