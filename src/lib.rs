//! # loginform
//!
//! 与 UI 框架无关的登录表单核心：密码策略校验和表单就绪状态。
//!
//! ## 功能特性
//!
//! - **密码策略**: 一组有序的命名要求，逐条求值，从不短路
//! - **就绪状态**: 邮箱非空且密码满足全部要求时才允许提交
//! - **受保护的提交**: 未就绪时直接调用提交也会被拒绝
//! - **审计日志**: 登录尝试、被拒绝的提交、就绪状态切换
//! - **清单渲染**: 框架无关的要求清单和纯文本渲染器
//!
//! 本库不做认证、不做网络传输、不做持久化。
//!
//! ## 密码策略示例
//!
//! ```rust
//! use loginform::password::validate_password;
//!
//! let eval = validate_password("Password1!");
//! assert!(eval.all_satisfied);
//!
//! let eval = validate_password("");
//! assert!(eval.results.iter().all(|r| !r.satisfied));
//! ```
//!
//! ## 表单示例
//!
//! ```rust
//! use loginform::{LoginForm, TracingLoginHandler};
//!
//! let mut form = LoginForm::with_canonical_policy(TracingLoginHandler::new());
//!
//! form.set_email("a@b.com");
//! form.set_password("Password1!");
//! assert!(form.can_submit());
//! assert!(form.submit().is_submitted());
//! ```

pub mod audit;
pub mod error;
pub mod form;
pub mod password;
pub mod render;

pub use error::{Error, Result};

// ============================================================================
// 密码策略相关导出
// ============================================================================

pub use password::{
    PasswordPolicy, PolicyConfig, PolicyEvaluation, Requirement, RequirementResult, evaluate,
    validate_password,
};

// ============================================================================
// 表单相关导出
// ============================================================================

pub use form::{
    FormState, Key, LoginAttempt, LoginForm, LoginHandler, Readiness, RecordingLoginHandler,
    SubmitOutcome, TracingLoginHandler, Transition, can_submit,
};

// ============================================================================
// 审计与渲染导出
// ============================================================================

pub use audit::{AuditLogger, InMemoryAuditLogger, NoOpAuditLogger, TracingAuditLogger};
pub use render::{Checklist, ChecklistRenderer, TextRenderer};
