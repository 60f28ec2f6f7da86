//! 登录表单模块
//!
//! 把邮箱和密码两个输入组合成一个提交开关，并在就绪时把快照交给
//! 登录处理器。与任何 UI 框架无关，渲染层只需在输入变化时调用本模块。
//!
//! ## 子模块
//!
//! - **readiness**: 就绪判断与 `Incomplete`/`Ready` 状态机
//! - **session**: 持有输入的表单会话，负责受保护的提交
//! - **handler**: 登录尝试处理器
//! - **fields**: 输入框描述
//!
//! ## 示例
//!
//! ```rust
//! use loginform::form::{Key, LoginForm, RecordingLoginHandler, Readiness};
//!
//! let handler = RecordingLoginHandler::new();
//! let mut form = LoginForm::with_canonical_policy(handler.clone());
//!
//! form.set_email("a@b.com");
//! // 回车在未就绪时不会提交
//! assert!(!form.handle_key(Key::Enter).unwrap().is_submitted());
//!
//! let transition = form.set_password("Password1!").unwrap();
//! assert_eq!(transition.to, Readiness::Ready);
//!
//! assert!(form.submit().is_submitted());
//! assert_eq!(handler.count(), 1);
//! ```

pub mod fields;
mod handler;
mod readiness;
mod session;

pub use fields::{FieldSpec, InputType};
pub use handler::{LoginAttempt, LoginHandler, RecordingLoginHandler, TracingLoginHandler};
pub use readiness::{Readiness, Transition, can_submit, readiness_for};
pub use session::{FormState, Key, LoginForm, SubmitOutcome, Suppressed};
