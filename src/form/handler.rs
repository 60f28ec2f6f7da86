//! 登录尝试处理器
//!
//! 表单就绪并提交时，当前的邮箱和密码快照会交给一个 [`LoginHandler`]。
//! 本库自身不做任何传输；真正的认证由调用方实现的处理器完成。

use std::fmt;
use std::sync::{Arc, RwLock};

/// 一次提交的快照
#[derive(Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
}

impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 登录尝试处理器 trait
pub trait LoginHandler: Send + Sync {
    /// 处理一次已通过就绪检查的提交
    fn attempt(&self, attempt: &LoginAttempt);
}

impl<F> LoginHandler for F
where
    F: Fn(&LoginAttempt) + Send + Sync,
{
    fn attempt(&self, attempt: &LoginAttempt) {
        self(attempt)
    }
}

/// 只写诊断日志的处理器
///
/// 记录邮箱和密码长度，不记录密码本身。
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLoginHandler;

impl TracingLoginHandler {
    pub fn new() -> Self {
        Self
    }
}

impl LoginHandler for TracingLoginHandler {
    fn attempt(&self, attempt: &LoginAttempt) {
        tracing::info!(
            email = %attempt.email,
            password_len = attempt.password.chars().count(),
            "login attempted"
        );
    }
}

/// 把所有提交保存在内存中的处理器
///
/// 克隆后共享同一份记录，测试中可以保留一个克隆用于断言。
#[derive(Debug, Default, Clone)]
pub struct RecordingLoginHandler {
    attempts: Arc<RwLock<Vec<LoginAttempt>>>,
}

impl RecordingLoginHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有提交，按时间顺序
    pub fn attempts(&self) -> Vec<LoginAttempt> {
        self.attempts.read().unwrap().clone()
    }

    /// 提交次数
    pub fn count(&self) -> usize {
        self.attempts.read().unwrap().len()
    }

    /// 最近一次提交
    pub fn last(&self) -> Option<LoginAttempt> {
        self.attempts.read().unwrap().last().cloned()
    }

    /// 清空记录
    pub fn clear(&self) {
        self.attempts.write().unwrap().clear();
    }
}

impl LoginHandler for RecordingLoginHandler {
    fn attempt(&self, attempt: &LoginAttempt) {
        self.attempts.write().unwrap().push(attempt.clone());
    }
}
