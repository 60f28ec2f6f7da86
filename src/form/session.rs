//! 登录表单会话
//!
//! `LoginForm` 独占一份 [`FormState`]，每次输入变化后重新计算就绪状态。
//! 求值结果不做缓存，每次查询都由当前输入重新得出。

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::fields::{FIELDS, FieldSpec};
use super::handler::{LoginAttempt, LoginHandler};
use super::readiness::{Readiness, Transition, can_submit};
use crate::audit::{AuditLogger, NoOpAuditLogger, SecurityEvent};
use crate::password::{PasswordPolicy, PolicyEvaluation};

/// 表单输入
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
}

impl FormState {
    /// 创建空的表单状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 两个字段是否都为空
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 表单上的按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// 回车，等同于提交
    Enter,
    Tab,
    Escape,
    /// 可打印字符
    Char(char),
}

/// 提交被拒绝的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppressed {
    /// 邮箱为空
    pub email_missing: bool,
    /// 尚未满足的密码要求描述，按策略顺序
    pub unmet_requirements: Vec<String>,
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 已交给登录处理器
    Submitted(LoginAttempt),
    /// 表单未就绪，什么也没做
    Suppressed(Suppressed),
}

impl SubmitOutcome {
    /// 是否已提交
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// 登录表单会话
pub struct LoginForm {
    policy: Arc<PasswordPolicy>,
    handler: Arc<dyn LoginHandler>,
    audit: Arc<dyn AuditLogger>,
    state: FormState,
    readiness: Readiness,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("readiness", &self.readiness)
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    /// 创建空表单
    pub fn new(
        policy: impl Into<Arc<PasswordPolicy>>,
        handler: impl LoginHandler + 'static,
    ) -> Self {
        Self {
            policy: policy.into(),
            handler: Arc::new(handler),
            audit: Arc::new(NoOpAuditLogger),
            state: FormState::new(),
            readiness: Readiness::Incomplete,
        }
    }

    /// 使用默认策略创建空表单
    pub fn with_canonical_policy(handler: impl LoginHandler + 'static) -> Self {
        Self::new(PasswordPolicy::canonical(), handler)
    }

    /// 设置审计日志记录器
    pub fn with_audit_logger(mut self, logger: impl AuditLogger + 'static) -> Self {
        self.audit = Arc::new(logger);
        self
    }

    // ========================================================================
    // 输入
    // ========================================================================

    /// 更新邮箱，返回引起的状态切换
    pub fn set_email(&mut self, email: impl Into<String>) -> Option<Transition> {
        self.state.email = email.into();
        self.refresh()
    }

    /// 更新密码，返回引起的状态切换
    pub fn set_password(&mut self, password: impl Into<String>) -> Option<Transition> {
        self.state.password = password.into();
        self.refresh()
    }

    fn refresh(&mut self) -> Option<Transition> {
        let next = Readiness::from_flag(self.can_submit());
        let transition = self.readiness.transition_to(next)?;

        self.readiness = next;
        debug!(from = %transition.from, to = %transition.to, "form readiness changed");
        self.audit.log(
            SecurityEvent::readiness_changed(transition.from, transition.to)
                .with_email(self.state.email.as_str()),
        );

        Some(transition)
    }

    // ========================================================================
    // 查询
    // ========================================================================

    /// 当前邮箱
    pub fn email(&self) -> &str {
        &self.state.email
    }

    /// 当前密码
    pub fn password(&self) -> &str {
        &self.state.password
    }

    /// 当前输入
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// 使用中的策略
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// 对当前密码求值
    pub fn evaluation(&self) -> PolicyEvaluation {
        self.policy.evaluate(&self.state.password)
    }

    /// 状态机当前所处状态
    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    /// 提交按钮是否可用
    pub fn can_submit(&self) -> bool {
        can_submit(&self.state.email, self.policy.is_satisfied(&self.state.password))
    }

    /// 输入框描述
    pub fn fields(&self) -> &'static [FieldSpec] {
        &FIELDS
    }

    // ========================================================================
    // 提交
    // ========================================================================

    /// 提交表单
    ///
    /// 未就绪时不调用处理器，返回 [`SubmitOutcome::Suppressed`]；调用方即使
    /// 绕过了禁用的按钮直接调用，也不会产生提交。
    pub fn submit(&self) -> SubmitOutcome {
        if !self.can_submit() {
            let unmet_requirements: Vec<String> = self
                .policy
                .unsatisfied(&self.state.password)
                .into_iter()
                .map(str::to_string)
                .collect();
            self.audit.log(SecurityEvent::submit_suppressed(
                self.state.email.as_str(),
                unmet_requirements.as_slice(),
            ));
            debug!(
                email_missing = self.state.email.is_empty(),
                unmet = unmet_requirements.len(),
                "submit suppressed"
            );

            return SubmitOutcome::Suppressed(Suppressed {
                email_missing: self.state.email.is_empty(),
                unmet_requirements,
            });
        }

        let attempt = LoginAttempt {
            email: self.state.email.clone(),
            password: self.state.password.clone(),
        };
        self.handler.attempt(&attempt);
        self.audit
            .log(SecurityEvent::login_attempted(self.state.email.as_str()));

        SubmitOutcome::Submitted(attempt)
    }

    /// 处理按键：回车等同于 [`submit`](Self::submit)，其他按键忽略
    pub fn handle_key(&self, key: Key) -> Option<SubmitOutcome> {
        match key {
            Key::Enter => Some(self.submit()),
            _ => None,
        }
    }

    /// 结束会话，交回最终输入
    pub fn finish(self) -> FormState {
        self.state
    }
}
