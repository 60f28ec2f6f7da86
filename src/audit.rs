//! 审计日志模块
//!
//! 记录登录表单上发生的事件：
//!
//! - **登录尝试**: 表单就绪时的提交
//! - **提交被拒绝**: 表单未就绪时的提交
//! - **就绪状态变化**: `Incomplete` 与 `Ready` 之间的切换
//!
//! 事件中永远不包含密码。
//!
//! ## 使用示例
//!
//! ```rust
//! use loginform::audit::{AuditLogger, EventType, InMemoryAuditLogger, SecurityEvent};
//!
//! let logger = InMemoryAuditLogger::new();
//!
//! logger.log(SecurityEvent::login_attempted("a@b.com"));
//! logger.log(SecurityEvent::submit_suppressed("", &["At least one number"]));
//!
//! assert_eq!(logger.event_count(), 2);
//! assert_eq!(logger.get_events_by_type(&EventType::SubmitSuppressed).len(), 1);
//! ```

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::Readiness;

/// 事件严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventSeverity {
    /// 调试信息
    Debug,
    /// 一般信息
    #[default]
    Info,
    /// 警告
    Warning,
}

impl std::fmt::Display for EventSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventSeverity::Debug => write!(f, "DEBUG"),
            EventSeverity::Info => write!(f, "INFO"),
            EventSeverity::Warning => write!(f, "WARNING"),
        }
    }
}

/// 表单事件类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// 就绪状态下提交，已交给登录处理器
    LoginAttempted,
    /// 未就绪状态下提交，已拒绝
    SubmitSuppressed,
    /// 就绪状态切换
    ReadinessChanged,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::LoginAttempted => write!(f, "login_attempted"),
            EventType::SubmitSuppressed => write!(f, "submit_suppressed"),
            EventType::ReadinessChanged => write!(f, "readiness_changed"),
        }
    }
}

/// 表单审计事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    /// 事件 ID
    pub id: String,
    /// 事件类型
    pub event_type: EventType,
    /// 严重程度
    pub severity: EventSeverity,
    /// 事件发生时表单中的邮箱（如果非空）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 事件消息/描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 额外详情
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
    /// 事件时间
    pub timestamp: DateTime<Utc>,
}

impl SecurityEvent {
    /// 创建新的事件
    pub fn new(event_type: EventType, severity: EventSeverity) -> Self {
        Self {
            id: next_event_id(),
            event_type,
            severity,
            email: None,
            message: None,
            details: HashMap::new(),
            timestamp: Utc::now(),
        }
    }

    // ========================================================================
    // 便捷构造方法
    // ========================================================================

    /// 创建登录尝试事件
    pub fn login_attempted(email: impl Into<String>) -> Self {
        Self::new(EventType::LoginAttempted, EventSeverity::Info)
            .with_email(email)
            .with_message("Login attempted")
    }

    /// 创建提交被拒绝事件
    ///
    /// `unmet` 是尚未满足的密码要求描述。
    pub fn submit_suppressed(email: impl Into<String>, unmet: &[impl AsRef<str>]) -> Self {
        let email = email.into();
        let mut event = Self::new(EventType::SubmitSuppressed, EventSeverity::Warning)
            .with_message("Submit suppressed: form is incomplete")
            .with_detail("email_missing", email.is_empty().to_string())
            .with_detail("unmet_requirements", unmet.len().to_string());
        if !unmet.is_empty() {
            let joined = unmet.iter().map(|u| u.as_ref()).collect::<Vec<&str>>().join("; ");
            event = event.with_detail("unmet", joined);
        }
        event.with_email(email)
    }

    /// 创建就绪状态切换事件
    pub fn readiness_changed(from: Readiness, to: Readiness) -> Self {
        Self::new(EventType::ReadinessChanged, EventSeverity::Debug)
            .with_detail("from", from.to_string())
            .with_detail("to", to.to_string())
            .with_message(format!("Form readiness changed: {} -> {}", from, to))
    }

    // ========================================================================
    // Builder 方法
    // ========================================================================

    /// 设置邮箱，空字符串会被忽略
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = (!email.is_empty()).then_some(email);
        self
    }

    /// 设置消息
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// 添加详情
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// 获取事件类型名称
    pub fn event_name(&self) -> String {
        self.event_type.to_string()
    }
}

static EVENT_SEQ: AtomicU64 = AtomicU64::new(1);

/// 生成事件 ID，进程内单调递增
fn next_event_id() -> String {
    format!("evt_{:016x}", EVENT_SEQ.fetch_add(1, Ordering::Relaxed))
}

// ============================================================================
// AuditLogger Trait
// ============================================================================

/// 审计日志记录器 trait
pub trait AuditLogger: Send + Sync {
    /// 记录事件
    fn log(&self, event: SecurityEvent);

    /// 批量记录事件
    fn log_batch(&self, events: Vec<SecurityEvent>) {
        for event in events {
            self.log(event);
        }
    }
}

// ============================================================================
// InMemoryAuditLogger
// ============================================================================

/// 内存审计日志记录器
///
/// 用于测试和开发环境，将事件存储在内存中。克隆后共享同一份事件列表。
#[derive(Debug, Default, Clone)]
pub struct InMemoryAuditLogger {
    events: Arc<RwLock<VecDeque<SecurityEvent>>>,
    max_events: Option<usize>,
}

impl InMemoryAuditLogger {
    /// 创建新的内存日志记录器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带有最大事件数限制的日志记录器，超出时丢弃最旧的事件
    pub fn with_max_events(max: usize) -> Self {
        Self {
            events: Arc::new(RwLock::new(VecDeque::new())),
            max_events: Some(max),
        }
    }

    /// 获取所有事件
    pub fn get_events(&self) -> Vec<SecurityEvent> {
        self.events.read().unwrap().iter().cloned().collect()
    }

    /// 获取事件数量
    pub fn event_count(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// 按邮箱获取事件
    pub fn get_events_by_email(&self, email: &str) -> Vec<SecurityEvent> {
        self.filtered(|e| e.email.as_deref() == Some(email))
    }

    /// 按事件类型获取事件
    pub fn get_events_by_type(&self, event_type: &EventType) -> Vec<SecurityEvent> {
        self.filtered(|e| &e.event_type == event_type)
    }

    /// 按严重程度获取事件
    pub fn get_events_by_severity(&self, severity: EventSeverity) -> Vec<SecurityEvent> {
        self.filtered(|e| e.severity == severity)
    }

    /// 获取最近 N 个事件，最新的在前
    pub fn get_recent_events(&self, count: usize) -> Vec<SecurityEvent> {
        let events = self.events.read().unwrap();
        events.iter().rev().take(count).cloned().collect()
    }

    /// 清空所有事件
    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }

    /// 获取统计信息
    pub fn get_stats(&self) -> AuditStats {
        let events = self.events.read().unwrap();
        let mut stats = AuditStats {
            total_events: events.len(),
            ..Default::default()
        };

        for event in events.iter() {
            match event.severity {
                EventSeverity::Debug => stats.debug_count += 1,
                EventSeverity::Info => stats.info_count += 1,
                EventSeverity::Warning => stats.warning_count += 1,
            }

            *stats.events_by_type.entry(event.event_name()).or_insert(0) += 1;
        }

        stats
    }

    fn filtered(&self, pred: impl Fn(&SecurityEvent) -> bool) -> Vec<SecurityEvent> {
        self.events
            .read()
            .unwrap()
            .iter()
            .filter(|e| pred(e))
            .cloned()
            .collect()
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&self, event: SecurityEvent) {
        let mut events = self.events.write().unwrap();

        if let Some(max) = self.max_events {
            if max == 0 {
                return;
            }
            while events.len() >= max {
                events.pop_front();
            }
        }

        events.push_back(event);
    }
}

/// 审计统计信息
#[derive(Debug, Default, Clone)]
pub struct AuditStats {
    /// 总事件数
    pub total_events: usize,
    /// Debug 级别事件数
    pub debug_count: usize,
    /// Info 级别事件数
    pub info_count: usize,
    /// Warning 级别事件数
    pub warning_count: usize,
    /// 按类型统计
    pub events_by_type: HashMap<String, usize>,
}

// ============================================================================
// TracingAuditLogger
// ============================================================================

/// 把事件转发到 `tracing` 的记录器
///
/// 严重程度映射到同名日志级别，事件名放在 `form_event` 字段中。
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditLogger;

impl TracingAuditLogger {
    /// 创建新的 tracing 记录器
    pub fn new() -> Self {
        Self
    }
}

impl AuditLogger for TracingAuditLogger {
    fn log(&self, event: SecurityEvent) {
        let name = event.event_name();
        let email = event.email.as_deref().unwrap_or("");
        let message = event.message.as_deref().unwrap_or("");

        match event.severity {
            EventSeverity::Debug => {
                tracing::debug!(form_event = %name, event_id = %event.id, email, "{}", message)
            }
            EventSeverity::Info => {
                tracing::info!(form_event = %name, event_id = %event.id, email, "{}", message)
            }
            EventSeverity::Warning => {
                tracing::warn!(form_event = %name, event_id = %event.id, email, "{}", message)
            }
        }
    }
}

// ============================================================================
// NoOpAuditLogger
// ============================================================================

/// 空操作日志记录器
///
/// 不执行任何操作，用于禁用审计日志
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpAuditLogger;

impl NoOpAuditLogger {
    /// 创建新的空操作日志记录器
    pub fn new() -> Self {
        Self
    }
}

impl AuditLogger for NoOpAuditLogger {
    fn log(&self, _event: SecurityEvent) {}
}

// ============================================================================
// 测试
// ============================================================================
