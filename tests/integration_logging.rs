//! 集成测试：诊断日志
//!
//! 捕获 tracing 输出，确认登录尝试被记录且密码从不出现在日志中。

use std::io::Write;
use std::sync::{Arc, Mutex};

use loginform::audit::{AuditLogger, NoOpAuditLogger, SecurityEvent};
use loginform::{LoginForm, Readiness, TracingAuditLogger, TracingLoginHandler};

#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn output(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_tracing<F: FnOnce()>(f: F) -> String {
    let capture = CaptureWriter::default();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    capture.output()
}

/// 测试登录尝试写入日志但不包含密码
#[test]
fn test_login_attempt_logged_without_password() {
    let output = with_captured_tracing(|| {
        let mut form = LoginForm::with_canonical_policy(TracingLoginHandler::new())
            .with_audit_logger(TracingAuditLogger::new());
        form.submit();
        form.set_email("a@b.com");
        form.set_password("Sup3r$ecret!");
        assert!(form.submit().is_submitted());
    });

    assert!(output.contains("login attempted"));
    assert!(output.contains("a@b.com"));
    assert!(output.contains("password_len=12"));
    assert!(output.contains("form readiness changed"));
    assert!(output.contains("submit_suppressed"));
    assert!(!output.contains("Sup3r$ecret!"));
}

/// 测试未就绪时不产生登录尝试日志
#[test]
fn test_suppressed_submit_not_logged_as_attempt() {
    let output = with_captured_tracing(|| {
        let mut form = LoginForm::with_canonical_policy(TracingLoginHandler::new());
        form.set_email("a@b.com");
        form.set_password("weak");
        assert!(!form.submit().is_submitted());
    });

    assert!(!output.contains("login attempted"));
    assert!(output.contains("submit suppressed"));
}

/// 测试审计事件按严重程度写入对应的日志级别
#[test]
fn test_audit_severity_maps_to_log_level() {
    let output = with_captured_tracing(|| {
        let logger = TracingAuditLogger::new();
        logger.log(SecurityEvent::submit_suppressed("", &["At least one number"]));
        logger.log(SecurityEvent::readiness_changed(
            Readiness::Incomplete,
            Readiness::Ready,
        ));
        logger.log(SecurityEvent::login_attempted("a@b.com"));
    });

    let line_for = |name: &str| {
        output
            .lines()
            .find(|l| l.contains(&format!("form_event={}", name)))
            .map(str::to_string)
            .unwrap_or_else(|| panic!("no log line for {}: {}", name, output))
    };

    assert!(line_for("submit_suppressed").contains("WARN"));
    assert!(line_for("readiness_changed").contains("DEBUG"));

    let attempt = line_for("login_attempted");
    assert!(attempt.contains("INFO"));
    assert!(attempt.contains("a@b.com"));
}

/// 测试空操作审计记录器不产生任何输出，表单默认即使用它
#[test]
fn test_noop_audit_logger_is_silent() {
    let output = with_captured_tracing(|| {
        NoOpAuditLogger::new().log(SecurityEvent::login_attempted("a@b.com"));

        let mut form = LoginForm::with_canonical_policy(TracingLoginHandler::new());
        form.set_email("a@b.com");
        form.set_password("Password1!");
        assert!(form.submit().is_submitted());
    });

    assert!(output.contains("login attempted"));
    assert!(!output.contains("form_event="));
}
