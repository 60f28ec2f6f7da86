//! 登录表单示例
//!
//! 模拟用户逐字符输入密码，每一步打印要求清单，最后回车提交。
//!
//! 运行: cargo run --example login_form

use loginform::form::fields::{FIELDS, FORM_DESCRIPTION, FORM_TITLE, SUBMIT_LABEL};
use loginform::{
    Checklist, ChecklistRenderer, InMemoryAuditLogger, Key, LoginForm, TextRenderer,
    TracingLoginHandler,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let audit = InMemoryAuditLogger::new();
    let mut form = LoginForm::with_canonical_policy(TracingLoginHandler::new())
        .with_audit_logger(audit.clone());
    let renderer = TextRenderer::new().with_markers("✓", "✗");

    println!("=== {} ===", FORM_TITLE);
    println!("{}", FORM_DESCRIPTION);
    for field in FIELDS {
        println!("  {} ({:?}): {}", field.label, field.input_type, field.placeholder);
    }
    println!();

    form.set_email("user@example.com");

    let mut typed = String::new();
    for c in "Passw0rd!".chars() {
        typed.push(c);
        if let Some(transition) = form.set_password(typed.as_str()) {
            println!(">> readiness: {} -> {}", transition.from, transition.to);
        }

        let checklist = Checklist::from_form(&form);
        println!("password: {}", "*".repeat(typed.chars().count()));
        println!("{}", renderer.render(&checklist));
        println!(
            "[{}] {}\n",
            SUBMIT_LABEL,
            if checklist.submit_enabled { "enabled" } else { "disabled" }
        );

        // 在未就绪时按回车不会提交
        if let Some(outcome) = form.handle_key(Key::Enter) {
            if outcome.is_submitted() {
                println!("submitted on Enter\n");
            }
        }
    }

    let stats = audit.get_stats();
    println!("audit events: {}", stats.total_events);
    for (name, count) in stats.events_by_type {
        println!("  {}: {}", name, count);
    }

    let state = form.finish();
    println!("session finished for {}", state.email);
}
