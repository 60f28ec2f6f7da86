//! 要求清单渲染
//!
//! 渲染层拿到的只是 `(描述, 是否满足)` 列表和一个提交开关。这里提供
//! 与框架无关的清单模型和一个纯文本渲染器；其他视图实现
//! [`ChecklistRenderer`] 即可共用同一个校验器。

use serde::Serialize;

use crate::form::LoginForm;
use crate::form::fields::REQUIREMENTS_HEADING;
use crate::password::PolicyEvaluation;

/// 清单中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub description: String,
    pub satisfied: bool,
}

/// 要求清单
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checklist {
    /// 标题
    pub heading: &'static str,
    /// 各项，按策略顺序
    pub items: Vec<ChecklistItem>,
    /// 提交按钮是否可用
    pub submit_enabled: bool,
}

impl Checklist {
    /// 由一次求值构造清单，`submit_enabled` 取 `all_satisfied`
    pub fn from_evaluation(evaluation: &PolicyEvaluation) -> Self {
        Self {
            heading: REQUIREMENTS_HEADING,
            items: evaluation
                .results
                .iter()
                .map(|r| ChecklistItem {
                    description: r.description.clone(),
                    satisfied: r.satisfied,
                })
                .collect(),
            submit_enabled: evaluation.all_satisfied,
        }
    }

    /// 由表单构造清单，`submit_enabled` 取表单的 `can_submit()`
    pub fn from_form(form: &LoginForm) -> Self {
        Self {
            submit_enabled: form.can_submit(),
            ..Self::from_evaluation(&form.evaluation())
        }
    }
}

/// 清单渲染器
pub trait ChecklistRenderer {
    type Output;

    fn render(&self, checklist: &Checklist) -> Self::Output;
}

/// 纯文本渲染器
///
/// 每项一行，形如 `[x] At least 9 characters long`。
#[derive(Debug, Clone)]
pub struct TextRenderer {
    satisfied_marker: String,
    unsatisfied_marker: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            satisfied_marker: "[x]".to_string(),
            unsatisfied_marker: "[ ]".to_string(),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置满足/未满足标记
    pub fn with_markers(
        mut self,
        satisfied: impl Into<String>,
        unsatisfied: impl Into<String>,
    ) -> Self {
        self.satisfied_marker = satisfied.into();
        self.unsatisfied_marker = unsatisfied.into();
        self
    }
}

impl ChecklistRenderer for TextRenderer {
    type Output = String;

    fn render(&self, checklist: &Checklist) -> String {
        let mut out = String::from(checklist.heading);
        for item in &checklist.items {
            let marker = if item.satisfied {
                &self.satisfied_marker
            } else {
                &self.unsatisfied_marker
            };
            out.push('\n');
            out.push_str(marker);
            out.push(' ');
            out.push_str(&item.description);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RecordingLoginHandler;
    use crate::password::validate_password;

    #[test]
    fn test_text_rendering() {
        let checklist = Checklist::from_evaluation(&validate_password("short1!"));
        let text = TextRenderer::new().render(&checklist);

        assert_eq!(
            text,
            "Password requirements:\n\
             [ ] At least 9 characters long\n\
             [x] At least one lowercase letter\n\
             [ ] At least one uppercase letter\n\
             [x] At least one number\n\
             [x] At least one special character"
        );
    }

    #[test]
    fn test_custom_markers() {
        let checklist = Checklist::from_evaluation(&validate_password("Password1!"));
        let text = TextRenderer::new().with_markers("✓", "✗").render(&checklist);

        assert_eq!(text.lines().filter(|l| l.starts_with('✓')).count(), 5);
        assert!(checklist.submit_enabled);
    }

    #[test]
    fn test_form_checklist_requires_email() {
        let mut form = LoginForm::with_canonical_policy(RecordingLoginHandler::new());
        form.set_password("Password1!");

        let checklist = Checklist::from_form(&form);
        assert!(checklist.items.iter().all(|i| i.satisfied));
        assert!(!checklist.submit_enabled);

        form.set_email("a@b.com");
        assert!(Checklist::from_form(&form).submit_enabled);
    }
}
