//! 表单输入框描述
//!
//! 渲染层用这些静态描述生成输入框，不需要自己硬编码文案。

use serde::Serialize;

/// 表单标题
pub const FORM_TITLE: &str = "Login";
/// 表单说明
pub const FORM_DESCRIPTION: &str = "Enter your credentials to access your account.";
/// 提交按钮文案
pub const SUBMIT_LABEL: &str = "Login";
/// 要求列表标题
pub const REQUIREMENTS_HEADING: &str = "Password requirements:";

/// 输入框类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// 邮箱
    Email,
    /// 密码（输入内容应被遮盖）
    Password,
}

/// 单个输入框的描述
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: InputType,
    pub required: bool,
}

/// 邮箱输入框
pub const EMAIL_FIELD: FieldSpec = FieldSpec {
    id: "email",
    label: "Email",
    placeholder: "Enter your email",
    input_type: InputType::Email,
    required: true,
};

/// 密码输入框
pub const PASSWORD_FIELD: FieldSpec = FieldSpec {
    id: "password",
    label: "Password",
    placeholder: "Enter your password",
    input_type: InputType::Password,
    required: true,
};

/// 按展示顺序排列的输入框
pub const FIELDS: [FieldSpec; 2] = [EMAIL_FIELD, PASSWORD_FIELD];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        assert_eq!(FIELDS[0].id, "email");
        assert_eq!(FIELDS[1].input_type, InputType::Password);
        assert!(FIELDS.iter().all(|f| f.required));
    }

    #[test]
    fn test_field_serialization() {
        let value = serde_json::to_value(PASSWORD_FIELD).unwrap();
        assert_eq!(value["input_type"], "password");
        assert_eq!(value["placeholder"], "Enter your password");
    }
}
