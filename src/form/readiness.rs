//! 表单就绪状态
//!
//! 只有两个状态的状态机：邮箱非空且密码满足全部要求时为 `Ready`，
//! 否则为 `Incomplete`。没有终止状态，可以无限次来回切换。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::password::PasswordPolicy;

/// 提交按钮是否可用
///
/// 除非空外不做任何邮箱格式校验。
pub fn can_submit(email: &str, all_satisfied: bool) -> bool {
    all_satisfied && !email.is_empty()
}

/// 按策略直接由输入计算就绪状态
pub fn readiness_for(email: &str, password: &str, policy: &PasswordPolicy) -> Readiness {
    Readiness::from_flag(can_submit(email, policy.is_satisfied(password)))
}

/// 表单就绪状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    /// 邮箱为空或密码不满足要求
    #[default]
    Incomplete,
    /// 可以提交
    Ready,
}

impl Readiness {
    /// 由 `can_submit` 标志得到状态
    pub fn from_flag(can_submit: bool) -> Self {
        if can_submit {
            Readiness::Ready
        } else {
            Readiness::Incomplete
        }
    }

    /// 是否可以提交
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready)
    }

    /// 切换到 `next`；状态没有变化时返回 `None`
    pub fn transition_to(self, next: Readiness) -> Option<Transition> {
        (self != next).then_some(Transition {
            from: self,
            to: next,
        })
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Readiness::Incomplete => write!(f, "incomplete"),
            Readiness::Ready => write!(f, "ready"),
        }
    }
}

/// 一次状态切换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// 切换前状态
    pub from: Readiness,
    /// 切换后状态
    pub to: Readiness,
}

impl Transition {
    /// 是否进入 `Ready`
    pub fn became_ready(&self) -> bool {
        self.to.is_ready()
    }
}
