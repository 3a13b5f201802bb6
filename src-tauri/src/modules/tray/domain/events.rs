// Tray Domain Events
//
// 托盘领域事件定义

use serde::{Deserialize, Serialize};

/// 托盘动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrayAction {
    Open,
    Exit,
}

impl TrayAction {
    pub fn menu_id(&self) -> &'static str {
        match self {
            TrayAction::Open => "open",
            TrayAction::Exit => "exit",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TrayAction::Open => "Open",
            TrayAction::Exit => "Exit",
        }
    }

    /// 菜单项 id 到动作的映射；未知 id 返回 None
    pub fn from_menu_id(id: &str) -> Option<Self> {
        match id {
            "open" => Some(TrayAction::Open),
            "exit" => Some(TrayAction::Exit),
            _ => None,
        }
    }
}
