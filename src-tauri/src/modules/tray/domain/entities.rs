// Tray Domain Entities
//
// 托盘领域实体定义

use serde::{Deserialize, Serialize};

use super::events::TrayAction;

/// 托盘菜单项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayMenuItem {
    pub id: String,
    pub title: String,
    pub enabled: bool,
}

impl TrayMenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            enabled: true,
        }
    }

    pub fn for_action(action: TrayAction) -> Self {
        Self::new(action.menu_id(), action.title())
    }
}

/// 托盘菜单配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayMenuConfig {
    pub items: Vec<TrayMenuItem>,
}

impl TrayMenuConfig {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add_item(mut self, item: TrayMenuItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Default for TrayMenuConfig {
    fn default() -> Self {
        Self::new()
            .add_item(TrayMenuItem::for_action(TrayAction::Open))
            .add_item(TrayMenuItem::for_action(TrayAction::Exit))
    }
}

/// 托盘配置
///
/// 图标使用应用默认窗口图标
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayConfig {
    pub id: String,
    pub tooltip: String,
    pub menu: TrayMenuConfig,
}

impl TrayConfig {
    pub fn new(tooltip: impl Into<String>) -> Self {
        Self {
            id: "main-tray".to_string(),
            tooltip: tooltip.into(),
            menu: TrayMenuConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_has_open_and_exit() {
        let config = TrayConfig::new("Harbor");
        let ids: Vec<&str> = config.menu.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["open", "exit"]);
        assert_eq!(config.tooltip, "Harbor");
    }
}
