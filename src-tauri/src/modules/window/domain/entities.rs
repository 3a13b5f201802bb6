// Window Domain Entities
//
// 窗口领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::{ContentSource, WindowLabel, WindowSize};

/// 主窗口配置实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    pub label: WindowLabel,
    pub title: String,
    pub size: WindowSize,
    pub content: ContentSource,
    /// 是否保留原生应用菜单
    pub native_menu: bool,
}

impl WindowConfig {
    /// 创建主窗口配置，尺寸取主显示器的可用工作区
    pub fn main_window(title: impl Into<String>, work_area: WindowSize, content: ContentSource) -> Self {
        Self {
            label: WindowLabel::main(),
            title: title.into(),
            size: work_area,
            content,
            native_menu: false,
        }
    }
}
