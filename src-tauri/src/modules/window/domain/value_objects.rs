// Window Value Objects
//
// 窗口相关的值对象定义

use serde::{Deserialize, Serialize};
use url::Url;

use crate::modules::config::ShellConfig;

/// 打包入口文件
pub const PACKAGED_ENTRY: &str = "index.html";

/// 窗口可见性状态机
///
/// create → Visible；关闭请求且未退出 → Hidden；重新激活 → Visible；
/// 关闭请求且正在退出 → Destroyed（终态）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowVisibility {
    #[default]
    Visible,
    Hidden,
    Destroyed,
}

impl WindowVisibility {
    pub fn on_close_request(self, quitting: bool) -> Self {
        match self {
            WindowVisibility::Destroyed => WindowVisibility::Destroyed,
            _ if quitting => WindowVisibility::Destroyed,
            _ => WindowVisibility::Hidden,
        }
    }

    /// 重新激活；已销毁的窗口返回 None
    pub fn on_reactivate(self) -> Option<Self> {
        match self {
            WindowVisibility::Destroyed => None,
            _ => Some(WindowVisibility::Visible),
        }
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self, WindowVisibility::Destroyed)
    }
}

/// 窗口内容来源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ContentSource {
    /// 远程开发服务器
    DevServer { url: Url },
    /// 打包的静态入口
    Packaged { entry: String },
}

impl ContentSource {
    /// 有开发服务器地址时加载远程内容，否则加载打包入口
    pub fn from_config(config: &ShellConfig) -> Self {
        match config.effective_dev_server_url() {
            Some(url) => ContentSource::DevServer { url: url.clone() },
            None => ContentSource::Packaged {
                entry: PACKAGED_ENTRY.to_string(),
            },
        }
    }
}

/// 窗口尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// 窗口标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowLabel(String);

impl WindowLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 主窗口标识
    pub fn main() -> Self {
        Self("main".to_string())
    }
}

impl Default for WindowLabel {
    fn default() -> Self {
        Self::main()
    }
}

impl std::fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
