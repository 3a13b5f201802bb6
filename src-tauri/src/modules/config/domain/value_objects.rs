// Config Value Objects
//
// 配置相关的值对象定义

use serde::{Deserialize, Serialize};

/// 更新机制配置
///
/// 更新插件从不自行下载，下载只由 UpdateController 显式驱动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    pub auto_install_on_quit: bool,
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            auto_install_on_quit: true,
        }
    }
}
