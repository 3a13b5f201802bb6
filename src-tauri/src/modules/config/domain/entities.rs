// Config Domain Entities
//
// 宿主进程配置实体

use serde::{Deserialize, Serialize};
use url::Url;

use super::value_objects::UpdateSettings;
use crate::shared::{ReplayPolicy, RuntimeMode, UncaughtErrorPolicy};

pub const PRODUCT_NAME: &str = "Harbor";

/// 宿主进程配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub product_name: String,
    pub mode: RuntimeMode,
    /// 开发服务器地址，仅在开发模式下生效
    pub dev_server_url: Option<Url>,
    pub bus_replay: ReplayPolicy,
    pub uncaught_errors: UncaughtErrorPolicy,
    pub update: UpdateSettings,
}

impl ShellConfig {
    /// 实际生效的开发服务器地址
    pub fn effective_dev_server_url(&self) -> Option<&Url> {
        match self.mode {
            RuntimeMode::Development => self.dev_server_url.as_ref(),
            RuntimeMode::Production => None,
        }
    }

    pub fn checks_for_updates(&self) -> bool {
        self.mode.is_production()
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            mode: RuntimeMode::default(),
            dev_server_url: None,
            bus_replay: ReplayPolicy::default(),
            uncaught_errors: UncaughtErrorPolicy::default(),
            update: UpdateSettings::default(),
        }
    }
}
