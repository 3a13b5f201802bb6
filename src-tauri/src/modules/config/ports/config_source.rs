// Config Source Port
//
// 配置来源端口定义

use thiserror::Error;

use crate::modules::config::domain::ShellConfig;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: String, value: String },

    #[error("Configuration source unavailable: {0}")]
    Unavailable(String),
}

/// 配置来源端口
pub trait ConfigSource: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<ShellConfig, ConfigError>;
}
