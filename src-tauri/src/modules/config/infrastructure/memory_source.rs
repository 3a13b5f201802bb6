// In-Memory Config Source
//
// 基于内存的配置来源（用于测试和嵌入场景）

use crate::modules::config::domain::ShellConfig;
use crate::modules::config::ports::{ConfigError, ConfigSource};

pub struct InMemoryConfigSource {
    config: ShellConfig,
}

impl InMemoryConfigSource {
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }
}

impl Default for InMemoryConfigSource {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn load(&self) -> Result<ShellConfig, ConfigError> {
        Ok(self.config.clone())
    }
}
