// Config Module
//
// 宿主进程配置模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含 ShellConfig 实体与值对象
// - ports: 端口层，定义配置来源的抽象接口
// - infrastructure: 基础设施层，实现环境变量与内存配置来源

pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{ShellConfig, UpdateSettings};

// Ports
pub use ports::{ConfigError, ConfigSource};

// Infrastructure
pub use infrastructure::{EnvConfigSource, InMemoryConfigSource};

use std::sync::Arc;

/// Config 模块容器
pub struct ConfigModule {
    source: Arc<dyn ConfigSource>,
}

impl ConfigModule {
    /// 从进程环境变量读取配置
    pub fn from_env() -> Self {
        Self {
            source: Arc::new(EnvConfigSource::new()),
        }
    }

    /// 使用自定义配置来源创建
    pub fn with_source(source: Arc<dyn ConfigSource>) -> Self {
        Self { source }
    }

    /// 加载配置
    ///
    /// 在日志初始化之前调用，日志级别取决于加载结果
    pub fn load(&self) -> Result<ShellConfig, ConfigError> {
        self.source.load()
    }
}
