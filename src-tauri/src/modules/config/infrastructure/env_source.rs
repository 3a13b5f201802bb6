// Environment Config Source
//
// 从进程环境变量读取配置

use url::Url;

use crate::modules::config::domain::ShellConfig;
use crate::modules::config::ports::{ConfigError, ConfigSource};
use crate::shared::{ReplayPolicy, RuntimeMode, UncaughtErrorPolicy};

pub const ENV_MODE: &str = "HARBOR_ENV";
pub const ENV_DEV_SERVER_URL: &str = "VITE_DEV_SERVER_URL";
pub const ENV_BUS_REPLAY: &str = "HARBOR_BUS_REPLAY";
pub const ENV_ON_UNCAUGHT: &str = "HARBOR_ON_UNCAUGHT";

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// 环境变量配置来源
pub struct EnvConfigSource {
    lookup: Lookup,
}

impl EnvConfigSource {
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// 使用自定义查找函数创建（测试用）
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>, ConfigError> {
        match self.get(key) {
            Some(raw) => parse(&raw.to_lowercase())
                .map(Some)
                .ok_or(ConfigError::Invalid {
                    key: key.to_string(),
                    value: raw,
                }),
            None => Ok(None),
        }
    }
}

impl Default for EnvConfigSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvConfigSource {
    fn load(&self) -> Result<ShellConfig, ConfigError> {
        let defaults = ShellConfig::default();

        let mode = self
            .parse(ENV_MODE, |v| match v {
                "development" | "dev" => Some(RuntimeMode::Development),
                "production" | "prod" => Some(RuntimeMode::Production),
                _ => None,
            })?
            .unwrap_or(defaults.mode);

        let bus_replay = self
            .parse(ENV_BUS_REPLAY, |v| match v {
                "last" => Some(ReplayPolicy::Last),
                "none" => Some(ReplayPolicy::None),
                _ => None,
            })?
            .unwrap_or(defaults.bus_replay);

        let uncaught_errors = self
            .parse(ENV_ON_UNCAUGHT, |v| match v {
                "report" => Some(UncaughtErrorPolicy::Report),
                "terminate" => Some(UncaughtErrorPolicy::Terminate),
                _ => None,
            })?
            .unwrap_or(defaults.uncaught_errors);

        let dev_server_url = match self.get(ENV_DEV_SERVER_URL) {
            Some(raw) => Some(Url::parse(&raw).map_err(|_| ConfigError::Invalid {
                key: ENV_DEV_SERVER_URL.to_string(),
                value: raw,
            })?),
            None => None,
        };

        Ok(ShellConfig {
            mode,
            dev_server_url,
            bus_replay,
            uncaught_errors,
            ..defaults
        })
    }
}
