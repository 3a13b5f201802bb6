use serde::{Deserialize, Serialize};

/// 运行模式
///
/// 开发模式跳过更新检查并可加载远程开发服务器；生产模式加载打包入口并检查更新
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeMode::Production)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 未捕获错误的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UncaughtErrorPolicy {
    /// 通过 update-message 报告后继续运行
    #[default]
    Report,
    /// 报告后终止进程
    Terminate,
}

/// 消息总线对迟到监听者的重放策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplayPolicy {
    /// 不缓存，未挂载监听者时直接丢弃
    None,
    /// 每个通道缓存最后一条消息，监听者挂载时重放
    #[default]
    Last,
}
