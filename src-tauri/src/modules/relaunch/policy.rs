// Relaunch Policy
//
// 窗口隐藏超过新鲜度窗口后，后台可能已暂存了更新，重启以运行最新代码

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 新鲜度窗口（分钟）
pub const FRESHNESS_WINDOW_MINUTES: i64 = 60;

/// 重新激活方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reactivation {
    /// 显示并聚焦现有窗口
    Reuse,
    /// 终止当前进程并启动新进程
    Relaunch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaunchPolicy {
    freshness_window: Duration,
}

impl RelaunchPolicy {
    pub fn new() -> Self {
        Self {
            freshness_window: Duration::minutes(FRESHNESS_WINDOW_MINUTES),
        }
    }

    /// `now - last_hidden_at <= 60min` 时复用，包含边界
    ///
    /// 窗口从未隐藏过（`None`）时总是复用。时钟回拨导致的负间隔同样视为新鲜。
    pub fn decide(&self, last_hidden_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Reactivation {
        let Some(hidden_at) = last_hidden_at else {
            return Reactivation::Reuse;
        };

        if now - hidden_at <= self.freshness_window {
            Reactivation::Reuse
        } else {
            Reactivation::Relaunch
        }
    }
}

impl Default for RelaunchPolicy {
    fn default() -> Self {
        Self::new()
    }
}
