// Instance Guard
//
// 第二次启动被拒绝后，系统把启动请求转发到已运行的实例

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::infrastructure::ApplicationShell;
use crate::modules::window::WindowError;

/// 被转发过来的一次重复启动
#[derive(Debug, Clone)]
pub struct SecondLaunch {
    pub args: Vec<String>,
    pub cwd: String,
    pub at: DateTime<Utc>,
}

impl SecondLaunch {
    pub fn new(args: Vec<String>, cwd: String) -> Self {
        Self {
            args,
            cwd,
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// 已有窗口重新获得焦点
    Focused,
    /// 窗口尚未创建，忽略
    Ignored,
}

pub struct InstanceGuard {
    shell: Arc<ApplicationShell>,
}

impl InstanceGuard {
    pub fn new(shell: Arc<ApplicationShell>) -> Self {
        Self { shell }
    }

    /// 最小化时恢复窗口，然后聚焦；不做其他事
    pub fn on_second_launch(&self, launch: SecondLaunch) -> Result<LaunchOutcome, WindowError> {
        tracing::info!(
            "Another launch attempted (args={:?}, cwd={})",
            launch.args,
            launch.cwd
        );

        let Some(window) = self.shell.window() else {
            tracing::debug!("Main window not created yet, ignoring second launch");
            return Ok(LaunchOutcome::Ignored);
        };

        if window.is_minimized()? {
            window.unminimize()?;
        }
        window.focus()?;

        Ok(LaunchOutcome::Focused)
    }
}
