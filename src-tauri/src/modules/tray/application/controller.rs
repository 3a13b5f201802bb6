// Tray Controller
//
// 托盘动作处理：打开（按 RelaunchPolicy 复用或重启）与退出

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::infrastructure::ApplicationShell;
use crate::modules::desktop::ProcessControl;
use crate::modules::relaunch::{Reactivation, RelaunchPolicy};
use crate::modules::tray::domain::TrayAction;
use crate::modules::tray::ports::TrayActionHandler;
use crate::modules::window::{WindowError, WindowManager};

pub struct TrayController {
    shell: Arc<ApplicationShell>,
    windows: Arc<WindowManager>,
    process: Arc<dyn ProcessControl>,
    policy: RelaunchPolicy,
}

impl TrayController {
    pub fn new(
        shell: Arc<ApplicationShell>,
        windows: Arc<WindowManager>,
        process: Arc<dyn ProcessControl>,
    ) -> Self {
        Self {
            shell,
            windows,
            process,
            policy: RelaunchPolicy::new(),
        }
    }

    /// “打开”：窗口新鲜则显示并聚焦，否则整进程重启
    pub fn handle_open(&self, now: DateTime<Utc>) -> Result<Reactivation, WindowError> {
        let decision = self.policy.decide(self.shell.last_hidden_at(), now);
        tracing::info!("Tray open: {:?}", decision);

        match decision {
            Reactivation::Reuse => self.windows.reactivate(now)?,
            Reactivation::Relaunch => {
                self.shell.begin_quit();
                self.process.relaunch();
            }
        }

        Ok(decision)
    }

    /// “退出”
    pub fn handle_exit(&self) {
        self.shell.begin_quit();
        self.process.exit(0);
    }
}

impl TrayActionHandler for TrayController {
    fn handle_action(&self, action: TrayAction) {
        match action {
            TrayAction::Open => {
                if let Err(e) = self.handle_open(Utc::now()) {
                    tracing::error!("Failed to reopen main window: {}", e);
                }
            }
            TrayAction::Exit => self.handle_exit(),
        }
    }
}
