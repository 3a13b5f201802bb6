use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use super::MessageBus;
use crate::modules::config::ShellConfig;
use crate::modules::tray::{TrayError, TrayPort};
use crate::modules::window::{WindowError, WindowLabel, WindowPort, WindowVisibility};

/// 窗口生命周期状态
#[derive(Debug, Clone, Copy, Default)]
struct WindowLifecycle {
    visibility: WindowVisibility,
    last_hidden_at: Option<DateTime<Utc>>,
}

/// 进程级上下文
///
/// 每个进程只构造一次，持有唯一的窗口与托盘句柄、quitting 标志和最近一次隐藏时间。
/// 各组件通过 `Arc<ApplicationShell>` 引用同一实例。
pub struct ApplicationShell {
    config: ShellConfig,
    bus: Arc<MessageBus>,
    window: OnceLock<Arc<dyn WindowPort>>,
    tray: OnceLock<Arc<dyn TrayPort>>,
    lifecycle: Mutex<WindowLifecycle>,
    quitting: AtomicBool,
}

impl ApplicationShell {
    pub fn new(config: ShellConfig, bus: Arc<MessageBus>) -> Self {
        Self {
            config,
            bus,
            window: OnceLock::new(),
            tray: OnceLock::new(),
            lifecycle: Mutex::new(WindowLifecycle::default()),
            quitting: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn bus(&self) -> &Arc<MessageBus> {
        &self.bus
    }

    fn lifecycle(&self) -> MutexGuard<'_, WindowLifecycle> {
        self.lifecycle
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 登记主窗口；每个进程只允许一次
    pub fn attach_window(&self, window: Arc<dyn WindowPort>) -> Result<(), WindowError> {
        self.window
            .set(window)
            .map_err(|_| WindowError::AlreadyExists(WindowLabel::main().to_string()))?;
        self.lifecycle().visibility = WindowVisibility::Visible;
        Ok(())
    }

    pub fn window(&self) -> Option<Arc<dyn WindowPort>> {
        self.window.get().cloned()
    }

    /// 登记托盘；每个进程只允许一次
    pub fn attach_tray(&self, tray: Arc<dyn TrayPort>) -> Result<(), TrayError> {
        self.tray.set(tray).map_err(|_| TrayError::AlreadyExists)
    }

    pub fn tray(&self) -> Option<Arc<dyn TrayPort>> {
        self.tray.get().cloned()
    }

    /// 进程退出时移除托盘图标
    pub fn release_tray(&self) {
        let Some(tray) = self.tray() else {
            return;
        };
        match tray.remove() {
            Ok(()) => tracing::info!("Tray icon removed"),
            Err(e) => tracing::warn!("Failed to remove tray icon: {}", e),
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }

    /// 进入退出流程；quitting 只能从 false 变为 true
    pub fn begin_quit(&self) {
        if !self.quitting.swap(true, Ordering::SeqCst) {
            tracing::info!("Application is quitting");
        }
    }

    pub fn visibility(&self) -> WindowVisibility {
        self.lifecycle().visibility
    }

    pub fn last_hidden_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle().last_hidden_at
    }

    /// 设置可见性；只有进入 Hidden 的转换会更新 last_hidden_at。
    /// 返回转换前的可见性。
    pub fn transition_window(
        &self,
        to: WindowVisibility,
        now: DateTime<Utc>,
    ) -> WindowVisibility {
        let mut lifecycle = self.lifecycle();
        let from = lifecycle.visibility;
        if to == WindowVisibility::Hidden && from != WindowVisibility::Hidden {
            lifecycle.last_hidden_at = Some(now);
        }
        lifecycle.visibility = to;
        from
    }
}
