// Window Manager
//
// 主窗口的创建、关闭拦截（关闭即隐藏到托盘）、首次加载心跳与重新激活

use chrono::{DateTime, Local, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::infrastructure::{ApplicationShell, HostMessage};
use crate::modules::config::ShellConfig;
use crate::modules::window::domain::{
    ContentSource, WindowConfig, WindowLabel, WindowSize, WindowVisibility,
};
use crate::modules::window::ports::{WindowError, WindowFactory, WindowPort};

/// 心跳时间戳格式，如 `10/18/2026, 9:05:03 AM`
const HEARTBEAT_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// 关闭请求的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// 取消默认销毁，改为隐藏
    Hide,
    /// 允许销毁
    Proceed,
}

pub struct WindowManager {
    shell: Arc<ApplicationShell>,
    content_loaded: AtomicBool,
}

impl WindowManager {
    pub fn new(shell: Arc<ApplicationShell>) -> Self {
        Self {
            shell,
            content_loaded: AtomicBool::new(false),
        }
    }

    /// 按配置解析窗口内容来源
    pub fn load_content(config: &ShellConfig) -> ContentSource {
        ContentSource::from_config(config)
    }

    /// 创建唯一的主窗口，尺寸取主显示器工作区，并加载内容
    pub fn create(&self, factory: &dyn WindowFactory) -> Result<Arc<dyn WindowPort>, WindowError> {
        if self.shell.window().is_some() {
            return Err(WindowError::AlreadyExists(WindowLabel::main().to_string()));
        }

        let work_area = factory.primary_work_area().unwrap_or_else(|e| {
            tracing::warn!("Primary work area unavailable ({}), using default size", e);
            WindowSize::default()
        });

        let content = Self::load_content(self.shell.config());
        tracing::info!("Creating main window {:?} with content {:?}", work_area, content);

        let config = WindowConfig::main_window(&self.shell.config().product_name, work_area, content);
        let window = factory.create(&config)?;
        self.shell.attach_window(window.clone())?;

        Ok(window)
    }

    fn window(&self) -> Result<Arc<dyn WindowPort>, WindowError> {
        self.shell
            .window()
            .ok_or_else(|| WindowError::NotFound(WindowLabel::main().to_string()))
    }

    fn transition(&self, to: WindowVisibility, now: DateTime<Utc>) {
        let from = self.shell.transition_window(to, now);
        tracing::debug!("Window visibility {:?} -> {:?}", from, to);
    }

    /// 处理窗口关闭请求
    ///
    /// 未退出时取消销毁并隐藏窗口；退出中则允许销毁
    pub fn on_close_requested(&self, now: DateTime<Utc>) -> Result<CloseDecision, WindowError> {
        let next = self.shell.visibility().on_close_request(self.shell.is_quitting());

        if next.is_destroyed() {
            self.transition(next, now);
            return Ok(CloseDecision::Proceed);
        }

        self.window()?.hide()?;
        self.transition(next, now);
        tracing::info!("Main window hidden to tray");
        Ok(CloseDecision::Hide)
    }

    /// 窗口被平台销毁
    pub fn on_destroyed(&self, now: DateTime<Utc>) {
        self.transition(WindowVisibility::Destroyed, now);
    }

    /// 内容加载完成
    ///
    /// 仅首次加载发送心跳；返回是否需要触发更新检查（仅生产模式）
    pub fn on_content_loaded(&self) -> bool {
        if self.content_loaded.swap(true, Ordering::SeqCst) {
            tracing::debug!("Content reloaded, heartbeat already sent");
            return false;
        }

        let timestamp = Local::now().format(HEARTBEAT_FORMAT).to_string();
        self.shell.bus().publish(HostMessage::heartbeat(timestamp));

        self.shell.config().checks_for_updates()
    }

    /// 显示并聚焦现有窗口
    pub fn reactivate(&self, now: DateTime<Utc>) -> Result<(), WindowError> {
        let next = self
            .shell
            .visibility()
            .on_reactivate()
            .ok_or(WindowError::Destroyed)?;

        let window = self.window()?;
        window.show()?;
        if window.is_minimized()? {
            window.unminimize()?;
        }
        window.focus()?;
        self.transition(next, now);
        Ok(())
    }
}
