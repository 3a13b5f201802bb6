// Test Doubles
//
// 单元测试使用的确定性替身：记录型 UI 投递端、假窗口、假进程控制、
// 假通知 / 链接服务与脚本化的更新来源

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::infrastructure::{
    ApplicationShell, BusError, Channel, HostListener, MessageBus, UiMessage, UiSink,
};
use crate::modules::config::ShellConfig;
use crate::modules::desktop::{DesktopError, NotificationService, ProcessControl, ShellService};
use crate::modules::tray::{TrayError, TrayPort};
use crate::modules::update::{UpdateCheck, UpdateSource, UpdateSourceError};
use crate::modules::window::{WindowConfig, WindowError, WindowFactory, WindowPort, WindowSize};

/// 默认配置的进程上下文，附带记录型投递端
pub fn shell() -> (Arc<ApplicationShell>, Arc<RecordingSink>) {
    shell_with(ShellConfig::default())
}

pub fn shell_with(config: ShellConfig) -> (Arc<ApplicationShell>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let bus = Arc::new(MessageBus::new(sink.clone(), config.bus_replay));
    (Arc::new(ApplicationShell::new(config, bus)), sink)
}

// ============================================================================
// Message bus
// ============================================================================

#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(Channel, serde_json::Value)>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<(Channel, serde_json::Value)> {
        self.messages.lock().unwrap().clone()
    }
}

impl UiSink for RecordingSink {
    fn deliver(&self, channel: Channel, payload: serde_json::Value) -> Result<(), BusError> {
        self.messages.lock().unwrap().push((channel, payload));
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingListener {
    messages: Mutex<Vec<UiMessage>>,
}

impl RecordingListener {
    pub fn messages(&self) -> Vec<UiMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl HostListener for RecordingListener {
    fn on_message(&self, message: UiMessage) -> Result<(), BusError> {
        self.messages.lock().unwrap().push(message);
        Ok(())
    }
}

// ============================================================================
// Window / Tray
// ============================================================================

pub struct FakeWindow {
    visible: AtomicBool,
    minimized: AtomicBool,
    focus_count: AtomicUsize,
}

impl Default for FakeWindow {
    fn default() -> Self {
        Self {
            visible: AtomicBool::new(true),
            minimized: AtomicBool::new(false),
            focus_count: AtomicUsize::new(0),
        }
    }
}

impl FakeWindow {
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub fn focus_count(&self) -> usize {
        self.focus_count.load(Ordering::SeqCst)
    }

    pub fn minimize(&self) {
        self.minimized.store(true, Ordering::SeqCst);
    }
}

impl WindowPort for FakeWindow {
    fn show(&self) -> Result<(), WindowError> {
        self.visible.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn hide(&self) -> Result<(), WindowError> {
        self.visible.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn focus(&self) -> Result<(), WindowError> {
        self.focus_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn is_minimized(&self) -> Result<bool, WindowError> {
        Ok(self.minimized.load(Ordering::SeqCst))
    }

    fn unminimize(&self) -> Result<(), WindowError> {
        self.minimized.store(false, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FakeWindowFactory {
    work_area: WindowSize,
    created: Mutex<Vec<WindowConfig>>,
    windows: Mutex<Vec<Arc<FakeWindow>>>,
}

impl FakeWindowFactory {
    pub fn new(work_area: WindowSize) -> Self {
        Self {
            work_area,
            created: Mutex::new(Vec::new()),
            windows: Mutex::new(Vec::new()),
        }
    }

    pub fn created(&self) -> Vec<WindowConfig> {
        self.created.lock().unwrap().clone()
    }

    pub fn last_window(&self) -> Option<Arc<FakeWindow>> {
        self.windows.lock().unwrap().last().cloned()
    }
}

impl WindowFactory for FakeWindowFactory {
    fn primary_work_area(&self) -> Result<WindowSize, WindowError> {
        Ok(self.work_area)
    }

    fn create(&self, config: &WindowConfig) -> Result<Arc<dyn WindowPort>, WindowError> {
        let window = Arc::new(FakeWindow::default());
        self.created.lock().unwrap().push(config.clone());
        self.windows.lock().unwrap().push(window.clone());
        Ok(window)
    }
}

#[derive(Default)]
pub struct FakeTray {
    removed: AtomicBool,
}

impl FakeTray {
    pub fn is_removed(&self) -> bool {
        self.removed.load(Ordering::SeqCst)
    }
}

impl TrayPort for FakeTray {
    fn remove(&self) -> Result<(), TrayError> {
        if self.removed.swap(true, Ordering::SeqCst) {
            return Err(TrayError::NotInitialized);
        }
        Ok(())
    }
}

// ============================================================================
// Desktop services
// ============================================================================

#[derive(Default)]
pub struct FakeProcess {
    exits: Mutex<Vec<i32>>,
    relaunches: AtomicUsize,
}

impl FakeProcess {
    pub fn exits(&self) -> Vec<i32> {
        self.exits.lock().unwrap().clone()
    }

    pub fn relaunches(&self) -> usize {
        self.relaunches.load(Ordering::SeqCst)
    }
}

impl ProcessControl for FakeProcess {
    fn exit(&self, code: i32) {
        self.exits.lock().unwrap().push(code);
    }

    fn relaunch(&self) {
        self.relaunches.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct FakeNotifier {
    shown: Mutex<Vec<(String, String)>>,
    failure: Mutex<Option<String>>,
}

impl FakeNotifier {
    pub fn shown(&self) -> Vec<(String, String)> {
        self.shown.lock().unwrap().clone()
    }

    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }
}

impl NotificationService for FakeNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), DesktopError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(DesktopError::NotificationFailed(reason));
        }
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeShell {
    opened: Mutex<Vec<String>>,
}

impl FakeShell {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ShellService for FakeShell {
    fn open_url(&self, url: &url::Url) -> Result<(), DesktopError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// ============================================================================
// Update source
// ============================================================================

pub struct ScriptedUpdateSource {
    check: Result<UpdateCheck, UpdateSourceError>,
    download: Result<(), UpdateSourceError>,
    panic_on_check: bool,
    gate: Option<Arc<Notify>>,
    checks: AtomicUsize,
    downloads: AtomicUsize,
    installs: AtomicUsize,
}

impl ScriptedUpdateSource {
    fn scripted(
        check: Result<UpdateCheck, UpdateSourceError>,
        download: Result<(), UpdateSourceError>,
    ) -> Self {
        Self {
            check,
            download,
            panic_on_check: false,
            gate: None,
            checks: AtomicUsize::new(0),
            downloads: AtomicUsize::new(0),
            installs: AtomicUsize::new(0),
        }
    }

    pub fn up_to_date(version: &str) -> Self {
        Self::scripted(
            Ok(UpdateCheck::UpToDate {
                current_version: version.to_string(),
            }),
            Err(UpdateSourceError::NothingPending),
        )
    }

    pub fn available(version: &str, download: Result<(), UpdateSourceError>) -> Self {
        Self::scripted(
            Ok(UpdateCheck::Available {
                version: version.to_string(),
            }),
            download,
        )
    }

    pub fn check_fails(error: UpdateSourceError) -> Self {
        Self::scripted(Err(error), Err(UpdateSourceError::NothingPending))
    }

    pub fn panicking() -> Self {
        let mut source = Self::up_to_date("0.0.0");
        source.panic_on_check = true;
        source
    }

    /// 检查在 gate 被通知之前一直挂起
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn downloads(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn installs(&self) -> usize {
        self.installs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpdateSource for ScriptedUpdateSource {
    async fn check(&self) -> Result<UpdateCheck, UpdateSourceError> {
        self.checks.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.panic_on_check {
            panic!("update manifest parser crashed");
        }
        self.check.clone()
    }

    async fn download(&self) -> Result<(), UpdateSourceError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        self.download.clone()
    }

    fn install_pending(&self) -> Result<(), UpdateSourceError> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
