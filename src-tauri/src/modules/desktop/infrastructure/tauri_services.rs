// Tauri Desktop Services
//
// 基于 tauri-plugin-notification / tauri-plugin-opener 的能力实现

use tauri::AppHandle;
use tauri_plugin_notification::NotificationExt;
use tauri_plugin_opener::OpenerExt;
use url::Url;

use crate::modules::desktop::ports::{
    DesktopError, NotificationService, ProcessControl, ShellService,
};

pub struct TauriDesktopServices {
    app_handle: AppHandle,
}

impl TauriDesktopServices {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl NotificationService for TauriDesktopServices {
    fn notify(&self, title: &str, body: &str) -> Result<(), DesktopError> {
        self.app_handle
            .notification()
            .builder()
            .title(title)
            .body(body)
            .show()
            .map_err(|e| DesktopError::NotificationFailed(e.to_string()))
    }
}

impl ShellService for TauriDesktopServices {
    fn open_url(&self, url: &Url) -> Result<(), DesktopError> {
        self.app_handle
            .opener()
            .open_url(url.as_str(), None::<&str>)
            .map_err(|e| DesktopError::OpenFailed(e.to_string()))
    }
}

impl ProcessControl for TauriDesktopServices {
    fn exit(&self, code: i32) {
        tracing::info!("Exiting with code {}", code);
        self.app_handle.exit(code);
    }

    fn relaunch(&self) {
        tracing::info!("Relaunching process");
        self.app_handle.restart();
    }
}
