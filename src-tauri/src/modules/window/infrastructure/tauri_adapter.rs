// Tauri Window Adapter
//
// 基于 Tauri 的窗口管理适配器实现

use std::sync::Arc;
use tauri::{AppHandle, WebviewUrl, WebviewWindow};

use crate::modules::window::domain::{ContentSource, WindowConfig, WindowSize};
use crate::modules::window::ports::{WindowError, WindowFactory, WindowPort};

fn op_failed(e: tauri::Error) -> WindowError {
    WindowError::OperationFailed(e.to_string())
}

/// Tauri 窗口适配器
pub struct TauriWindowAdapter {
    window: WebviewWindow,
}

impl TauriWindowAdapter {
    pub fn new(window: WebviewWindow) -> Self {
        Self { window }
    }
}

impl WindowPort for TauriWindowAdapter {
    fn show(&self) -> Result<(), WindowError> {
        self.window.show().map_err(op_failed)
    }

    fn hide(&self) -> Result<(), WindowError> {
        self.window.hide().map_err(op_failed)
    }

    fn focus(&self) -> Result<(), WindowError> {
        self.window.set_focus().map_err(op_failed)
    }

    fn is_minimized(&self) -> Result<bool, WindowError> {
        self.window.is_minimized().map_err(op_failed)
    }

    fn unminimize(&self) -> Result<(), WindowError> {
        self.window.unminimize().map_err(op_failed)
    }
}

/// Tauri 窗口工厂
pub struct TauriWindowFactory {
    app_handle: AppHandle,
}

impl TauriWindowFactory {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }

    fn webview_url(content: &ContentSource) -> WebviewUrl {
        match content {
            ContentSource::DevServer { url } => WebviewUrl::External(url.clone()),
            ContentSource::Packaged { entry } => WebviewUrl::App(entry.into()),
        }
    }
}

impl WindowFactory for TauriWindowFactory {
    fn primary_work_area(&self) -> Result<WindowSize, WindowError> {
        let monitor = self
            .app_handle
            .primary_monitor()
            .map_err(op_failed)?
            .ok_or_else(|| WindowError::NotFound("primary monitor".to_string()))?;

        let area = monitor.work_area();
        let logical = area.size.to_logical::<f64>(monitor.scale_factor());
        Ok(WindowSize::new(logical.width as u32, logical.height as u32))
    }

    fn create(&self, config: &WindowConfig) -> Result<Arc<dyn WindowPort>, WindowError> {
        if !config.native_menu {
            self.app_handle.remove_menu().map_err(op_failed)?;
        }

        let window = tauri::WebviewWindowBuilder::new(
            &self.app_handle,
            config.label.as_str(),
            Self::webview_url(&config.content),
        )
        .title(&config.title)
        .inner_size(config.size.width as f64, config.size.height as f64)
        .center()
        .build()
        .map_err(op_failed)?;

        tracing::info!("Main window created: {}", config.label);
        Ok(Arc::new(TauriWindowAdapter::new(window)))
    }
}
