// Tauri Tray Handler
//
// 基于 Tauri 的托盘实现

use std::sync::Arc;
use tauri::menu::{Menu, MenuItem};
use tauri::tray::{MouseButton, TrayIconBuilder, TrayIconEvent};
use tauri::AppHandle;

use crate::modules::tray::domain::{TrayAction, TrayConfig};
use crate::modules::tray::ports::{TrayActionHandler, TrayError, TrayPort};

fn op_failed(e: tauri::Error) -> TrayError {
    TrayError::OperationFailed(e.to_string())
}

/// Tauri 托盘处理器
pub struct TauriTrayHandler {
    app_handle: AppHandle,
    tray_id: String,
}

impl TauriTrayHandler {
    /// 创建托盘图标、菜单并绑定事件
    pub fn install(
        app_handle: &AppHandle,
        config: &TrayConfig,
        handler: Arc<dyn TrayActionHandler>,
    ) -> Result<Self, TrayError> {
        let items = config
            .menu
            .items
            .iter()
            .map(|item| {
                MenuItem::with_id(app_handle, item.id.as_str(), &item.title, item.enabled, None::<&str>)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(op_failed)?;
        let item_refs: Vec<&dyn tauri::menu::IsMenuItem<tauri::Wry>> = items
            .iter()
            .map(|item| item as &dyn tauri::menu::IsMenuItem<tauri::Wry>)
            .collect();
        let menu = Menu::with_items(app_handle, &item_refs).map_err(op_failed)?;

        let mut builder = TrayIconBuilder::with_id(config.id.as_str())
            .tooltip(&config.tooltip)
            .menu(&menu)
            .show_menu_on_left_click(false);

        if let Some(icon) = app_handle.default_window_icon() {
            builder = builder.icon(icon.clone());
        }

        let menu_handler = handler.clone();
        builder
            .on_menu_event(move |_app, event| match TrayAction::from_menu_id(event.id.as_ref()) {
                Some(action) => menu_handler.handle_action(action),
                None => tracing::warn!("Unknown tray menu item: {:?}", event.id),
            })
            .on_tray_icon_event(move |_tray, event| {
                if let TrayIconEvent::DoubleClick {
                    button: MouseButton::Left,
                    ..
                } = event
                {
                    handler.handle_action(TrayAction::Open);
                }
            })
            .build(app_handle)
            .map_err(op_failed)?;

        tracing::info!("Tray icon installed: {}", config.id);
        Ok(Self {
            app_handle: app_handle.clone(),
            tray_id: config.id.clone(),
        })
    }
}

impl TrayPort for TauriTrayHandler {
    fn remove(&self) -> Result<(), TrayError> {
        self.app_handle
            .remove_tray_by_id(self.tray_id.as_str())
            .map(|_| ())
            .ok_or(TrayError::NotInitialized)
    }
}
