pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use chrono::Utc;
use std::sync::Arc;
use tauri::webview::{PageLoadEvent, PageLoadPayload};
use tauri::{App, Manager, RunEvent, Webview, Window, WindowEvent};

use infrastructure::{logging, panic_guard, ApplicationShell, MessageBus, TauriUiSink};
use modules::config::ShellConfig;
use modules::desktop::{DesktopRequestHandler, TauriDesktopServices};
use modules::instance::InstanceGuard;
use modules::tray::{TauriTrayHandler, TrayConfig, TrayController};
use modules::update::{TauriUpdateSource, UncaughtErrorReporter, UpdateController};
use modules::window::{CloseDecision, TauriWindowFactory, WindowManager};
use modules::ConfigModule;
use shared::AppResult;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // 先读取配置以确定日志级别
    let loaded = ConfigModule::from_env().load();
    logging::init(loaded.as_ref().map(|config| config.mode).unwrap_or_default());

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}, falling back to defaults", e);
            ShellConfig::default()
        }
    };

    tracing::info!(
        "{} starting (mode={}, replay={:?}, on_uncaught={:?})",
        config.product_name,
        config.mode,
        config.bus_replay,
        config.uncaught_errors
    );

    let mut builder = tauri::Builder::default();

    // 必须最先注册：第二个进程在这里以退出码 0 结束
    #[cfg(desktop)]
    {
        builder = builder.plugin(modules::instance::acquire());
    }

    builder
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_updater::Builder::new().build())
        .setup(move |app| setup(app, config).map_err(Into::into))
        .on_window_event(handle_window_event)
        .on_page_load(handle_page_load)
        .invoke_handler(tauri::generate_handler![
            // Bus commands
            commands::bus_send,
            commands::bus_attach,
            commands::bus_detach,
            // Update commands
            commands::update_check,
            commands::update_state,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| {
            if let RunEvent::Exit = event {
                if let Some(update) = app.try_state::<Arc<UpdateController>>() {
                    update.install_on_exit();
                }
                if let Some(shell) = app.try_state::<Arc<ApplicationShell>>() {
                    shell.release_tray();
                }
            }
        });
}

fn setup(app: &mut App, config: ShellConfig) -> AppResult<()> {
    let handle = app.handle().clone();

    let sink = Arc::new(TauriUiSink::new(handle.clone()));
    let bus = Arc::new(MessageBus::new(sink, config.bus_replay));

    panic_guard::install(Arc::new(UncaughtErrorReporter::new(
        bus.clone(),
        config.uncaught_errors,
    )));

    let services = Arc::new(TauriDesktopServices::new(handle.clone()));
    bus.set_host_listener(Arc::new(DesktopRequestHandler::new(
        services.clone(),
        services.clone(),
    )));

    let update = Arc::new(UpdateController::new(
        Arc::new(TauriUpdateSource::new(handle.clone())),
        bus.clone(),
        config.update,
    ));

    let shell = Arc::new(ApplicationShell::new(config, bus.clone()));

    // 初始化主窗口
    let windows = Arc::new(WindowManager::new(shell.clone()));
    windows.create(&TauriWindowFactory::new(handle.clone()))?;

    // 初始化托盘
    let controller = Arc::new(TrayController::new(
        shell.clone(),
        windows.clone(),
        services,
    ));
    let tray_config = TrayConfig::new(shell.config().product_name.clone());
    let tray = TauriTrayHandler::install(&handle, &tray_config, controller)?;
    shell.attach_tray(Arc::new(tray))?;

    app.manage(bus);
    app.manage(update);
    app.manage(windows);
    app.manage(Arc::new(InstanceGuard::new(shell.clone())));
    app.manage(shell);

    tracing::info!("Application shell ready");
    Ok(())
}

fn handle_window_event(window: &Window, event: &WindowEvent) {
    let Some(windows) = window.try_state::<Arc<WindowManager>>() else {
        return;
    };

    match event {
        WindowEvent::CloseRequested { api, .. } => match windows.on_close_requested(Utc::now()) {
            Ok(CloseDecision::Hide) => api.prevent_close(),
            Ok(CloseDecision::Proceed) => {}
            Err(e) => {
                // 未在退出流程中，窗口不能被销毁
                tracing::error!("Failed to hide main window: {}", e);
                api.prevent_close();
            }
        },
        WindowEvent::Destroyed => {
            windows.on_destroyed(Utc::now());
            if let Some(shell) = window.try_state::<Arc<ApplicationShell>>() {
                shell.begin_quit();
            }
            window.app_handle().exit(0);
        }
        _ => {}
    }
}

fn handle_page_load(webview: &Webview, payload: &PageLoadPayload<'_>) {
    if !matches!(payload.event(), PageLoadEvent::Finished) {
        return;
    }

    let Some(windows) = webview.try_state::<Arc<WindowManager>>() else {
        return;
    };
    if !windows.on_content_loaded() {
        return;
    }

    let Some(update) = webview.try_state::<Arc<UpdateController>>() else {
        return;
    };
    let update = update.inner().clone();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = update.check_for_updates().await {
            tracing::error!("Update session failed: {}", e);
        }
    });
}
