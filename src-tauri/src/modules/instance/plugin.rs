// Single Instance Plugin
//
// 注册插件即尝试获取系统级单实例锁。锁被拒绝时插件在 setup 之前以退出码 0
// 结束第二个进程，此时尚未创建任何窗口或托盘。

use std::sync::Arc;
use tauri::plugin::TauriPlugin;
use tauri::{Manager, Runtime};

use super::guard::{InstanceGuard, SecondLaunch};

pub fn acquire<R: Runtime>() -> TauriPlugin<R> {
    tauri_plugin_single_instance::init(|app, args, cwd| {
        let Some(guard) = app.try_state::<Arc<InstanceGuard>>() else {
            tracing::debug!("Second launch before setup completed, ignoring");
            return;
        };

        if let Err(e) = guard.on_second_launch(SecondLaunch::new(args, cwd)) {
            tracing::warn!("Failed to focus existing window: {}", e);
        }
    })
}
