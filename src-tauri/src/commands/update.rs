use std::sync::Arc;
use tauri::State;

use crate::infrastructure::ApplicationShell;
use crate::modules::update::{UpdateController, UpdateError, UpdateSnapshot};
use crate::shared::AppResult;

/// 由 UI 显式重新触发更新检查，仅生产模式可用
#[tauri::command]
pub async fn update_check(
    shell: State<'_, Arc<ApplicationShell>>,
    controller: State<'_, Arc<UpdateController>>,
) -> AppResult<UpdateSnapshot> {
    let config = shell.config();
    if !config.checks_for_updates() {
        return Err(UpdateError::Disabled(config.mode.to_string()).into());
    }

    controller.check_for_updates().await?;
    Ok(controller.snapshot())
}

#[tauri::command]
pub fn update_state(controller: State<'_, Arc<UpdateController>>) -> UpdateSnapshot {
    controller.snapshot()
}
