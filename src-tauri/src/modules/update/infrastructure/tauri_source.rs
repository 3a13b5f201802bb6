// Tauri Update Source
//
// 基于 tauri-plugin-updater 的更新来源。插件只负责检查清单，下载由
// UpdateController 显式触发，下载结果暂存到进程退出时安装。

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tauri::AppHandle;
use tauri_plugin_updater::{Update, UpdaterExt};

use crate::modules::update::ports::{UpdateCheck, UpdateSource, UpdateSourceError};

pub struct TauriUpdateSource {
    app_handle: AppHandle,
    found: Mutex<Option<Update>>,
    staged: Mutex<Option<(Update, Vec<u8>)>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TauriUpdateSource {
    pub fn new(app_handle: AppHandle) -> Self {
        Self {
            app_handle,
            found: Mutex::new(None),
            staged: Mutex::new(None),
        }
    }
}

#[async_trait]
impl UpdateSource for TauriUpdateSource {
    async fn check(&self) -> Result<UpdateCheck, UpdateSourceError> {
        let updater = self
            .app_handle
            .updater()
            .map_err(|e| UpdateSourceError::Manifest(e.to_string()))?;

        let update = updater
            .check()
            .await
            .map_err(|e| UpdateSourceError::Transport(e.to_string()))?;

        match update {
            Some(update) => {
                let version = update.version.clone();
                *lock(&self.found) = Some(update);
                Ok(UpdateCheck::Available { version })
            }
            None => Ok(UpdateCheck::UpToDate {
                current_version: self.app_handle.package_info().version.to_string(),
            }),
        }
    }

    async fn download(&self) -> Result<(), UpdateSourceError> {
        let update = lock(&self.found)
            .take()
            .ok_or(UpdateSourceError::NothingPending)?;

        let mut received = 0usize;
        let bytes = update
            .download(
                |chunk, total| {
                    received += chunk;
                    tracing::debug!("Update download progress: {} / {:?}", received, total);
                },
                || tracing::info!("Update download finished"),
            )
            .await
            .map_err(|e| UpdateSourceError::Transport(e.to_string()))?;

        *lock(&self.staged) = Some((update, bytes));
        Ok(())
    }

    fn install_pending(&self) -> Result<(), UpdateSourceError> {
        let (update, bytes) = lock(&self.staged)
            .take()
            .ok_or(UpdateSourceError::NothingPending)?;

        tracing::info!("Installing update {}", update.version);
        update
            .install(bytes)
            .map_err(|e| UpdateSourceError::Install(e.to_string()))
    }
}
