// Update Controller
//
// 驱动 check → download → install 的状态机，所有进展与失败都经 update-message
// 通道报告给 UI，不向调用方抛出。检查与下载一旦开始不可取消；进行中的会话
// 不会被重复启动。

use chrono::Utc;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::infrastructure::{HostMessage, MessageBus};
use crate::modules::config::UpdateSettings;
use crate::modules::update::domain::{messages, UpdateSession, UpdateSnapshot, UpdateState};
use crate::modules::update::ports::{UpdateCheck, UpdateError, UpdateSource};

pub struct UpdateController {
    source: Arc<dyn UpdateSource>,
    bus: Arc<MessageBus>,
    settings: UpdateSettings,
    session: Mutex<Option<UpdateSession>>,
}

impl UpdateController {
    pub fn new(source: Arc<dyn UpdateSource>, bus: Arc<MessageBus>, settings: UpdateSettings) -> Self {
        Self {
            source,
            bus,
            settings,
            session: Mutex::new(None),
        }
    }

    fn session(&self) -> MutexGuard<'_, Option<UpdateSession>> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn state(&self) -> UpdateState {
        self.session()
            .as_ref()
            .map(|session| session.state)
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> UpdateSnapshot {
        self.session()
            .as_ref()
            .map(UpdateSnapshot::from)
            .unwrap_or_else(UpdateSnapshot::idle)
    }

    /// 检查更新，返回本次调用结束后的状态
    ///
    /// 检查过程中的 panic 会被捕获（由全局 panic hook 负责报告），会话回到 Idle，
    /// 以免后续检查被永久阻塞
    pub async fn check_for_updates(&self) -> Result<UpdateState, UpdateError> {
        if let Some(current) = self.begin_session() {
            return Ok(current);
        }

        match AssertUnwindSafe(self.run_session()).catch_unwind().await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("Update session panicked, resetting to idle");
                self.session().take();
                Ok(UpdateState::Idle)
            }
        }
    }

    /// 进程退出时安装已下载的更新
    pub fn install_on_exit(&self) -> bool {
        if !self.settings.auto_install_on_quit || self.state() != UpdateState::Downloaded {
            return false;
        }

        match self.source.install_pending() {
            Ok(()) => {
                tracing::info!("Pending update installed on exit");
                true
            }
            Err(e) => {
                tracing::error!("Failed to install pending update: {}", e);
                false
            }
        }
    }

    /// 开启新会话；已有会话时返回其状态，本次调用不做任何事
    fn begin_session(&self) -> Option<UpdateState> {
        let mut slot = self.session();
        if let Some(session) = slot.as_ref() {
            if session.state.is_in_flight() {
                tracing::info!(
                    "Update check ignored, session {} still in progress ({})",
                    session.id,
                    session.state
                );
            } else {
                tracing::info!(
                    "Update check ignored, session {} is waiting for exit ({})",
                    session.id,
                    session.state
                );
            }
            return Some(session.state);
        }

        let session = UpdateSession::start();
        tracing::info!("Starting update session {}", session.id);
        *slot = Some(session);
        None
    }

    async fn run_session(&self) -> Result<UpdateState, UpdateError> {
        self.report(messages::CHECKING);

        let check = match self.source.check().await {
            Ok(check) => check,
            Err(e) => {
                tracing::warn!("Update check failed: {}", e);
                return self.fail(messages::check_failed(&e.to_string()));
            }
        };

        match check {
            UpdateCheck::UpToDate { current_version } => {
                self.transition(UpdateState::NoUpdateAvailable, None)?;
                self.report(messages::up_to_date(&current_version));
                self.bus.publish(HostMessage::update_status(true));
                self.finish()
            }
            UpdateCheck::Available { version } => {
                tracing::info!("Update {} available", version);
                self.transition(UpdateState::UpdateAvailable, Some(version))?;
                self.report(messages::AVAILABLE);
                self.download().await
            }
        }
    }

    async fn download(&self) -> Result<UpdateState, UpdateError> {
        self.transition(UpdateState::Downloading, None)?;

        if let Err(e) = self.source.download().await {
            tracing::warn!("Update download failed: {}", e);
            return self.fail(messages::download_failed(&e.to_string()));
        }

        self.transition(UpdateState::Downloaded, None)?;
        self.report(messages::DOWNLOADED);
        Ok(UpdateState::Downloaded)
    }

    fn transition(&self, next: UpdateState, version: Option<String>) -> Result<(), UpdateError> {
        let mut slot = self.session();
        let session = slot.as_mut().ok_or(UpdateError::InvalidTransition {
            from: UpdateState::Idle,
            to: next,
        })?;
        session.transition(next)?;
        if version.is_some() {
            session.version = version;
        }
        Ok(())
    }

    /// 进入 Error 并报告，然后回到 Idle
    fn fail(&self, text: String) -> Result<UpdateState, UpdateError> {
        if let Some(session) = self.session().as_mut() {
            session.fail(text.clone())?;
        }
        self.report(text);
        self.finish()
    }

    /// 丢弃已结束的会话
    fn finish(&self) -> Result<UpdateState, UpdateError> {
        let mut slot = self.session();
        if let Some(mut session) = slot.take() {
            if session.state.ends_session() {
                session.transition(UpdateState::Idle)?;
            }
            tracing::debug!(
                "Update session {} closed after {}ms",
                session.id,
                (Utc::now() - session.started_at).num_milliseconds()
            );
        }
        Ok(UpdateState::Idle)
    }

    fn report(&self, text: impl Into<String>) {
        self.bus.publish(HostMessage::update_message(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Channel;
    use crate::shared::testing::{RecordingSink, ScriptedUpdateSource};
    use crate::shared::ReplayPolicy;
    use crate::modules::update::ports::UpdateSourceError;
    use serde_json::json;
    use tokio::sync::Notify;

    fn setup(source: ScriptedUpdateSource) -> (UpdateController, Arc<ScriptedUpdateSource>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let bus = Arc::new(MessageBus::new(sink.clone(), ReplayPolicy::Last));
        bus.attach("update-message").unwrap();
        bus.attach("update-status").unwrap();
        let source = Arc::new(source);
        let controller = UpdateController::new(source.clone(), bus, UpdateSettings::default());
        (controller, source, sink)
    }

    fn texts(sink: &RecordingSink) -> Vec<String> {
        sink.messages()
            .into_iter()
            .filter(|(channel, _)| *channel == Channel::UpdateMessage)
            .filter_map(|(_, payload)| payload["text"].as_str().map(String::from))
            .collect()
    }

    #[tokio::test]
    async fn test_no_update_available_reports_version_and_ready() {
        let (controller, _, sink) = setup(ScriptedUpdateSource::up_to_date("1.2.3"));

        let state = controller.check_for_updates().await.unwrap();

        assert_eq!(state, UpdateState::Idle);
        assert_eq!(
            texts(&sink),
            vec![
                "Checking For Updates...".to_string(),
                "No updates available. Current Version : v1.2.3".to_string(),
            ]
        );
        assert!(sink
            .messages()
            .contains(&(Channel::UpdateStatus, json!({ "ready": true }))));
    }

    #[tokio::test]
    async fn test_check_failure_returns_to_idle() {
        let (controller, source, sink) = setup(ScriptedUpdateSource::check_fails(
            UpdateSourceError::Transport("connection refused".into()),
        ));

        let state = controller.check_for_updates().await.unwrap();

        assert_eq!(state, UpdateState::Idle);
        assert_eq!(controller.state(), UpdateState::Idle);
        assert_eq!(
            texts(&sink).last().map(String::as_str),
            Some("Update check failed: connection refused")
        );
        assert_eq!(source.downloads(), 0);
        assert!(sink
            .messages()
            .iter()
            .all(|(channel, _)| *channel != Channel::UpdateStatus));
    }

    #[tokio::test]
    async fn test_download_failure_scenario() {
        let (controller, source, sink) = setup(ScriptedUpdateSource::available(
            "2.0.0",
            Err(UpdateSourceError::Transport("network timeout".into())),
        ));

        let state = controller.check_for_updates().await.unwrap();

        assert_eq!(state, UpdateState::Idle);
        assert_eq!(controller.state(), UpdateState::Idle);
        assert_eq!(source.downloads(), 1);
        assert_eq!(
            texts(&sink),
            vec![
                "Checking For Updates...".to_string(),
                "Update available. Downloading...".to_string(),
                "Update download failed: network timeout".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_downloaded_is_kept_and_installed_on_exit() {
        let (controller, source, sink) = setup(ScriptedUpdateSource::available("2.0.0", Ok(())));

        let state = controller.check_for_updates().await.unwrap();

        assert_eq!(state, UpdateState::Downloaded);
        assert_eq!(controller.snapshot().version.as_deref(), Some("2.0.0"));
        assert_eq!(
            texts(&sink).last().map(String::as_str),
            Some("Update downloaded. Restart the Application !")
        );

        // 已下载后不会再次检查
        let state = controller.check_for_updates().await.unwrap();
        assert_eq!(state, UpdateState::Downloaded);
        assert_eq!(source.checks(), 1);

        assert!(controller.install_on_exit());
        assert_eq!(source.installs(), 1);
    }

    #[tokio::test]
    async fn test_install_on_exit_without_download_is_noop() {
        let (controller, source, _) = setup(ScriptedUpdateSource::up_to_date("1.0.0"));

        controller.check_for_updates().await.unwrap();

        assert!(!controller.install_on_exit());
        assert_eq!(source.installs(), 0);
    }

    #[tokio::test]
    async fn test_install_on_exit_respects_setting() {
        let sink = Arc::new(RecordingSink::default());
        let bus = Arc::new(MessageBus::new(sink, ReplayPolicy::None));
        let source = Arc::new(ScriptedUpdateSource::available("2.0.0", Ok(())));
        let settings = UpdateSettings {
            auto_install_on_quit: false,
        };
        let controller = UpdateController::new(source.clone(), bus, settings);

        controller.check_for_updates().await.unwrap();

        assert!(!controller.install_on_exit());
        assert_eq!(source.installs(), 0);
    }

    #[tokio::test]
    async fn test_check_while_in_flight_is_ignored() {
        let gate = Arc::new(Notify::new());
        let (controller, source, sink) =
            setup(ScriptedUpdateSource::up_to_date("1.2.3").gated(gate.clone()));

        let (first, second, _) = tokio::join!(
            controller.check_for_updates(),
            controller.check_for_updates(),
            async { gate.notify_one() }
        );

        assert_eq!(second.unwrap(), UpdateState::Checking);
        assert_eq!(first.unwrap(), UpdateState::Idle);
        assert_eq!(source.checks(), 1);
        assert_eq!(
            texts(&sink)
                .iter()
                .filter(|text| text.as_str() == "Checking For Updates...")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_check_can_be_repeated_after_idle() {
        let (controller, source, _) = setup(ScriptedUpdateSource::up_to_date("1.0.0"));

        controller.check_for_updates().await.unwrap();
        controller.check_for_updates().await.unwrap();

        assert_eq!(source.checks(), 2);
    }

    #[tokio::test]
    async fn test_panicking_source_resets_session() {
        let (controller, _, _) = setup(ScriptedUpdateSource::panicking());

        let state = controller.check_for_updates().await.unwrap();

        assert_eq!(state, UpdateState::Idle);
        assert_eq!(controller.snapshot(), UpdateSnapshot::idle());
    }
}
