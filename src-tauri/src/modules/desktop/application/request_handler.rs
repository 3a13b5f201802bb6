// Desktop Request Handler
//
// 处理 UI 经 notify / open-link 通道发来的请求，不回发任何消息

use std::sync::Arc;
use url::Url;

use crate::infrastructure::{BusError, HostListener, NotifyPayload, OpenLinkPayload, UiMessage};
use crate::modules::desktop::ports::{DesktopError, NotificationService, ShellService};

/// 允许从 UI 打开的链接协议
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

pub struct DesktopRequestHandler {
    notifications: Arc<dyn NotificationService>,
    shell: Arc<dyn ShellService>,
}

impl DesktopRequestHandler {
    pub fn new(notifications: Arc<dyn NotificationService>, shell: Arc<dyn ShellService>) -> Self {
        Self {
            notifications,
            shell,
        }
    }

    fn notify(&self, payload: NotifyPayload) -> Result<(), DesktopError> {
        tracing::info!("Showing notification: {}", payload.title);
        self.notifications.notify(&payload.title, &payload.body)
    }

    fn open_link(&self, payload: OpenLinkPayload) -> Result<(), DesktopError> {
        let url = Url::parse(&payload.url)
            .map_err(|e| DesktopError::LinkRejected(format!("{}: {}", payload.url, e)))?;

        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return Err(DesktopError::LinkRejected(format!(
                "scheme '{}' is not allowed",
                url.scheme()
            )));
        }

        tracing::info!("Opening external link: {}", url);
        self.shell.open_url(&url)
    }
}

impl HostListener for DesktopRequestHandler {
    fn on_message(&self, message: UiMessage) -> Result<(), BusError> {
        let result = match message {
            UiMessage::Notify(payload) => self.notify(payload),
            UiMessage::OpenLink(payload) => self.open_link(payload),
        };

        result.map_err(|e| {
            tracing::warn!("Desktop request failed: {}", e);
            BusError::ListenerFailed(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{Delivery, MessageBus};
    use crate::shared::testing::{FakeNotifier, FakeShell, RecordingSink};
    use crate::shared::ReplayPolicy;

    fn setup() -> (MessageBus, Arc<RecordingSink>, Arc<FakeNotifier>, Arc<FakeShell>) {
        let sink = Arc::new(RecordingSink::default());
        let notifier = Arc::new(FakeNotifier::default());
        let shell = Arc::new(FakeShell::default());
        let bus = MessageBus::new(sink.clone(), ReplayPolicy::Last);
        bus.set_host_listener(Arc::new(DesktopRequestHandler::new(
            notifier.clone(),
            shell.clone(),
        )));
        (bus, sink, notifier, shell)
    }

    #[test]
    fn test_notify_issues_exactly_one_notification() {
        let (bus, sink, notifier, _) = setup();
        for channel in ["main-process-message", "update-message", "update-status"] {
            bus.attach(channel).unwrap();
        }

        let delivery = bus
            .receive("notify", serde_json::json!({ "title": "T", "body": "B" }))
            .unwrap();

        assert_eq!(delivery, Delivery::Delivered);
        assert_eq!(
            notifier.shown(),
            vec![("T".to_string(), "B".to_string())]
        );
        // 不回发任何消息
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_open_link() {
        let (bus, _, _, shell) = setup();

        bus.receive(
            "open-link",
            serde_json::json!({ "url": "https://github.com/harbor" }),
        )
        .unwrap();

        assert_eq!(shell.opened(), vec!["https://github.com/harbor".to_string()]);
    }

    #[test]
    fn test_open_link_rejects_local_schemes() {
        let (bus, _, _, shell) = setup();

        let err = bus
            .receive("open-link", serde_json::json!({ "url": "file:///etc/passwd" }))
            .unwrap_err();

        assert!(matches!(err, BusError::ListenerFailed(_)));
        assert!(shell.opened().is_empty());
    }

    #[test]
    fn test_notification_failure_is_reported() {
        let (bus, _, notifier, _) = setup();
        notifier.fail_with("notification daemon unavailable");

        let err = bus
            .receive("notify", serde_json::json!({ "title": "T", "body": "B" }))
            .unwrap_err();

        assert_eq!(
            err,
            BusError::ListenerFailed("Notification failed: notification daemon unavailable".to_string())
        );
    }
}
