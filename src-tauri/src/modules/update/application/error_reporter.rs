// Uncaught Error Reporter
//
// 宿主进程中未捕获的错误统一经 update-message 通道以 "Error: " 前缀报告，
// 是否随后终止进程由 UncaughtErrorPolicy 决定

use std::sync::Arc;

use crate::infrastructure::{HostMessage, MessageBus};
use crate::modules::update::domain::messages;
use crate::shared::UncaughtErrorPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisposition {
    Continue,
    Terminate,
}

pub struct UncaughtErrorReporter {
    bus: Arc<MessageBus>,
    policy: UncaughtErrorPolicy,
}

impl UncaughtErrorReporter {
    pub fn new(bus: Arc<MessageBus>, policy: UncaughtErrorPolicy) -> Self {
        Self { bus, policy }
    }

    pub fn policy(&self) -> UncaughtErrorPolicy {
        self.policy
    }

    pub fn report(&self, message: &str) -> ErrorDisposition {
        tracing::error!("Uncaught error: {}", message);
        self.bus
            .publish(HostMessage::update_message(messages::uncaught(message)));

        match self.policy {
            UncaughtErrorPolicy::Report => ErrorDisposition::Continue,
            UncaughtErrorPolicy::Terminate => ErrorDisposition::Terminate,
        }
    }
}
