// Message Bus
//
// 宿主进程与 UI 之间的固定通道总线
//
// - 通道集合封闭，未知通道名一律拒绝
// - 投递语义为至多一次：接收端未挂载监听者时消息被丢弃
// - 可选的 ReplayPolicy::Last 为每个 Host→UI 通道缓存最后一条未投递的消息，
//   监听者挂载时重放一次

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use thiserror::Error;

use crate::shared::ReplayPolicy;

/// 总线错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("Channel {channel} cannot be used in direction {direction:?}")]
    WrongDirection {
        channel: Channel,
        direction: Direction,
    },

    #[error("Invalid payload for {channel}: {reason}")]
    InvalidPayload { channel: Channel, reason: String },

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Listener failed: {0}")]
    ListenerFailed(String),
}

/// 消息方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    UiToHost,
    HostToUi,
}

/// 总线通道（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Notify,
    OpenLink,
    MainProcessMessage,
    UpdateMessage,
    UpdateStatus,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Notify,
        Channel::OpenLink,
        Channel::MainProcessMessage,
        Channel::UpdateMessage,
        Channel::UpdateStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Notify => "notify",
            Channel::OpenLink => "open-link",
            Channel::MainProcessMessage => "main-process-message",
            Channel::UpdateMessage => "update-message",
            Channel::UpdateStatus => "update-status",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Channel::Notify | Channel::OpenLink => Direction::UiToHost,
            Channel::MainProcessMessage | Channel::UpdateMessage | Channel::UpdateStatus => {
                Direction::HostToUi
            }
        }
    }
}

impl FromStr for Channel {
    type Err = BusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| BusError::UnknownChannel(s.to_string()))
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// 通道负载
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyPayload {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenLinkPayload {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartbeatPayload {
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMessagePayload {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusPayload {
    pub ready: bool,
}

/// Host→UI 消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMessage {
    Heartbeat(HeartbeatPayload),
    UpdateMessage(UpdateMessagePayload),
    UpdateStatus(UpdateStatusPayload),
}

impl HostMessage {
    pub fn heartbeat(timestamp: impl Into<String>) -> Self {
        HostMessage::Heartbeat(HeartbeatPayload {
            timestamp: timestamp.into(),
        })
    }

    pub fn update_message(text: impl Into<String>) -> Self {
        HostMessage::UpdateMessage(UpdateMessagePayload { text: text.into() })
    }

    pub fn update_status(ready: bool) -> Self {
        HostMessage::UpdateStatus(UpdateStatusPayload { ready })
    }

    pub fn channel(&self) -> Channel {
        match self {
            HostMessage::Heartbeat(_) => Channel::MainProcessMessage,
            HostMessage::UpdateMessage(_) => Channel::UpdateMessage,
            HostMessage::UpdateStatus(_) => Channel::UpdateStatus,
        }
    }

    pub fn payload(&self) -> serde_json::Value {
        match self {
            HostMessage::Heartbeat(p) => serde_json::json!({ "timestamp": p.timestamp }),
            HostMessage::UpdateMessage(p) => serde_json::json!({ "text": p.text }),
            HostMessage::UpdateStatus(p) => serde_json::json!({ "ready": p.ready }),
        }
    }
}

/// UI→Host 消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMessage {
    Notify(NotifyPayload),
    OpenLink(OpenLinkPayload),
}

impl UiMessage {
    pub fn channel(&self) -> Channel {
        match self {
            UiMessage::Notify(_) => Channel::Notify,
            UiMessage::OpenLink(_) => Channel::OpenLink,
        }
    }

    /// 按通道名解析 UI 发来的消息
    pub fn parse(channel: &str, payload: serde_json::Value) -> Result<Self, BusError> {
        let channel = Channel::from_str(channel)?;
        let invalid = |e: serde_json::Error| BusError::InvalidPayload {
            channel,
            reason: e.to_string(),
        };

        match channel {
            Channel::Notify => Ok(UiMessage::Notify(
                serde_json::from_value(payload).map_err(invalid)?,
            )),
            Channel::OpenLink => Ok(UiMessage::OpenLink(
                serde_json::from_value(payload).map_err(invalid)?,
            )),
            other => Err(BusError::WrongDirection {
                channel: other,
                direction: Direction::UiToHost,
            }),
        }
    }
}

// ============================================================================
// 端口
// ============================================================================

/// UI 侧的投递端，由 Tauri 事件系统实现
pub trait UiSink: Send + Sync {
    fn deliver(&self, channel: Channel, payload: serde_json::Value) -> Result<(), BusError>;
}

/// 宿主侧监听者
pub trait HostListener: Send + Sync {
    fn on_message(&self, message: UiMessage) -> Result<(), BusError>;
}

/// 单条消息的投递结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Dropped,
}

pub struct MessageBus {
    sink: Arc<dyn UiSink>,
    replay: ReplayPolicy,
    attached: Mutex<HashSet<Channel>>,
    last_values: Mutex<HashMap<Channel, HostMessage>>,
    host_listener: RwLock<Option<Arc<dyn HostListener>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // 总线可能在 panic hook 中被调用，忽略中毒状态
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MessageBus {
    pub fn new(sink: Arc<dyn UiSink>, replay: ReplayPolicy) -> Self {
        Self {
            sink,
            replay,
            attached: Mutex::new(HashSet::new()),
            last_values: Mutex::new(HashMap::new()),
            host_listener: RwLock::new(None),
        }
    }

    /// 向 UI 发送消息
    ///
    /// 只有被丢弃的消息才会留作重放；成功投递会清除该通道的待重放值
    pub fn send(&self, message: HostMessage) -> Result<Delivery, BusError> {
        let channel = message.channel();

        if !lock(&self.attached).contains(&channel) {
            tracing::debug!("[MessageBus] No listener on {}, message dropped", channel);
            if self.replay == ReplayPolicy::Last {
                lock(&self.last_values).insert(channel, message);
            }
            return Ok(Delivery::Dropped);
        }

        tracing::debug!("[MessageBus] Delivering {:?}", message);
        self.sink.deliver(channel, message.payload())?;
        lock(&self.last_values).remove(&channel);
        Ok(Delivery::Delivered)
    }

    /// 发送消息，投递失败只记录日志
    pub fn publish(&self, message: HostMessage) {
        if let Err(e) = self.send(message) {
            tracing::warn!("[MessageBus] {}", e);
        }
    }

    /// UI 在某个 Host→UI 通道上挂载监听者
    ///
    /// 首次挂载且重放策略为 Last 时，重放该通道最后一条消息
    pub fn attach(&self, channel: &str) -> Result<Delivery, BusError> {
        let channel = Channel::from_str(channel)?;
        if channel.direction() != Direction::HostToUi {
            return Err(BusError::WrongDirection {
                channel,
                direction: Direction::HostToUi,
            });
        }

        let newly_attached = lock(&self.attached).insert(channel);
        tracing::debug!("[MessageBus] Listener attached on {}", channel);

        if !newly_attached || self.replay != ReplayPolicy::Last {
            return Ok(Delivery::Dropped);
        }

        let last = lock(&self.last_values).remove(&channel);
        match last {
            Some(message) => {
                tracing::debug!("[MessageBus] Replaying last value on {}", channel);
                self.sink.deliver(channel, message.payload())?;
                Ok(Delivery::Delivered)
            }
            None => Ok(Delivery::Dropped),
        }
    }

    pub fn detach(&self, channel: &str) -> Result<(), BusError> {
        let channel = Channel::from_str(channel)?;
        lock(&self.attached).remove(&channel);
        tracing::debug!("[MessageBus] Listener detached from {}", channel);
        Ok(())
    }

    pub fn is_attached(&self, channel: Channel) -> bool {
        lock(&self.attached).contains(&channel)
    }

    /// 注册宿主侧监听者
    pub fn set_host_listener(&self, listener: Arc<dyn HostListener>) {
        let mut slot = self
            .host_listener
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(listener);
    }

    /// 接收 UI 发来的消息并交给宿主监听者
    pub fn receive(&self, channel: &str, payload: serde_json::Value) -> Result<Delivery, BusError> {
        let message = UiMessage::parse(channel, payload)?;

        let listener = self
            .host_listener
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        match listener {
            Some(listener) => {
                tracing::debug!("[MessageBus] Received {:?}", message);
                listener.on_message(message)?;
                Ok(Delivery::Delivered)
            }
            None => {
                tracing::debug!(
                    "[MessageBus] No host listener, {} dropped",
                    message.channel()
                );
                Ok(Delivery::Dropped)
            }
        }
    }
}
