// Tauri UI Sink
//
// 通过 Tauri 事件把 Host→UI 消息投递到 WebView，事件名即通道名

use tauri::{AppHandle, Emitter};

use super::message_bus::{BusError, Channel, UiSink};

pub struct TauriUiSink {
    app_handle: AppHandle,
}

impl TauriUiSink {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl UiSink for TauriUiSink {
    fn deliver(&self, channel: Channel, payload: serde_json::Value) -> Result<(), BusError> {
        self.app_handle
            .emit(channel.as_str(), payload)
            .map_err(|e| BusError::DeliveryFailed(e.to_string()))
    }
}
