use serde::Serialize;
use std::sync::Arc;
use tauri::State;

use crate::infrastructure::{Delivery, MessageBus};
use crate::shared::AppResult;

// ============================================================================
// 响应 DTOs - 用于前端通信
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryResponse {
    pub delivered: bool,
}

impl From<Delivery> for DeliveryResponse {
    fn from(delivery: Delivery) -> Self {
        Self {
            delivered: delivery == Delivery::Delivered,
        }
    }
}

// ============================================================================
// 命令
// ============================================================================

/// UI→Host 的唯一入口，通道名必须是 notify 或 open-link
#[tauri::command]
pub fn bus_send(
    bus: State<'_, Arc<MessageBus>>,
    channel: String,
    payload: serde_json::Value,
) -> AppResult<DeliveryResponse> {
    Ok(bus.receive(&channel, payload)?.into())
}

/// UI 在 Host→UI 通道上挂载监听者；重放策略为 last 时返回是否重放了最后一条消息
#[tauri::command]
pub fn bus_attach(bus: State<'_, Arc<MessageBus>>, channel: String) -> AppResult<DeliveryResponse> {
    Ok(bus.attach(&channel)?.into())
}

#[tauri::command]
pub fn bus_detach(bus: State<'_, Arc<MessageBus>>, channel: String) -> AppResult<()> {
    bus.detach(&channel)?;
    Ok(())
}
