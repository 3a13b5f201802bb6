// Infrastructure Layer - 基础设施层
//
// 跨模块共享的进程级设施：
// - message_bus: 宿主与 UI 之间的固定通道总线
// - state: ApplicationShell 进程上下文
// - tauri_sink: 基于 Tauri 事件系统的 UI 投递端
// - panic_guard: 全局未捕获错误拦截
// - logging: tracing 初始化

pub mod logging;
pub mod message_bus;
pub mod panic_guard;
pub mod state;
pub mod tauri_sink;

pub use message_bus::*;
pub use state::ApplicationShell;
pub use tauri_sink::TauriUiSink;
