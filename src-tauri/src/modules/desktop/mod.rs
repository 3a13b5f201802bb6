// Desktop Module
//
// 操作系统能力模块：通知、外部链接、进程控制
//
// 层次结构:
// - ports: NotificationService / ShellService / ProcessControl 能力接口
// - application: 处理 UI 经总线发来的请求
// - infrastructure: 基于 Tauri 插件的实现

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::DesktopRequestHandler;
pub use infrastructure::TauriDesktopServices;
pub use ports::{DesktopError, NotificationService, ProcessControl, ShellService};
