// Instance Module
//
// 单实例锁与重复启动转发
//
// - guard: 重复启动时恢复并聚焦现有窗口
// - plugin: 基于 tauri-plugin-single-instance 获取系统级单实例锁

pub mod guard;
#[cfg(desktop)]
pub mod plugin;

pub use guard::{InstanceGuard, LaunchOutcome, SecondLaunch};
#[cfg(desktop)]
pub use plugin::acquire;
