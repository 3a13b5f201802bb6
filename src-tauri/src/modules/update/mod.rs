// Update Module
//
// 软件更新模块，采用六边形架构
//
// 层次结构:
// - domain: 更新状态机、UpdateSession 与状态提示文案
// - ports: 更新来源（检查 / 下载 / 安装）的抽象接口
// - application: UpdateController 与未捕获错误报告
// - infrastructure: 基于 tauri-plugin-updater 的更新来源

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{UpdateSession, UpdateSnapshot, UpdateState};

// Ports
pub use ports::{UpdateCheck, UpdateError, UpdateSource, UpdateSourceError};

// Application
pub use application::{ErrorDisposition, UncaughtErrorReporter, UpdateController};

// Infrastructure
pub use infrastructure::TauriUpdateSource;
