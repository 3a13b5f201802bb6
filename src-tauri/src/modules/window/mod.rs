// Window Module
//
// 主窗口管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含窗口配置、可见性状态机与内容来源
// - ports: 端口层，定义窗口操作与窗口创建的抽象接口
// - application: WindowManager，负责关闭拦截、首次加载与重新激活
// - infrastructure: 基础设施层，实现 Tauri 窗口适配器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    ContentSource, WindowConfig, WindowLabel, WindowSize, WindowVisibility,
};

// Ports
pub use ports::{WindowError, WindowFactory, WindowPort};

// Application
pub use application::{CloseDecision, WindowManager};

// Infrastructure
pub use infrastructure::{TauriWindowAdapter, TauriWindowFactory};
