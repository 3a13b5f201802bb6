// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - config: 运行模式与宿主配置
// - desktop: 通知、外部链接、进程控制
// - instance: 单实例锁
// - relaunch: 复用窗口还是整进程重启
// - tray: 系统托盘
// - update: 更新状态机
// - window: 主窗口管理

pub mod config;
pub mod desktop;
pub mod instance;
pub mod relaunch;
pub mod tray;
pub mod update;
pub mod window;

pub use config::ConfigModule;
