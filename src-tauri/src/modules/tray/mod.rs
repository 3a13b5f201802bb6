// Tray Module
//
// 系统托盘模块，管理托盘图标和菜单
//
// 功能：
// - 常驻托盘图标与提示文本
// - 两项托盘菜单：打开 / 退出
// - 双击托盘图标等同于“打开”
// - 窗口隐藏后托盘是唯一的重新激活入口

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::*;
pub use domain::*;
pub use infrastructure::*;
pub use ports::*;
