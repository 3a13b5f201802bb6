// Window Port
//
// 窗口管理端口定义

use std::sync::Arc;
use thiserror::Error;

use crate::modules::window::domain::{WindowConfig, WindowSize};

/// 窗口错误类型
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("Window not found: {0}")]
    NotFound(String),

    #[error("Window operation failed: {0}")]
    OperationFailed(String),

    #[error("Window already exists: {0}")]
    AlreadyExists(String),

    #[error("Window has been destroyed")]
    Destroyed,
}

/// 单个窗口的操作端口
pub trait WindowPort: Send + Sync {
    /// 显示窗口
    fn show(&self) -> Result<(), WindowError>;

    /// 隐藏窗口
    fn hide(&self) -> Result<(), WindowError>;

    /// 设置窗口焦点
    fn focus(&self) -> Result<(), WindowError>;

    /// 窗口是否最小化
    fn is_minimized(&self) -> Result<bool, WindowError>;

    /// 从最小化恢复
    fn unminimize(&self) -> Result<(), WindowError>;
}

/// 窗口创建端口
pub trait WindowFactory: Send + Sync {
    /// 主显示器的可用工作区尺寸
    fn primary_work_area(&self) -> Result<WindowSize, WindowError>;

    /// 创建窗口并加载内容
    fn create(&self, config: &WindowConfig) -> Result<Arc<dyn WindowPort>, WindowError>;
}
