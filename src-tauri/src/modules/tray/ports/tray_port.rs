// Tray Port
//
// 托盘管理端口定义

use thiserror::Error;

use crate::modules::tray::domain::TrayAction;

/// 托盘错误类型
#[derive(Error, Debug)]
pub enum TrayError {
    #[error("Tray not initialized")]
    NotInitialized,

    #[error("Tray already exists")]
    AlreadyExists,

    #[error("Tray operation failed: {0}")]
    OperationFailed(String),
}

/// 托盘端口 - 定义托盘操作抽象
pub trait TrayPort: Send + Sync {
    /// 移除托盘图标
    fn remove(&self) -> Result<(), TrayError>;
}

/// 托盘动作处理器
pub trait TrayActionHandler: Send + Sync {
    /// 处理托盘动作
    fn handle_action(&self, action: TrayAction);
}
