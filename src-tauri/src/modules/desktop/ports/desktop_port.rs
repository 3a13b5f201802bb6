// Desktop Ports
//
// 宿主进程可调用的操作系统能力

use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum DesktopError {
    #[error("Notification failed: {0}")]
    NotificationFailed(String),

    #[error("Link rejected: {0}")]
    LinkRejected(String),

    #[error("Failed to open link: {0}")]
    OpenFailed(String),
}

/// 系统通知
pub trait NotificationService: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> Result<(), DesktopError>;
}

/// 在默认浏览器中打开链接
pub trait ShellService: Send + Sync {
    fn open_url(&self, url: &Url) -> Result<(), DesktopError>;
}

/// 进程控制
pub trait ProcessControl: Send + Sync {
    /// 终止当前进程
    fn exit(&self, code: i32);

    /// 终止当前进程并重新启动
    fn relaunch(&self);
}
