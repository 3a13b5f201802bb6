// Update Source Port
//
// 更新来源的抽象：检查、下载、退出时安装。超时由实现方自行决定。

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::update::domain::UpdateState;

/// 更新来源错误，Display 即展示给用户的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateSourceError {
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Manifest(String),

    #[error("No update has been downloaded")]
    NothingPending,

    #[error("{0}")]
    Install(String),
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Invalid update transition: {from} -> {to}")]
    InvalidTransition { from: UpdateState, to: UpdateState },

    #[error("Update checks are disabled in {0} mode")]
    Disabled(String),

    #[error(transparent)]
    Source(#[from] UpdateSourceError),
}

/// 检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCheck {
    UpToDate { current_version: String },
    Available { version: String },
}

#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// 查询更新清单；不会自动开始下载
    async fn check(&self) -> Result<UpdateCheck, UpdateSourceError>;

    /// 下载上一次检查发现的更新并暂存
    async fn download(&self) -> Result<(), UpdateSourceError>;

    /// 安装已暂存的更新，在进程退出时调用
    fn install_pending(&self) -> Result<(), UpdateSourceError>;
}
