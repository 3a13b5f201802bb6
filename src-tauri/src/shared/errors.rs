use thiserror::Error;

use crate::infrastructure::BusError;
use crate::modules::config::ConfigError;
use crate::modules::desktop::DesktopError;
use crate::modules::tray::TrayError;
use crate::modules::update::UpdateError;
use crate::modules::window::WindowError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Message bus error: {0}")]
    BusError(#[from] BusError),

    #[error("Window error: {0}")]
    WindowError(#[from] WindowError),

    #[error("Tray error: {0}")]
    TrayError(#[from] TrayError),

    #[error("Desktop service error: {0}")]
    DesktopError(#[from] DesktopError),

    #[error("Update error: {0}")]
    UpdateError(#[from] UpdateError),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
