// Update Messages
//
// update-message 通道上展示给用户的状态文案

pub const CHECKING: &str = "Checking For Updates...";
pub const AVAILABLE: &str = "Update available. Downloading...";
pub const DOWNLOADED: &str = "Update downloaded. Restart the Application !";

pub fn check_failed(reason: &str) -> String {
    format!("Update check failed: {}", reason)
}

pub fn download_failed(reason: &str) -> String {
    format!("Update download failed: {}", reason)
}

pub fn up_to_date(version: &str) -> String {
    format!("No updates available. Current Version : v{}", version)
}

pub fn uncaught(message: &str) -> String {
    format!("Error: {}", message)
}
