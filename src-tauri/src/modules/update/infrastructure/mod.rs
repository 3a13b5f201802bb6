pub mod tauri_source;

pub use tauri_source::TauriUpdateSource;
