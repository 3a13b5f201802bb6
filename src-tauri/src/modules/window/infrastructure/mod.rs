// Window Infrastructure Layer

pub mod tauri_adapter;

pub use tauri_adapter::*;
