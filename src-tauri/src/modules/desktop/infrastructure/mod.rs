// Desktop Infrastructure Layer

pub mod tauri_services;

pub use tauri_services::*;
