// Window Application Layer

pub mod window_manager;

pub use window_manager::*;
