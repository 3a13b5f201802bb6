// Tray Application Layer

pub mod controller;

pub use controller::*;
