// Tray Domain Layer

pub mod entities;
pub mod events;

pub use entities::*;
pub use events::*;
