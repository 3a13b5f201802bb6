pub mod bus;
pub mod update;

pub use bus::*;
pub use update::*;
