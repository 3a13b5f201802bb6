pub mod errors;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use errors::*;
pub use types::*;
