pub mod update_source;

pub use update_source::{UpdateCheck, UpdateError, UpdateSource, UpdateSourceError};
