pub mod controller;
pub mod error_reporter;

pub use controller::UpdateController;
pub use error_reporter::{ErrorDisposition, UncaughtErrorReporter};
