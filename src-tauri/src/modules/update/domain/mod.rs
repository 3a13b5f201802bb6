pub mod messages;
pub mod session;
pub mod state;

pub use session::{UpdateSession, UpdateSnapshot};
pub use state::UpdateState;
