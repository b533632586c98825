/// study-compass library
///
/// Pure planning and voice-command core for the learning dashboard.
/// The UI layer calls in with plain snapshots and gets plain data back;
/// time and randomness are passed in by the caller.

pub mod error;
pub mod model;
pub mod planner;
pub mod voice;

// Re-exports for convenience
pub use error::{CompassError, Result};
pub use model::Snapshot;
