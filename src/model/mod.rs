/// Data model
///
/// Plain typed records exchanged with the UI layer. The core only reads
/// snapshots of these and returns freshly built values; it never
/// persists anything.

pub mod achievement;
pub mod learning;
pub mod plan;
pub mod snapshot;
pub mod user;

pub use achievement::Achievement;
pub use learning::{LearningSnapshot, Mastery, StudySession, SubjectProgress, Topic};
pub use plan::{
    Goal, GoalKind, LearningPlan, Priority, Recommendation, Resource, ResourceKind,
};
pub use snapshot::Snapshot;
pub use user::{UserPreferences, UserSnapshot};
