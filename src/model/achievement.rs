/// Achievement records
///
/// The core only evaluates unlock conditions against snapshots; flipping
/// `unlocked` is the caller's job.

use serde::{Deserialize, Serialize};

/// One achievement with its current unlock state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
}
