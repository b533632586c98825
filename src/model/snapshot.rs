// Snapshot loading for the CLI
//
// The dashboard keeps its state as whole-object JSON blobs; the binary
// reads the same shape from a file and hands the pieces to the core.

use crate::error::Result;
use crate::model::{Achievement, LearningSnapshot, UserSnapshot};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a CLI invocation needs in one file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: UserSnapshot,
    pub learning: LearningSnapshot,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Snapshot {
    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }
}
