/// Learning-domain records
///
/// Study sessions and subject progress are created and mutated by the
/// study-tracking flow outside this crate; the planner only reads
/// snapshots of them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Coarse retention level for a topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Mastery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mastery::Low => write!(f, "low"),
            Mastery::Medium => write!(f, "medium"),
            Mastery::High => write!(f, "high"),
        }
    }
}

/// One recorded study interval
///
/// `date` is the local wall time at which the session happened, as
/// recorded by the tracker. Hour-of-day bucketing reads it directly, so
/// results do not depend on the host timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub subject_id: String,
    pub date: NaiveDateTime,
    pub duration_minutes: u32,
    pub efficiency: u8, // 0-100
}

/// A single topic within a subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub progress: u8, // 0-100
    pub mastery: Mastery,
}

/// Progress snapshot for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub id: String,
    pub name: String,
    pub progress: u8, // 0-100
    pub topics: Vec<Topic>,
}

/// Everything the planner reads about the user's learning history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningSnapshot {
    pub subjects: Vec<SubjectProgress>,
    pub sessions: Vec<StudySession>,
}
