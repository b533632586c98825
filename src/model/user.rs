/// User records
///
/// Supplied per call by the caller; the core never stores them.

use serde::{Deserialize, Serialize};

/// Study preferences as edited on the settings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub preferred_study_time: String,
    pub study_duration_minutes: u32,
    pub break_interval_minutes: u32,
    pub streak_days: u32,
    pub level: u32,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_study_time: "morning".to_string(),
            study_duration_minutes: 60,
            break_interval_minutes: 10,
            streak_days: 0,
            level: 1,
        }
    }
}

/// User snapshot passed into achievement evaluation and voice feedback
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub preferences: UserPreferences,
}
