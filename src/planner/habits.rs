/// Study habit analysis
///
/// Derives an ephemeral habit profile from the session history. The
/// current date is a parameter, not an ambient read, so the trailing
/// seven-day consistency window is fully deterministic in tests.

use crate::model::StudySession;
use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Time of day categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,   // 5am - 12pm
    Afternoon, // 12pm - 6pm
    Evening,   // 6pm - 10pm
    Night,     // 10pm - 5am
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfDay::Morning => write!(f, "morning"),
            TimeOfDay::Afternoon => write!(f, "afternoon"),
            TimeOfDay::Evening => write!(f, "evening"),
            TimeOfDay::Night => write!(f, "night"),
        }
    }
}

/// Derived study habit profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitProfile {
    pub preferred_time_of_day: TimeOfDay,
    pub average_duration_minutes: u32,
    /// Subject id with the highest mean efficiency, if any sessions exist
    pub most_productive_subject: Option<String>,
    pub consistency_score: u8, // 0-100
}

impl Default for HabitProfile {
    fn default() -> Self {
        Self {
            preferred_time_of_day: TimeOfDay::Morning,
            average_duration_minutes: 60,
            most_productive_subject: None,
            consistency_score: 0,
        }
    }
}

/// Analyze study habits from the session history
///
/// Empty history returns the default profile. `today` anchors the
/// trailing seven-day consistency window.
pub fn analyze_study_habits(sessions: &[StudySession], today: NaiveDate) -> HabitProfile {
    if sessions.is_empty() {
        return HabitProfile::default();
    }

    HabitProfile {
        preferred_time_of_day: preferred_time_of_day(sessions),
        average_duration_minutes: average_duration(sessions),
        most_productive_subject: most_productive_subject(sessions),
        consistency_score: consistency_score(sessions, today),
    }
}

/// Bucket a local hour into a time-of-day category
fn bucket_for_hour(hour: u32) -> TimeOfDay {
    match hour {
        5..=11 => TimeOfDay::Morning,
        12..=17 => TimeOfDay::Afternoon,
        18..=21 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Most common session time bucket
///
/// Ties go to the earlier bucket in the fixed order morning, afternoon,
/// evening, night.
fn preferred_time_of_day(sessions: &[StudySession]) -> TimeOfDay {
    let mut counts = [0usize; 4]; // morning, afternoon, evening, night

    for session in sessions {
        let slot = match bucket_for_hour(session.date.hour()) {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::Evening => 2,
            TimeOfDay::Night => 3,
        };
        counts[slot] += 1;
    }

    const ORDER: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    let mut best = ORDER[0];
    let mut best_count = counts[0];
    for (i, bucket) in ORDER.iter().enumerate().skip(1) {
        if counts[i] > best_count {
            best = *bucket;
            best_count = counts[i];
        }
    }

    best
}

/// Rounded mean session duration in minutes
fn average_duration(sessions: &[StudySession]) -> u32 {
    let total: u64 = sessions.iter().map(|s| s.duration_minutes as u64).sum();
    (total as f64 / sessions.len() as f64).round() as u32
}

/// Subject with the highest mean efficiency
///
/// Ties go to the subject encountered first in input order.
fn most_productive_subject(sessions: &[StudySession]) -> Option<String> {
    // Accumulate per subject, preserving first-seen order
    let mut totals: Vec<(String, u64, u64)> = Vec::new(); // (id, sum, count)

    for session in sessions {
        match totals.iter_mut().find(|(id, _, _)| *id == session.subject_id) {
            Some((_, sum, count)) => {
                *sum += session.efficiency as u64;
                *count += 1;
            }
            None => totals.push((session.subject_id.clone(), session.efficiency as u64, 1)),
        }
    }

    let mut best: Option<&str> = None;
    let mut best_avg = 0.0_f64;

    for (id, sum, count) in &totals {
        let avg = *sum as f64 / *count as f64;
        if avg > best_avg || best.is_none() {
            best_avg = avg;
            best = Some(id);
        }
    }

    best.map(|s| s.to_string())
}

/// Share of the trailing 7 days (inclusive of today) with a session
fn consistency_score(sessions: &[StudySession], today: NaiveDate) -> u8 {
    let mut active_days: HashSet<NaiveDate> = HashSet::new();

    for session in sessions {
        let day = session.date.date();
        let days_ago = (today - day).num_days();
        if (0..7).contains(&days_ago) {
            active_days.insert(day);
        }
    }

    ((active_days.len() as f64 / 7.0) * 100.0).round() as u8
}
