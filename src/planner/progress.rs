/// Subject progress analysis
///
/// Finds the weakest and strongest subjects and flags topics that need
/// attention.

use crate::model::{Mastery, SubjectProgress};
use serde::{Deserialize, Serialize};

/// A topic flagged for attention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionItem {
    pub subject: String,
    pub topic: String,
    pub progress: u8,
    pub mastery: Mastery,
}

/// Derived progress profile across all subjects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressProfile {
    pub weakest_subject: Option<String>,
    pub strongest_subject: Option<String>,
    pub average_progress: u8,
    pub needs_attention: Vec<AttentionItem>,
}

/// Analyze subject progress snapshots
///
/// Extrema ties keep the subject encountered first in input order.
/// A topic needs attention when its progress is below 50 or its mastery
/// is low; flagged topics keep (subject, topic) input order.
pub fn analyze_subject_progress(subjects: &[SubjectProgress]) -> ProgressProfile {
    let first = match subjects.first() {
        Some(s) => s,
        None => return ProgressProfile::default(),
    };

    let mut weakest = first;
    let mut strongest = first;
    let mut total_progress: u64 = 0;
    let mut needs_attention = Vec::new();

    for subject in subjects {
        total_progress += subject.progress as u64;

        if subject.progress < weakest.progress {
            weakest = subject;
        }
        if subject.progress > strongest.progress {
            strongest = subject;
        }

        for topic in &subject.topics {
            if topic.progress < 50 || topic.mastery == Mastery::Low {
                needs_attention.push(AttentionItem {
                    subject: subject.name.clone(),
                    topic: topic.name.clone(),
                    progress: topic.progress,
                    mastery: topic.mastery,
                });
            }
        }
    }

    let average_progress =
        (total_progress as f64 / subjects.len() as f64).round() as u8;

    ProgressProfile {
        weakest_subject: Some(weakest.name.clone()),
        strongest_subject: Some(strongest.name.clone()),
        average_progress,
        needs_attention,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;

    fn subject(id: &str, name: &str, progress: u8, topics: Vec<Topic>) -> SubjectProgress {
        SubjectProgress {
            id: id.to_string(),
            name: name.to_string(),
            progress,
            topics,
        }
    }

    fn topic(name: &str, progress: u8, mastery: Mastery) -> Topic {
        Topic {
            name: name.to_string(),
            progress,
            mastery,
        }
    }

    #[test]
    fn test_empty_subjects_default_profile() {
        let profile = analyze_subject_progress(&[]);

        assert_eq!(profile.weakest_subject, None);
        assert_eq!(profile.strongest_subject, None);
        assert_eq!(profile.average_progress, 0);
        assert!(profile.needs_attention.is_empty());
    }

    #[test]
    fn test_extrema_and_average() {
        let subjects = vec![
            subject("math", "Math", 85, vec![]),
            subject("history", "History", 40, vec![]),
        ];

        let profile = analyze_subject_progress(&subjects);
        assert_eq!(profile.weakest_subject.as_deref(), Some("History"));
        assert_eq!(profile.strongest_subject.as_deref(), Some("Math"));
        // mean of 85 and 40 is 62.5, rounds to 63
        assert_eq!(profile.average_progress, 63);
    }

    #[test]
    fn test_extrema_ties_keep_first_subject() {
        let subjects = vec![
            subject("math", "Math", 70, vec![]),
            subject("physics", "Physics", 70, vec![]),
        ];

        let profile = analyze_subject_progress(&subjects);
        assert_eq!(profile.weakest_subject.as_deref(), Some("Math"));
        assert_eq!(profile.strongest_subject.as_deref(), Some("Math"));
    }

    #[test]
    fn test_needs_attention_filter_and_order() {
        let subjects = vec![
            subject(
                "math",
                "Math",
                85,
                vec![
                    topic("Calculus", 90, Mastery::High),
                    topic("Statistics", 30, Mastery::Medium), // low progress
                ],
            ),
            subject(
                "english",
                "English",
                70,
                vec![
                    topic("Speaking", 60, Mastery::Low), // low mastery
                    topic("Reading", 80, Mastery::High),
                ],
            ),
        ];

        let profile = analyze_subject_progress(&subjects);
        assert_eq!(profile.needs_attention.len(), 2);
        assert_eq!(profile.needs_attention[0].topic, "Statistics");
        assert_eq!(profile.needs_attention[0].subject, "Math");
        assert_eq!(profile.needs_attention[1].topic, "Speaking");
        assert_eq!(profile.needs_attention[1].mastery, Mastery::Low);
    }

    #[test]
    fn test_single_subject_is_both_extrema() {
        let subjects = vec![subject("math", "Math", 55, vec![])];

        let profile = analyze_subject_progress(&subjects);
        assert_eq!(profile.weakest_subject.as_deref(), Some("Math"));
        assert_eq!(profile.strongest_subject.as_deref(), Some("Math"));
        assert_eq!(profile.average_progress, 55);
    }
}
