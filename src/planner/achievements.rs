/// Achievement condition evaluation
///
/// A closed table maps achievement ids to unlock rules; unknown ids
/// never unlock. Adding an achievement means adding a table entry, not
/// a new branch in caller code.

use crate::model::{Achievement, LearningSnapshot, UserSnapshot};

/// Unlock rules, one per known achievement id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementRule {
    /// Study streak of at least 7 days
    StreakPioneer,
    /// Every topic in the named subject at 80% progress or better
    SubjectMastery(&'static str),
    /// Any single session of at least 300 minutes
    MarathonLearner,
    /// Every subject at 50% progress or better
    WellRounded,
}

impl AchievementRule {
    /// Look up the rule for an achievement id
    pub fn for_id(id: &str) -> Option<Self> {
        match id {
            "streak-pioneer" => Some(Self::StreakPioneer),
            "math-master" => Some(Self::SubjectMastery("Math")),
            "marathon-learner" => Some(Self::MarathonLearner),
            "well-rounded" => Some(Self::WellRounded),
            _ => None,
        }
    }

    /// Evaluate the rule against the current snapshots
    pub fn evaluate(&self, user: &UserSnapshot, learning: &LearningSnapshot) -> bool {
        match self {
            Self::StreakPioneer => user.preferences.streak_days >= 7,
            Self::SubjectMastery(subject_name) => learning
                .subjects
                .iter()
                .find(|s| s.name == *subject_name)
                .map(|s| s.topics.iter().all(|t| t.progress >= 80))
                .unwrap_or(false),
            Self::MarathonLearner => learning
                .sessions
                .iter()
                .any(|s| s.duration_minutes >= 300),
            Self::WellRounded => {
                !learning.subjects.is_empty()
                    && learning.subjects.iter().all(|s| s.progress >= 50)
            }
        }
    }
}

/// Return the ids of achievements whose condition newly holds
///
/// Already-unlocked achievements are skipped; `achievements` itself is
/// not mutated, the caller applies the unlocks.
pub fn check_achievement_conditions(
    user: &UserSnapshot,
    learning: &LearningSnapshot,
    achievements: &[Achievement],
) -> Vec<String> {
    achievements
        .iter()
        .filter(|a| !a.unlocked)
        .filter(|a| {
            AchievementRule::for_id(&a.id)
                .map(|rule| rule.evaluate(user, learning))
                .unwrap_or(false)
        })
        .map(|a| a.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Mastery, StudySession, SubjectProgress, Topic, UserPreferences};

    fn user(streak: u32) -> UserSnapshot {
        UserSnapshot {
            preferences: UserPreferences {
                streak_days: streak,
                ..UserPreferences::default()
            },
        }
    }

    fn achievement(id: &str, unlocked: bool) -> Achievement {
        Achievement {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            unlocked,
        }
    }

    fn math_learning(topic_progress: u8) -> LearningSnapshot {
        LearningSnapshot {
            subjects: vec![SubjectProgress {
                id: "math".to_string(),
                name: "Math".to_string(),
                progress: 85,
                topics: vec![
                    Topic {
                        name: "Calculus".to_string(),
                        progress: topic_progress,
                        mastery: Mastery::High,
                    },
                    Topic {
                        name: "Algebra".to_string(),
                        progress: 95,
                        mastery: Mastery::High,
                    },
                ],
            }],
            sessions: vec![],
        }
    }

    #[test]
    fn test_streak_rule() {
        let learning = LearningSnapshot::default();
        assert!(AchievementRule::StreakPioneer.evaluate(&user(7), &learning));
        assert!(!AchievementRule::StreakPioneer.evaluate(&user(6), &learning));
    }

    #[test]
    fn test_subject_mastery_rule() {
        let rule = AchievementRule::SubjectMastery("Math");
        assert!(rule.evaluate(&user(0), &math_learning(80)));
        assert!(!rule.evaluate(&user(0), &math_learning(79)));
        // Subject missing entirely -> false
        assert!(!rule.evaluate(&user(0), &LearningSnapshot::default()));
    }

    #[test]
    fn test_marathon_rule() {
        let mut learning = LearningSnapshot::default();
        learning.sessions.push(StudySession {
            subject_id: "math".to_string(),
            date: "2026-08-28T09:00:00".parse().unwrap(),
            duration_minutes: 300,
            efficiency: 70,
        });

        assert!(AchievementRule::MarathonLearner.evaluate(&user(0), &learning));

        learning.sessions[0].duration_minutes = 299;
        assert!(!AchievementRule::MarathonLearner.evaluate(&user(0), &learning));
    }

    #[test]
    fn test_well_rounded_rule() {
        let mut learning = math_learning(90);
        assert!(AchievementRule::WellRounded.evaluate(&user(0), &learning));

        learning.subjects.push(SubjectProgress {
            id: "history".to_string(),
            name: "History".to_string(),
            progress: 49,
            topics: vec![],
        });
        assert!(!AchievementRule::WellRounded.evaluate(&user(0), &learning));

        // No subjects at all never unlocks
        assert!(!AchievementRule::WellRounded.evaluate(&user(0), &LearningSnapshot::default()));
    }

    #[test]
    fn test_check_skips_unlocked_and_unknown() {
        let achievements = vec![
            achievement("streak-pioneer", true), // already unlocked
            achievement("marathon-learner", false),
            achievement("no-such-achievement", false),
        ];
        let mut learning = LearningSnapshot::default();
        learning.sessions.push(StudySession {
            subject_id: "math".to_string(),
            date: "2026-08-28T09:00:00".parse().unwrap(),
            duration_minutes: 400,
            efficiency: 70,
        });

        let unlocked = check_achievement_conditions(&user(30), &learning, &achievements);
        assert_eq!(unlocked, vec!["marathon-learner".to_string()]);
    }

    #[test]
    fn test_check_does_not_mutate_input() {
        let achievements = vec![achievement("streak-pioneer", false)];
        let learning = LearningSnapshot::default();

        let unlocked = check_achievement_conditions(&user(10), &learning, &achievements);
        assert_eq!(unlocked, vec!["streak-pioneer".to_string()]);
        // Input list still shows the achievement as locked
        assert!(!achievements[0].unlocked);
    }
}
