/// Goal generation
///
/// Builds daily, weekly, and monthly goal lists from the derived habit
/// and progress profiles, and composes them into a full learning plan.
/// Generation is deterministic: identical inputs yield identical goals.

use crate::model::{
    Goal, GoalKind, LearningPlan, LearningSnapshot, Priority, UserPreferences,
};
use crate::planner::{analyze_study_habits, analyze_subject_progress, HabitProfile, ProgressProfile};
use chrono::NaiveDate;

/// Hands out small sequential goal ids, unique within one list only
struct GoalIds(u32);

impl GoalIds {
    fn new() -> Self {
        Self(0)
    }

    fn next(&mut self) -> String {
        self.0 += 1;
        self.0.to_string()
    }
}

/// Generate today's goal list
///
/// Order is fixed: weakest subject, first attention topic, strongest
/// subject reinforcement, then a break reminder. The break goal is
/// always present and always last.
pub fn generate_daily_goals(
    _habits: &HabitProfile,
    progress: &ProgressProfile,
    preferences: &UserPreferences,
) -> Vec<Goal> {
    let mut goals = Vec::new();
    let mut ids = GoalIds::new();
    let study_minutes = preferences.study_duration_minutes;

    if let Some(weakest) = &progress.weakest_subject {
        goals.push(Goal {
            id: ids.next(),
            title: format!("Study {}", weakest),
            description: format!("Focus on understanding and mastering {}", weakest),
            priority: Priority::High,
            completed: false,
            kind: GoalKind::Timed {
                duration_minutes: study_minutes.min(60),
                is_break: false,
            },
        });
    }

    if let Some(item) = progress.needs_attention.first() {
        goals.push(Goal {
            id: ids.next(),
            title: format!("Review {} in {}", item.topic, item.subject),
            description: format!("Work through the key concepts of {}", item.topic),
            priority: Priority::High,
            completed: false,
            kind: GoalKind::Timed {
                duration_minutes: study_minutes.min(45),
                is_break: false,
            },
        });
    }

    if let Some(strongest) = &progress.strongest_subject {
        goals.push(Goal {
            id: ids.next(),
            title: format!("Reinforce {}", strongest),
            description: format!("Do some advanced exercises in {}", strongest),
            priority: Priority::Medium,
            completed: false,
            kind: GoalKind::Timed {
                duration_minutes: study_minutes.min(30),
                is_break: false,
            },
        });
    }

    goals.push(Goal {
        id: ids.next(),
        title: "Break time".to_string(),
        description: format!(
            "Rest {} minutes after every {} minutes of study",
            preferences.break_interval_minutes, study_minutes
        ),
        priority: Priority::Medium,
        completed: false,
        kind: GoalKind::Timed {
            duration_minutes: preferences.break_interval_minutes,
            is_break: true,
        },
    });

    goals
}

/// Generate this week's goal list
pub fn generate_weekly_goals(
    _habits: &HabitProfile,
    progress: &ProgressProfile,
    preferences: &UserPreferences,
) -> Vec<Goal> {
    let mut goals = Vec::new();
    let mut ids = GoalIds::new();

    let avg = progress.average_progress as u32;
    let raised_avg = (avg + 5).min(100);
    goals.push(Goal {
        id: ids.next(),
        title: "Raise overall progress".to_string(),
        description: format!(
            "Raise average progress from {}% to {}%",
            avg, raised_avg
        ),
        priority: Priority::High,
        completed: false,
        kind: GoalKind::Tracked {
            progress: 0,
            target: raised_avg,
        },
    });

    if let Some(weakest) = &progress.weakest_subject {
        goals.push(Goal {
            id: ids.next(),
            title: format!("Improve mastery of {}", weakest),
            description: format!("Complete at least 3 topics in {}", weakest),
            priority: Priority::High,
            completed: false,
            kind: GoalKind::Tracked {
                progress: 0,
                target: 3,
            },
        });
    }

    let daily_minutes = preferences.study_duration_minutes.min(30);
    goals.push(Goal {
        id: ids.next(),
        title: "Keep a steady rhythm".to_string(),
        description: format!(
            "Study at least 5 days this week, at least {} minutes each day",
            daily_minutes
        ),
        priority: Priority::Medium,
        completed: false,
        kind: GoalKind::Tracked {
            progress: 0,
            target: 5,
        },
    });

    goals.push(Goal {
        id: ids.next(),
        title: "Full review".to_string(),
        description: "Review everything studied this week".to_string(),
        priority: Priority::Medium,
        completed: false,
        kind: GoalKind::Tracked {
            progress: 0,
            target: 1,
        },
    });

    goals
}

/// Generate this month's goal list
pub fn generate_monthly_goals(
    habits: &HabitProfile,
    progress: &ProgressProfile,
    _preferences: &UserPreferences,
) -> Vec<Goal> {
    let mut goals = Vec::new();
    let mut ids = GoalIds::new();

    goals.push(Goal {
        id: ids.next(),
        title: "Level up across the board".to_string(),
        description: "Make visible progress in every subject, 10% higher on average".to_string(),
        priority: Priority::High,
        completed: false,
        kind: GoalKind::Tracked {
            progress: 0,
            target: 10,
        },
    });

    if let Some(weakest) = &progress.weakest_subject {
        goals.push(Goal {
            id: ids.next(),
            title: format!("Conquer {}", weakest),
            description: format!("Turn {} from a weak subject into a strong one", weakest),
            priority: Priority::High,
            completed: false,
            kind: GoalKind::Tracked {
                progress: 0,
                target: 100,
            },
        });
    }

    let consistency = habits.consistency_score as u32;
    let consistency_target = (consistency + 20).min(100);
    goals.push(Goal {
        id: ids.next(),
        title: "Build the study habit".to_string(),
        description: format!(
            "Study at least 5 days a week and raise the consistency score to {}",
            consistency_target
        ),
        priority: Priority::Medium,
        completed: false,
        kind: GoalKind::Tracked {
            progress: consistency,
            target: consistency_target,
        },
    });

    goals.push(Goal {
        id: ids.next(),
        title: "Apply what you learned".to_string(),
        description: "Finish one project that applies the material to a real problem".to_string(),
        priority: Priority::Medium,
        completed: false,
        kind: GoalKind::Tracked {
            progress: 0,
            target: 100,
        },
    });

    goals
}

/// Generate the full plan from a learning snapshot
///
/// Runs the two analyzers, then the three goal generators in sequence.
pub fn generate_learning_plan(
    preferences: &UserPreferences,
    learning: &LearningSnapshot,
    today: NaiveDate,
) -> LearningPlan {
    let habits = analyze_study_habits(&learning.sessions, today);
    let progress = analyze_subject_progress(&learning.subjects);

    let daily_goals = generate_daily_goals(&habits, &progress, preferences);
    let weekly_goals = generate_weekly_goals(&habits, &progress, preferences);
    let monthly_goals = generate_monthly_goals(&habits, &progress, preferences);

    LearningPlan {
        daily_goals,
        weekly_goals,
        monthly_goals,
    }
}
