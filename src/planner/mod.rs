/// Planner module
///
/// Pure analysis and generation over learning snapshots: study habits,
/// subject progress, goal plans, recommendations, and achievement
/// unlock checks. No state is held between calls; the clock and RNG are
/// passed in by the caller.

pub mod achievements;
pub mod goals;
pub mod habits;
pub mod progress;
pub mod recommender;

pub use achievements::{check_achievement_conditions, AchievementRule};
pub use goals::{
    generate_daily_goals, generate_learning_plan, generate_monthly_goals, generate_weekly_goals,
};
pub use habits::{analyze_study_habits, HabitProfile, TimeOfDay};
pub use progress::{analyze_subject_progress, AttentionItem, ProgressProfile};
pub use recommender::generate_learning_recommendations;
