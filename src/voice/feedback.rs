/// Spoken feedback text
///
/// Builds the sentences the assistant reads out loud: motivational
/// one-liners picked per context and a progress summary. Message choice
/// is the only randomness, so the RNG is injected.

use crate::model::{LearningSnapshot, UserSnapshot};
use rand::Rng;

/// Situation the assistant is reacting to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageContext {
    General,
    Achievement,
    Streak,
    LevelUp,
    LowActivity,
}

/// Pick a motivational message for the given context
///
/// Streak and level-up messages interpolate the user's numbers; the
/// rest are fixed lines.
pub fn motivational_message(
    user: &UserSnapshot,
    context: MessageContext,
    rng: &mut impl Rng,
) -> String {
    let streak = user.preferences.streak_days;
    let level = user.preferences.level;

    let messages: Vec<String> = match context {
        MessageContext::General => vec![
            "Keep going, you are getting better!".to_string(),
            "Persistence wins. Stay with it!".to_string(),
            "Your progress is impressive!".to_string(),
            "Every step brings you closer to your goal!".to_string(),
            "Today's effort is tomorrow's reward!".to_string(),
        ],
        MessageContext::Achievement => vec![
            "Congratulations, you unlocked a new achievement!".to_string(),
            "Amazing! A new badge is yours!".to_string(),
            "Your effort paid off, achievement unlocked!".to_string(),
            "Another milestone! Keep up the momentum!".to_string(),
            "Achievement complete! You are becoming a study master!".to_string(),
        ],
        MessageContext::Streak => vec![
            format!("{} days of studying in a row, impressive!", streak),
            format!("A {}-day study streak! Your persistence shows!", streak),
            format!("{} days without missing a beat, that is how it is done!", streak),
            format!("The power of habit: {} days straight!", streak),
            format!("A {}-day streak! You are building a strong habit!", streak),
        ],
        MessageContext::LevelUp => vec![
            format!("Congratulations on reaching level {}!", level),
            format!("Level {} reached! Your knowledge keeps growing!", level),
            format!("Fantastic! You are a level {} learner now!", level),
            format!("Up to level {}! The work is paying off!", level),
            format!("Level {} done! On to the next challenge!", level),
        ],
        MessageContext::LowActivity => vec![
            "No studying yet today. How about a small task?".to_string(),
            "It has been a few days. Starting now is not too late!".to_string(),
            "After a short rest it is time to dive back in!".to_string(),
            "Habits matter. Schedule a little study time today!".to_string(),
            "Don't let the streak break. Squeeze in a session today!".to_string(),
        ],
    };

    let index = rng.gen_range(0..messages.len());
    messages[index].clone()
}

/// Build the spoken progress summary
///
/// Mentions the overall average, the strongest subject, and nudges
/// toward the weakest subject only when it sits below 50%.
pub fn progress_feedback(learning: &LearningSnapshot) -> String {
    let first = match learning.subjects.first() {
        Some(s) => s,
        None => return "No study data recorded yet. Time to start!".to_string(),
    };

    let total: u64 = learning.subjects.iter().map(|s| s.progress as u64).sum();
    let average = (total as f64 / learning.subjects.len() as f64).round() as u8;

    let mut strongest = first;
    let mut weakest = first;
    for subject in &learning.subjects {
        if subject.progress > strongest.progress {
            strongest = subject;
        }
        if subject.progress < weakest.progress {
            weakest = subject;
        }
    }

    let mut feedback = format!("Your overall progress is at {}%. ", average);
    feedback.push_str(&format!(
        "You are doing best in {}, at {}% complete. ",
        strongest.name, strongest.progress
    ));

    if weakest.progress < 50 {
        feedback.push_str(&format!(
            "Consider spending more time on {}, currently at {}%. ",
            weakest.name, weakest.progress
        ));
    }

    feedback.push_str("Keep it up, you are getting better!");
    feedback
}
