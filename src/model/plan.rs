/// Plan records
///
/// Goals and recommendations are built fresh by the planner; ownership
/// transfers to the caller, which decides whether to persist them.

use serde::{Deserialize, Serialize};

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// What kind of tracking a goal carries
///
/// Daily goals are timed blocks; weekly and monthly goals track a
/// numeric target instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GoalKind {
    Timed { duration_minutes: u32, is_break: bool },
    Tracked { progress: u32, target: u32 },
}

/// A single generated goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    #[serde(flatten)]
    pub kind: GoalKind,
}

impl Goal {
    /// Whether this goal is a break reminder rather than study work
    pub fn is_break(&self) -> bool {
        matches!(
            self.kind,
            GoalKind::Timed { is_break: true, .. }
        )
    }
}

/// Full generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub daily_goals: Vec<Goal>,
    pub weekly_goals: Vec<Goal>,
    pub monthly_goals: Vec<Goal>,
}

/// Kind of a suggested learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Interactive,
    Text,
    Quiz,
}

impl ResourceKind {
    /// Human-readable label used in generated resource titles
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Video => "video tutorial",
            ResourceKind::Interactive => "interactive exercise",
            ResourceKind::Text => "study notes",
            ResourceKind::Quiz => "quiz",
        }
    }
}

/// A stub pointer to a learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub kind: ResourceKind,
    pub title: String,
    pub url: String,
}

/// A topic recommendation with supporting resources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub subject: String,
    pub topic: String,
    pub reason: String,
    pub resources: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_break() {
        let goal = Goal {
            id: "4".to_string(),
            title: "Break time".to_string(),
            description: "Rest".to_string(),
            priority: Priority::Medium,
            completed: false,
            kind: GoalKind::Timed {
                duration_minutes: 10,
                is_break: true,
            },
        };
        assert!(goal.is_break());

        let tracked = Goal {
            kind: GoalKind::Tracked {
                progress: 0,
                target: 5,
            },
            ..goal
        };
        assert!(!tracked.is_break());
    }

    #[test]
    fn test_goal_kind_serde_tag() {
        let kind = GoalKind::Tracked {
            progress: 0,
            target: 5,
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"kind\":\"tracked\""));
        assert!(json.contains("\"target\":5"));
    }
}
