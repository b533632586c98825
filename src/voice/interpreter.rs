// Voice command interpreter
//
// Classifies a transcript into a structured action by keyword/subject
// co-occurrence. Purely a classifier: the dispatcher that acts on the
// returned action lives in the UI layer.

use serde::{Deserialize, Serialize};

/// Structured action resolved from a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceAction {
    Navigate { target: String },
    GeneratePlan,
    StartStudySession,
    EndStudySession,
    ShowProgress,
    ShowRecommendations,
    UnknownCommand { original_command: String },
}

/// One row of the command table
struct CommandPattern {
    /// Trigger verbs, Chinese first, English synonyms after
    keywords: &'static [&'static str],
    /// Subject nouns the verb must co-occur with
    subjects: &'static [&'static str],
    action: fn() -> VoiceAction,
}

// Table order matters: the first matching row wins.
const COMMAND_PATTERNS: &[CommandPattern] = &[
    CommandPattern {
        keywords: &["显示", "打开", "查看", "show", "open", "view"],
        subjects: &["仪表盘", "主页", "首页", "概览", "dashboard", "home", "overview"],
        action: || VoiceAction::Navigate {
            target: "/".to_string(),
        },
    },
    CommandPattern {
        keywords: &["显示", "打开", "查看", "show", "open", "view"],
        subjects: &["学习计划", "计划", "日程", "learning plan", "schedule"],
        action: || VoiceAction::Navigate {
            target: "/learning-plan".to_string(),
        },
    },
    CommandPattern {
        keywords: &["显示", "打开", "查看", "show", "open", "view"],
        subjects: &["成就", "徽章", "奖励", "achievements", "badges", "rewards"],
        action: || VoiceAction::Navigate {
            target: "/achievements".to_string(),
        },
    },
    CommandPattern {
        keywords: &["显示", "打开", "查看", "show", "open", "view"],
        subjects: &["排行榜", "排名", "竞争", "leaderboard", "ranking"],
        action: || VoiceAction::Navigate {
            target: "/leaderboard".to_string(),
        },
    },
    CommandPattern {
        keywords: &["显示", "打开", "查看", "show", "open", "view"],
        subjects: &["个人资料", "资料", "信息", "profile"],
        action: || VoiceAction::Navigate {
            target: "/profile".to_string(),
        },
    },
    CommandPattern {
        keywords: &["显示", "打开", "查看", "show", "open", "view"],
        subjects: &["设置", "配置", "选项", "settings", "options"],
        action: || VoiceAction::Navigate {
            target: "/settings".to_string(),
        },
    },
    CommandPattern {
        keywords: &["开始", "创建", "生成", "create", "generate"],
        subjects: &["学习计划", "计划", "日程", "learning plan", "plan"],
        action: || VoiceAction::GeneratePlan,
    },
    CommandPattern {
        keywords: &["开始", "记录", "start", "begin"],
        subjects: &["学习", "学习会话", "学习时间", "study", "session"],
        action: || VoiceAction::StartStudySession,
    },
    CommandPattern {
        keywords: &["结束", "停止", "完成", "end", "stop", "finish"],
        subjects: &["学习", "学习会话", "学习时间", "study", "session"],
        action: || VoiceAction::EndStudySession,
    },
    CommandPattern {
        keywords: &["显示", "告诉我", "show", "tell me"],
        subjects: &["进度", "学习进度", "完成情况", "progress"],
        action: || VoiceAction::ShowProgress,
    },
    CommandPattern {
        keywords: &["显示", "告诉我", "show", "tell me"],
        subjects: &["建议", "推荐", "学习建议", "recommendations", "suggestions"],
        action: || VoiceAction::ShowRecommendations,
    },
];

/// Resolve a transcript to an action
///
/// Lowercases and trims the transcript, then returns the action of the
/// first table row with at least one keyword and one subject contained
/// as a substring. Containment is unanchored: a subject noun inside an
/// unrelated longer word still matches. No match returns
/// `UnknownCommand` with the original, unnormalized input.
pub fn process_voice_command(transcript: &str) -> VoiceAction {
    let normalized = transcript.to_lowercase();
    let normalized = normalized.trim();

    for pattern in COMMAND_PATTERNS {
        let has_keyword = pattern
            .keywords
            .iter()
            .any(|keyword| normalized.contains(keyword));
        let has_subject = pattern
            .subjects
            .iter()
            .any(|subject| normalized.contains(subject));

        if has_keyword && has_subject {
            return (pattern.action)();
        }
    }

    VoiceAction::UnknownCommand {
        original_command: transcript.to_string(),
    }
}
