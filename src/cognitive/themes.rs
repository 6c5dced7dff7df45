//! Topic taxonomy and keyword-based theme classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Closed taxonomy of thought topics. `PersonalGrowth` doubles as the
/// default when nothing else matches, so classification is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Work,
    Relationships,
    Finances,
    Family,
    Health,
    Decisions,
    Future,
    TimeManagement,
    Social,
    CreativeProjects,
    PersonalGrowth,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Work => "work",
            Theme::Relationships => "relationships",
            Theme::Finances => "finances",
            Theme::Family => "family",
            Theme::Health => "health",
            Theme::Decisions => "decisions",
            Theme::Future => "future",
            Theme::TimeManagement => "time-management",
            Theme::Social => "social",
            Theme::CreativeProjects => "creative-projects",
            Theme::PersonalGrowth => "personal-growth",
        }
    }
}

/// Ordered keyword-alternation table. A theme joins the result set the first
/// time one of its keywords matches; table order fixes output order.
static THEME_PATTERNS: Lazy<Vec<(Regex, Theme)>> = Lazy::new(|| {
    [
        (
            r"(?i)\b(work|job|career|office|boss|manager|colleague|deadline|project)\b",
            Theme::Work,
        ),
        (
            r"(?i)\b(relationship|partner|spouse|boyfriend|girlfriend|dating|marriage|love)\b",
            Theme::Relationships,
        ),
        (
            r"(?i)\b(money|financial|debt|bills|salary|income|budget|savings)\b",
            Theme::Finances,
        ),
        (
            r"(?i)\b(family|parent|mother|father|sibling|children|kids)\b",
            Theme::Family,
        ),
        (
            r"(?i)\b(health|sick|doctor|medical|anxiety|stress|depression|tired|sleep)\b",
            Theme::Health,
        ),
        (
            r"(?i)\b(decision|choice|choose|option|should i|wondering if)\b",
            Theme::Decisions,
        ),
        (
            r"(?i)\b(future|plan|goal|dream|aspiration|ambition)\b",
            Theme::Future,
        ),
        (
            r"(?i)\b(time|busy|schedule|overwhelm|too much)\b",
            Theme::TimeManagement,
        ),
        (
            r"(?i)\b(friend|friendship|social|lonel|isolat)\b",
            Theme::Social,
        ),
        (
            r"(?i)\b(creative|project|idea|start|begin|launch)\b",
            Theme::CreativeProjects,
        ),
    ]
    .into_iter()
    .map(|(pattern, theme)| (Regex::new(pattern).unwrap(), theme))
    .collect()
});

/// Match text against the taxonomy. Case-insensitive, word-boundary keyword
/// matching only; de-duplicated in table order; never empty.
pub fn classify(text: &str) -> Vec<Theme> {
    let mut themes: Vec<Theme> = Vec::new();

    for (pattern, theme) in THEME_PATTERNS.iter() {
        if pattern.is_match(text) && !themes.contains(theme) {
            themes.push(*theme);
        }
    }

    if themes.is_empty() {
        themes.push(Theme::PersonalGrowth);
    }
    themes
}
