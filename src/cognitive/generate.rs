//! Rule-based synthesis of the four output sections.
//!
//! Each section drains its sources in priority order (extracted phrases
//! first, sentence analysis second, per-theme fallback tables last) until the
//! density-derived item count is reached. The fallback tables are exhaustive
//! matches over [`Theme`], so completeness is checked by the compiler and no
//! runtime default string is needed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::themes::Theme;
use super::types::GeneratedSections;

/// Difficulty markers that qualify a sentence as issue material.
static NEGATIVE_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(not|can't|don't|won't|never|problem|issue|struggle|difficult|hard)\b")
        .unwrap()
});

/// Filler words stripped when reducing a sentence to its key phrase.
static FILLER_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(i|me|my|myself|we|us|our|the|a|an|that|this|it|is|are|was|were|be|been|being|have|has|had|do|does|did|will|would|could|should|may|might|must|shall|just|really|very|so|too|also|even|only|now|then|here|there|when|where|why|how|what|which|who|whom|whose)\b",
    )
    .unwrap()
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Assemble all four sections. `item_count` is the density-derived bound;
/// `let_go` is asked for one item fewer, floored at 1.
pub fn generate_sections(
    themes: &[Theme],
    concerns: &[String],
    actions: &[String],
    sentences: &[String],
    item_count: usize,
) -> GeneratedSections {
    let core_issues = generate_core_issues(themes, concerns, sentences, item_count);
    let can_control = generate_can_control(actions, themes, item_count);
    let let_go = generate_let_go(themes, item_count.saturating_sub(1));
    let next_steps = generate_next_steps(&core_issues, &can_control, themes, item_count);

    GeneratedSections {
        core_issues,
        can_control,
        let_go,
        next_steps,
    }
}

/// Extracted concerns, then negative-marker sentences reduced to key
/// phrases, then per-theme fallbacks.
fn generate_core_issues(
    themes: &[Theme],
    concerns: &[String],
    sentences: &[String],
    count: usize,
) -> Vec<String> {
    let mut issues: Vec<String> = Vec::new();

    for concern in concerns.iter().take(count) {
        issues.push(capitalize_first(&clean_phrase(concern)));
    }

    if issues.len() < count {
        for sentence in sentences {
            if issues.len() >= count {
                break;
            }
            let trimmed = sentence.trim();
            if trimmed.chars().count() < 10 {
                continue;
            }
            if NEGATIVE_MARKERS.is_match(trimmed)
                && let Some(issue) = key_phrase(trimmed)
            {
                // Suppress near-duplicates: an existing issue containing the
                // first 20 chars of the candidate counts as a collision.
                let probe: String = issue.to_lowercase().chars().take(20).collect();
                if !issues.iter().any(|i| i.to_lowercase().contains(&probe)) {
                    issues.push(capitalize_first(&issue));
                }
            }
        }
    }

    for theme in themes {
        if issues.len() >= count {
            break;
        }
        for item in theme_issues(*theme) {
            if issues.len() >= count {
                break;
            }
            if !issues.iter().any(|i| i == item) {
                issues.push(item.to_string());
            }
        }
    }

    issues.truncate(count);
    issues
}

/// Extracted actions first, per-theme controllable factors after.
fn generate_can_control(actions: &[String], themes: &[Theme], count: usize) -> Vec<String> {
    let mut controllables: Vec<String> = Vec::new();

    for action in actions.iter().take(count) {
        controllables.push(capitalize_first(&clean_phrase(action)));
    }

    for theme in themes {
        if controllables.len() >= count {
            break;
        }
        for item in theme_controllables(*theme) {
            if controllables.len() >= count {
                break;
            }
            if !controllables.iter().any(|c| c == item) {
                controllables.push(item.to_string());
            }
        }
    }

    controllables.truncate(count);
    controllables
}

/// Per-theme phrases only; the request is floored at one item so the section
/// is never empty.
fn generate_let_go(themes: &[Theme], count: usize) -> Vec<String> {
    let want = count.max(1);
    let mut let_go: Vec<String> = Vec::new();

    for theme in themes {
        if let_go.len() >= want {
            break;
        }
        for item in theme_let_go(*theme) {
            if let_go.len() >= want {
                break;
            }
            if !let_go.iter().any(|l| l == item) {
                let_go.push(item.to_string());
            }
        }
    }

    let_go.truncate(want);
    let_go
}

/// Two templated sentences anchored on the first issue and first
/// controllable, then per-theme actionable steps.
fn generate_next_steps(
    issues: &[String],
    controllables: &[String],
    themes: &[Theme],
    count: usize,
) -> Vec<String> {
    let mut steps: Vec<String> = Vec::new();

    if let Some(first) = issues.first() {
        let excerpt: String = first.chars().take(30).collect();
        steps.push(format!(
            "Write down specifically what's bothering you most about: \"{}...\"",
            excerpt
        ));
    }

    if let Some(first) = controllables.first() {
        steps.push(format!(
            "Spend 10 minutes on just one thing you control: {}",
            first.to_lowercase()
        ));
    }

    for theme in themes {
        if steps.len() >= count {
            break;
        }
        for item in theme_steps(*theme) {
            if steps.len() >= count {
                break;
            }
            let probe: String = item.to_lowercase().chars().take(30).collect();
            if !steps.iter().any(|s| s.to_lowercase().contains(&probe)) {
                steps.push(item.to_string());
            }
        }
    }

    steps.truncate(count);
    steps
}

pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Strip a leading first-person pronoun, collapse whitespace, cap at 70.
pub(crate) fn clean_phrase(phrase: &str) -> String {
    static LEADING_I: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(i\s+)").unwrap());
    let cleaned = LEADING_I.replace(phrase, "");
    let collapsed = WHITESPACE_RUN.replace_all(cleaned.trim(), " ");
    collapsed.chars().take(70).collect()
}

/// Reduce a sentence to a key phrase by stripping filler words. Returns
/// nothing when too little survives.
pub(crate) fn key_phrase(sentence: &str) -> Option<String> {
    let stripped = FILLER_WORDS.replace_all(sentence, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let cleaned = collapsed.trim();

    (cleaned.chars().count() > 10).then(|| cleaned.chars().take(60).collect())
}

fn theme_issues(theme: Theme) -> [&'static str; 3] {
    match theme {
        Theme::Work => [
            "Balancing workload with available capacity",
            "Navigating workplace expectations",
            "Setting professional boundaries",
        ],
        Theme::Relationships => [
            "Communicating needs clearly",
            "Balancing personal space with connection",
            "Addressing unresolved tensions",
        ],
        Theme::Finances => [
            "Managing financial uncertainty",
            "Prioritizing spending decisions",
            "Building financial security",
        ],
        Theme::Family => [
            "Navigating family dynamics",
            "Setting healthy boundaries",
            "Balancing obligations and self-care",
        ],
        Theme::Health => [
            "Managing energy levels",
            "Addressing underlying stress",
            "Prioritizing wellbeing",
        ],
        Theme::Decisions => [
            "Weighing options with incomplete information",
            "Fear of making the wrong choice",
            "Analysis paralysis",
        ],
        Theme::Future => [
            "Uncertainty about next steps",
            "Aligning actions with long-term goals",
            "Impatience with progress",
        ],
        Theme::TimeManagement => [
            "Too many competing priorities",
            "Difficulty saying no",
            "Feeling behind on everything",
        ],
        Theme::Social => [
            "Maintaining meaningful connections",
            "Finding belonging",
            "Balancing solitude and community",
        ],
        Theme::CreativeProjects => [
            "Getting started despite uncertainty",
            "Overcoming perfectionism",
            "Finding time for creation",
        ],
        Theme::PersonalGrowth => [
            "Identifying what truly matters",
            "Moving forward despite confusion",
            "Processing complex thoughts",
        ],
    }
}

fn theme_controllables(theme: Theme) -> [&'static str; 4] {
    match theme {
        Theme::Work => [
            "How you prioritize your tasks each day",
            "When and how you communicate with your manager",
            "The boundaries you set around work hours",
            "Your response to added requests",
        ],
        Theme::Relationships => [
            "How you express your needs",
            "The energy you invest in the relationship",
            "How you respond to conflict",
            "The time you dedicate to connection",
        ],
        Theme::Finances => [
            "Your daily spending choices",
            "Where you seek financial guidance",
            "How you track your money",
            "The financial conversations you initiate",
        ],
        Theme::Family => [
            "How you respond to family requests",
            "The boundaries you communicate",
            "The time you allocate to family",
            "Your emotional reactions",
        ],
        Theme::Health => [
            "Your daily habits and routines",
            "When you rest vs push through",
            "Who you ask for support",
            "How you talk to yourself",
        ],
        Theme::Decisions => [
            "What information you gather",
            "Who you consult",
            "The deadline you set for deciding",
            "Whether you accept imperfection",
        ],
        Theme::Future => [
            "The first small step you take",
            "How you define success",
            "Who you share your plans with",
            "What you learn each day",
        ],
        Theme::TimeManagement => [
            "What you say yes and no to",
            "How you structure your morning",
            "Which tasks you tackle first",
            "When you take breaks",
        ],
        Theme::Social => [
            "Who you reach out to",
            "How you show up in conversations",
            "The invitations you accept",
            "How you nurture existing friendships",
        ],
        Theme::CreativeProjects => [
            "When you show up to create",
            "What you let yourself try",
            "How you define done",
            "Whose feedback you seek",
        ],
        Theme::PersonalGrowth => [
            "The questions you sit with",
            "How you process your thoughts",
            "What you choose to focus on today",
            "How you talk to yourself",
        ],
    }
}

fn theme_let_go(theme: Theme) -> [&'static str; 3] {
    match theme {
        Theme::Work => [
            "Others' reactions to your boundaries",
            "Past mistakes at work",
            "Making everyone happy",
        ],
        Theme::Relationships => [
            "How the other person responds",
            "Changing someone who doesn't want to change",
            "Perfect timing",
        ],
        Theme::Finances => [
            "Past financial decisions",
            "Economic factors beyond your control",
            "Keeping up with others",
        ],
        Theme::Family => [
            "Family members' choices",
            "Old family patterns overnight",
            "Being understood by everyone",
        ],
        Theme::Health => [
            "Perfect health all the time",
            "Comparing to your past self",
            "Instant recovery",
        ],
        Theme::Decisions => [
            "Knowing the outcome beforehand",
            "Making a perfect choice",
            "Others' opinions of your decision",
        ],
        Theme::Future => [
            "Controlling timelines",
            "Certainty about outcomes",
            "Having it all figured out",
        ],
        Theme::TimeManagement => [
            "Doing everything",
            "Others expecting immediate responses",
            "Productivity as identity",
        ],
        Theme::Social => [
            "Others' perceptions of you",
            "Being liked by everyone",
            "Forcing connections",
        ],
        Theme::CreativeProjects => [
            "Perfection in creative work",
            "External validation",
            "Comparing to others",
        ],
        Theme::PersonalGrowth => [
            "Having all the answers right now",
            "Fixing everything at once",
            "Linear progress",
        ],
    }
}

fn theme_steps(theme: Theme) -> [&'static str; 3] {
    match theme {
        Theme::Work => [
            "Block 30 minutes to list and prioritize your top 3 tasks",
            "Draft a message setting one clear boundary",
            "Schedule a conversation with your manager about capacity",
        ],
        Theme::Relationships => [
            "Write down exactly what you need (without how the other person should change)",
            "Plan one moment of undivided attention this week",
            "Express one appreciation you have been holding back",
        ],
        Theme::Finances => [
            "List all financial obligations for the next 30 days",
            "Identify one expense you can reduce this week",
            "Set up auto-save for even a tiny amount",
        ],
        Theme::Family => [
            "Choose one boundary to communicate this week",
            "Plan quality time with the family member who matters most",
            "Write out what you wish they understood (just for yourself)",
        ],
        Theme::Health => [
            "Commit to one non-negotiable rest period today",
            "Write down what good enough looks like for your health this week",
            "Tell one person how you are really doing",
        ],
        Theme::Decisions => [
            "List the top 3 options you are considering",
            "Give yourself a decision deadline",
            "Identify the one value that matters most in this choice",
        ],
        Theme::Future => [
            "Define what progress looks like this week (not this year)",
            "Identify the smallest possible next action",
            "Write your future self a note about what you are attempting",
        ],
        Theme::TimeManagement => [
            "List everything demanding your attention right now",
            "Choose 3 things to focus on and consciously release the rest",
            "Identify one commitment to renegotiate or decline",
        ],
        Theme::Social => [
            "Send one message to someone you have been meaning to contact",
            "Schedule one social activity, even if brief",
            "Reflect on what you are seeking from connection",
        ],
        Theme::CreativeProjects => [
            "Set a timer for 15 minutes and create without judgment",
            "Identify the smallest possible version of your project",
            "Share your idea with one trusted person",
        ],
        Theme::PersonalGrowth => [
            "Write freely for 10 minutes about what you are processing",
            "Identify the question at the heart of your confusion",
            "Choose one tiny action that feels aligned",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn clean_phrase_strips_leading_pronoun() {
        assert_eq!(clean_phrase("I keep second-guessing"), "keep second-guessing");
        assert_eq!(clean_phrase("my job"), "my job");
    }

    #[test]
    fn clean_phrase_caps_length() {
        let long = "x".repeat(100);
        assert_eq!(clean_phrase(&long).chars().count(), 70);
    }

    #[test]
    fn capitalize_first_handles_empty() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("my job"), "My job");
    }

    #[test]
    fn key_phrase_strips_fillers() {
        let phrase = key_phrase("I just really can't handle the workload anymore").unwrap();
        assert!(!phrase.to_lowercase().contains("just"));
        assert!(!phrase.to_lowercase().contains("really"));
        assert!(phrase.contains("workload"));
    }

    #[test]
    fn key_phrase_rejects_thin_remainders() {
        assert_eq!(key_phrase("I just was so very"), None);
    }

    #[test]
    fn concerns_lead_core_issues() {
        let sections = generate_sections(
            &[Theme::Work],
            &strings(&["my job security"]),
            &[],
            &[],
            3,
        );
        assert_eq!(sections.core_issues[0], "My job security");
        assert_eq!(sections.core_issues.len(), 3);
    }

    #[test]
    fn negative_sentences_fill_core_issues() {
        let sentences = strings(&["The schedule is a problem because nothing fits anymore"]);
        let sections = generate_sections(&[Theme::PersonalGrowth], &[], &[], &sentences, 3);
        // First issue comes from the sentence, not the fallback table
        assert!(sections.core_issues[0].to_lowercase().contains("schedule"));
    }

    #[test]
    fn fallback_tables_complete_every_section() {
        let sections = generate_sections(&[Theme::PersonalGrowth], &[], &[], &[], 4);
        assert_eq!(sections.core_issues.len(), 3); // table has 3 entries
        assert_eq!(sections.can_control.len(), 4);
        assert_eq!(sections.let_go.len(), 3);
        assert_eq!(sections.next_steps.len(), 4);
        assert!(!sections.core_issues.is_empty());
    }

    #[test]
    fn item_count_bounds_every_section() {
        let themes = [Theme::Work, Theme::Health, Theme::Family];
        let concerns = strings(&["concern one here", "concern two here", "concern three here"]);
        let actions = strings(&["action one here", "action two here", "action three here"]);
        for count in [2usize, 3, 4] {
            let sections = generate_sections(&themes, &concerns, &actions, &[], count);
            assert!(sections.core_issues.len() <= count);
            assert!(sections.can_control.len() <= count);
            assert!(sections.let_go.len() <= count.saturating_sub(1).max(1));
            assert!(sections.next_steps.len() <= count);
        }
    }

    #[test]
    fn let_go_floors_at_one() {
        let let_go = generate_let_go(&[Theme::Work], 0);
        assert_eq!(let_go.len(), 1);
    }

    #[test]
    fn no_case_insensitive_duplicates() {
        let themes = [Theme::Work, Theme::Work];
        let sections = generate_sections(&themes, &[], &[], &[], 4);
        for list in [
            &sections.core_issues,
            &sections.can_control,
            &sections.let_go,
            &sections.next_steps,
        ] {
            let mut seen: Vec<String> = Vec::new();
            for item in list {
                let lower = item.to_lowercase();
                assert!(!seen.contains(&lower), "duplicate item: {}", item);
                seen.push(lower);
            }
        }
    }

    #[test]
    fn next_steps_reference_first_issue_and_controllable() {
        let sections = generate_sections(
            &[Theme::Work],
            &strings(&["my job security"]),
            &strings(&["talk to my manager"]),
            &[],
            3,
        );
        assert!(sections.next_steps[0].contains("My job security"));
        assert!(sections.next_steps[1].contains("talk to my manager"));
        assert_eq!(sections.next_steps.len(), 3);
    }

    #[test]
    fn excerpts_are_truncated_in_next_steps() {
        let long_concern = "a".repeat(80);
        let sections =
            generate_sections(&[Theme::Work], &strings(&[&long_concern]), &[], &[], 2);
        // 30-char excerpt (capitalized first char) plus the template text
        assert!(sections.next_steps[0].contains(&format!("A{}", "a".repeat(29))));
        assert!(!sections.next_steps[0].contains(&"a".repeat(30)));
    }
}
