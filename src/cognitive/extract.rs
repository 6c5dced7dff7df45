//! Capture-group phrase extraction from first-person sentences.
//!
//! Structural phrase-capture only: the patterns surface confession and
//! intention phrasing, they do not understand it. Each rule is an ordered
//! table entry so the extraction strategy can be swapped or extended without
//! touching generation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Captures shorter than this are discarded silently.
const MIN_PHRASE_LEN: usize = 5;
/// Concern captures are cut at this many characters.
const MAX_CONCERN_LEN: usize = 60;
/// Action captures are cut at this many characters.
const MAX_ACTION_LEN: usize = 50;

struct CaptureRule {
    pattern: Regex,
    max_len: usize,
}

impl CaptureRule {
    fn new(pattern: &str, max_len: usize) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            max_len,
        }
    }

    /// First match per rule per sentence: trimmed, truncated, and kept only
    /// if it still exceeds the minimum length.
    fn capture(&self, sentence: &str) -> Option<String> {
        let captures = self.pattern.captures(sentence)?;
        let phrase: String = captures
            .get(1)?
            .as_str()
            .trim()
            .chars()
            .take(self.max_len)
            .collect();
        (phrase.chars().count() > MIN_PHRASE_LEN).then_some(phrase)
    }
}

/// Worry and uncertainty phrasing: "I'm worried about X", "I don't know X",
/// "I feel X", "what if X", "I keep X".
static CONCERN_RULES: Lazy<Vec<CaptureRule>> = Lazy::new(|| {
    vec![
        CaptureRule::new(
            r"(?i)(?:i(?:'m| am))\s+(?:worried|concerned|anxious|scared|afraid|unsure|confused|stuck|overwhelmed)\s+(?:about|that|because)?\s*(.+)",
            MAX_CONCERN_LEN,
        ),
        CaptureRule::new(
            r"(?i)(?:i\s+(?:don't|can't|cannot|couldn't))\s+(?:know|understand|decide|figure out|see)\s*(.+)",
            MAX_CONCERN_LEN,
        ),
        CaptureRule::new(
            r"(?i)(?:i\s+(?:feel|felt))\s+(?:like|that|as if)?\s*(.+)",
            MAX_CONCERN_LEN,
        ),
        CaptureRule::new(r"(?i)(?:what\s+(?:if|should))\s*(.+)", MAX_CONCERN_LEN),
        CaptureRule::new(
            r"(?i)(?:i\s+(?:keep|always|never|constantly))\s+(.+)",
            MAX_CONCERN_LEN,
        ),
    ]
});

/// Intention phrasing: "I should X", "maybe I could X", "I was thinking X".
static ACTION_RULES: Lazy<Vec<CaptureRule>> = Lazy::new(|| {
    vec![
        CaptureRule::new(
            r"(?i)(?:i\s+(?:should|could|might|need to|want to|have to|must))\s+(.+)",
            MAX_ACTION_LEN,
        ),
        CaptureRule::new(
            r"(?i)(?:maybe\s+i\s+(?:should|could|can))\s+(.+)",
            MAX_ACTION_LEN,
        ),
        CaptureRule::new(
            r"(?i)(?:i\s+(?:was thinking|thought about|considered))\s+(.+)",
            MAX_ACTION_LEN,
        ),
    ]
});

fn run_rules(rules: &[CaptureRule], sentences: &[String]) -> Vec<String> {
    let mut phrases = Vec::new();
    for sentence in sentences {
        for rule in rules {
            if let Some(phrase) = rule.capture(sentence) {
                phrases.push(phrase);
            }
        }
    }
    phrases
}

/// Pull concern phrases out of sentences in extraction order (sentence order
/// crossed with rule order). A sentence may yield several phrases.
pub fn extract_concerns(sentences: &[String]) -> Vec<String> {
    run_rules(&CONCERN_RULES, sentences)
}

/// Pull intention phrases out of sentences, same ordering rules as concerns.
pub fn extract_actions(sentences: &[String]) -> Vec<String> {
    run_rules(&ACTION_RULES, sentences)
}
