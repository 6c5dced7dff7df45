//! Cognitive load scoring from structural text signals.
//!
//! Measures structural complexity of thinking, not emotion: word volume,
//! sentence length, punctuation density, and line-break density. No
//! sentiment, no keyword lists, no model.

use serde::{Deserialize, Serialize};

/// Score at or below this classifies as `Low`.
pub const LOW_MAX: u32 = 1;
/// Score at or below this (and above [`LOW_MAX`]) classifies as `Medium`.
pub const MEDIUM_MAX: u32 = 3;

/// Coarse classification of structural text complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadLevel {
    Low,
    Medium,
    High,
}

impl LoadLevel {
    /// Output density for this load level: higher load means terser output.
    pub fn density(self) -> Density {
        match self {
            LoadLevel::Low => Density::Detailed,
            LoadLevel::Medium => Density::Standard,
            LoadLevel::High => Density::Minimal,
        }
    }

    /// Presentation pacing factor; higher load slows animations down.
    pub fn duration_multiplier(self) -> f64 {
        match self {
            LoadLevel::Low => 1.0,
            LoadLevel::Medium => 1.25,
            LoadLevel::High => 1.5,
        }
    }
}

/// Requested item count per output section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Detailed,
    Standard,
    Minimal,
}

impl Density {
    pub fn item_count(self) -> usize {
        match self {
            Density::Detailed => 4,
            Density::Standard => 3,
            Density::Minimal => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Density::Detailed => "detailed",
            Density::Standard => "standard",
            Density::Minimal => "minimal",
        }
    }
}

/// Structural metrics derived from normalized text. Recomputed on every call,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMetrics {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub line_count: usize,
    pub punctuation_count: usize,
    pub avg_sentence_length: f64,
    pub punctuation_ratio: f64,
    pub line_break_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    pub score: u32,
    pub level: LoadLevel,
    pub metrics: LoadMetrics,
}

/// Compute the load score and classification for normalized text.
///
/// Deterministic and total: denominators are floored at 1, so no input can
/// divide by zero. Each scoring condition fires independently; the second
/// sentence-length condition flags very short, choppy sentences
/// (`avg < 5`), not rambling ones. Text with no words at all scores 0.
pub fn calculate_load(text: &str) -> LoadResult {
    let chars = text.chars().count();
    let words = text.split_whitespace().count();
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.is_empty())
        .count();
    // split('\n') keeps the trailing empty segment after a final newline,
    // which feeds line_break_ratio.
    let lines = text.split('\n').count();
    let punctuation = text
        .chars()
        .filter(|c| matches!(c, '!' | '?' | '.' | ',' | ':' | ';'))
        .count();

    let avg_sentence_length = words as f64 / sentences.max(1) as f64;
    let punctuation_ratio = punctuation as f64 / words.max(1) as f64;
    let line_break_ratio = lines as f64 / sentences.max(1) as f64;

    let mut score = 0u32;
    if words > 150 {
        score += 1;
    }
    if words > 300 {
        score += 1;
    }
    if words > 0 && avg_sentence_length < 8.0 {
        score += 1;
    }
    if words > 0 && avg_sentence_length < 5.0 {
        score += 1;
    }
    if punctuation_ratio > 0.12 {
        score += 1;
    }
    if line_break_ratio > 1.5 {
        score += 1;
    }

    LoadResult {
        score,
        level: classify(score),
        metrics: LoadMetrics {
            char_count: chars,
            word_count: words,
            sentence_count: sentences,
            line_count: lines,
            punctuation_count: punctuation,
            avg_sentence_length,
            punctuation_ratio,
            line_break_ratio,
        },
    }
}

fn classify(score: u32) -> LoadLevel {
    if score <= LOW_MAX {
        LoadLevel::Low
    } else if score <= MEDIUM_MAX {
        LoadLevel::Medium
    } else {
        LoadLevel::High
    }
}
