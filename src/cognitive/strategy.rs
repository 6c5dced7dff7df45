//! Content generation strategies.
//!
//! One trait, two implementations: the deterministic rule engine and the
//! provider-backed delegate. The pipeline gates the provider path on caller
//! privilege and always keeps the rule engine available as the default.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ClearMindError, Result};
use crate::providers::ContentProvider;

use super::extract;
use super::generate;
use super::load::Density;
use super::themes;
use super::types::{GeneratedSections, PipelineContext};

#[async_trait]
pub trait ContentStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(
        &self,
        context: &PipelineContext,
        density: Density,
    ) -> Result<GeneratedSections>;
}

/// The always-available deterministic path: classify, extract, generate.
pub struct RuleBasedStrategy;

#[async_trait]
impl ContentStrategy for RuleBasedStrategy {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn generate(
        &self,
        context: &PipelineContext,
        density: Density,
    ) -> Result<GeneratedSections> {
        Ok(rule_sections(context, density))
    }
}

/// Synchronous rule-engine core, shared by the strategy impl and by the
/// pipeline's fallback path.
pub fn rule_sections(context: &PipelineContext, density: Density) -> GeneratedSections {
    let sentences = split_sentences(&context.normalized_text);
    let themes = themes::classify(&context.normalized_text);
    let concerns = extract::extract_concerns(&sentences);
    let actions = extract::extract_actions(&sentences);
    tracing::debug!(
        themes = ?themes.iter().map(|t| t.as_str()).collect::<Vec<_>>(),
        concerns = concerns.len(),
        actions = actions.len(),
        "rule engine inputs"
    );

    generate::generate_sections(
        &themes,
        &concerns,
        &actions,
        &sentences,
        density.item_count(),
    )
}

/// Sentence segments fed to the extractor: terminator-split, keeping only
/// segments whose trimmed length exceeds five characters.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .filter(|s| s.trim().chars().count() > 5)
        .map(|s| s.to_string())
        .collect()
}

/// Delegates to an external content provider, bounded by a timeout so a
/// stalled provider can never block the caller indefinitely.
pub struct ProviderBackedStrategy {
    provider: Arc<dyn ContentProvider>,
    timeout: Duration,
}

impl ProviderBackedStrategy {
    pub fn new(provider: Arc<dyn ContentProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }
}

#[async_trait]
impl ContentStrategy for ProviderBackedStrategy {
    fn name(&self) -> &'static str {
        "provider"
    }

    async fn generate(
        &self,
        context: &PipelineContext,
        density: Density,
    ) -> Result<GeneratedSections> {
        match tokio::time::timeout(self.timeout, self.provider.generate(context, density)).await {
            Ok(result) => result,
            Err(_) => Err(ClearMindError::Timeout {
                operation: format!("provider '{}' generate", self.provider.name()),
                timeout_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sentences_drops_short_segments() {
        let sentences = split_sentences("Yes. This one is long enough to keep! No?");
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].contains("long enough"));
    }

    #[test]
    fn split_sentences_keeps_leading_space() {
        // Segments are not trimmed; the extractor patterns tolerate the space
        let sentences = split_sentences("First sentence here. Second sentence here.");
        assert_eq!(sentences[1], " Second sentence here");
    }
}
