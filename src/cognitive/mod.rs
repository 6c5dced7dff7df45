//! Cognitive processing pipeline: deterministic text analysis and rule-based
//! section generation, with optional delegation to an external content
//! provider for privileged callers.

pub mod extract;
pub mod generate;
pub mod load;
pub mod normalize;
pub mod strategy;
pub mod themes;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::providers::ContentProvider;

use load::calculate_load;
use strategy::{ContentStrategy, ProviderBackedStrategy, RuleBasedStrategy, rule_sections};
use types::{CognitiveInput, CognitiveOutput, PipelineContext};

pub use load::{Density, LoadLevel, LoadMetrics, LoadResult};
pub use themes::Theme;
pub use types::GeneratedSections;

/// Orchestrates one stateless transformation per call: normalize, score,
/// build context, generate. Safe to share across threads; every intermediate
/// value is owned by the call.
pub struct Pipeline {
    rules: RuleBasedStrategy,
    provider: Option<ProviderBackedStrategy>,
}

impl Pipeline {
    /// Pipeline with an optional external provider; the provider is only
    /// consulted for privileged callers and is bounded by `provider_timeout`.
    pub fn new(provider: Option<Arc<dyn ContentProvider>>, provider_timeout: Duration) -> Self {
        Self {
            rules: RuleBasedStrategy,
            provider: provider.map(|p| ProviderBackedStrategy::new(p, provider_timeout)),
        }
    }

    /// Rule-engine-only pipeline.
    pub fn rule_based() -> Self {
        Self {
            rules: RuleBasedStrategy,
            provider: None,
        }
    }

    /// Process one text blob into the four sections plus the load signal.
    ///
    /// Total: provider failures (error, timeout, malformed response) are
    /// recovered by re-running the rule engine over the same context, never
    /// surfaced to the caller.
    pub async fn process(&self, input: CognitiveInput, privileged: bool) -> CognitiveOutput {
        let normalized_text = normalize::normalize(&input.text);
        let load = calculate_load(&normalized_text);
        debug!(
            score = load.score,
            level = ?load.level,
            words = load.metrics.word_count,
            "scored input"
        );

        let context = PipelineContext {
            original_text: input.text,
            normalized_text,
            load,
        };
        let density = context.load.level.density();

        let strategy: &dyn ContentStrategy = match &self.provider {
            Some(provider) if privileged => provider,
            _ => &self.rules,
        };

        let sections = match strategy.generate(&context, density).await {
            Ok(sections) => sections,
            Err(e) => {
                warn!(
                    strategy = strategy.name(),
                    error = %e,
                    "content strategy failed, falling back to rule engine"
                );
                rule_sections(&context, density)
            }
        };

        CognitiveOutput {
            sections,
            load: context.load,
        }
    }
}
