//! Shared data model for the cognitive pipeline.

use serde::{Deserialize, Serialize};

use super::load::LoadResult;

/// Caller-supplied input. Length limits, auth, and rate limiting belong to
/// the caller, not the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CognitiveInput {
    pub text: String,
}

/// The single immutable object threaded through generation; built once per
/// call and never shared across calls.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineContext {
    pub original_text: String,
    pub normalized_text: String,
    pub load: LoadResult,
}

/// The four generated output sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSections {
    pub core_issues: Vec<String>,
    pub can_control: Vec<String>,
    pub let_go: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Externally visible result: the sections plus the load signal. Constructed
/// fresh per request and never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveOutput {
    #[serde(flatten)]
    pub sections: GeneratedSections,
    pub load: LoadResult,
}
