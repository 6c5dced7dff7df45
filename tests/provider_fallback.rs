//! The provider path must never surface an error: every failure mode folds
//! back into the rule engine with no data loss.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use clear_mind::cognitive::types::{CognitiveInput, GeneratedSections, PipelineContext};
use clear_mind::cognitive::{Density, Pipeline};
use clear_mind::error::{ClearMindError, Result};
use clear_mind::providers::ContentProvider;

const TEXT: &str = "I'm worried about my job. I should talk to my manager.";

fn input() -> CognitiveInput {
    CognitiveInput {
        text: TEXT.to_string(),
    }
}

fn stub_sections() -> GeneratedSections {
    GeneratedSections {
        core_issues: vec!["Provider issue".to_string()],
        can_control: vec!["Provider control".to_string()],
        let_go: vec!["Provider release".to_string()],
        next_steps: vec!["Provider step".to_string()],
    }
}

struct StubProvider;

#[async_trait]
impl ContentProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(
        &self,
        _context: &PipelineContext,
        _density: Density,
    ) -> Result<GeneratedSections> {
        Ok(stub_sections())
    }
}

struct FailingProvider;

#[async_trait]
impl ContentProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(
        &self,
        _context: &PipelineContext,
        _density: Density,
    ) -> Result<GeneratedSections> {
        Err(ClearMindError::Provider {
            message: "synthetic outage".to_string(),
        })
    }
}

struct StalledProvider;

#[async_trait]
impl ContentProvider for StalledProvider {
    fn name(&self) -> &'static str {
        "stalled"
    }

    async fn generate(
        &self,
        _context: &PipelineContext,
        _density: Density,
    ) -> Result<GeneratedSections> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(stub_sections())
    }
}

#[tokio::test]
async fn privileged_caller_gets_provider_sections() {
    let pipeline = Pipeline::new(Some(Arc::new(StubProvider)), Duration::from_secs(5));
    let output = pipeline.process(input(), true).await;
    assert_eq!(output.sections, stub_sections());
}

#[tokio::test]
async fn unprivileged_caller_never_reaches_the_provider() {
    let with_provider = Pipeline::new(Some(Arc::new(StubProvider)), Duration::from_secs(5));
    let rules_only = Pipeline::rule_based();

    let output = with_provider.process(input(), false).await;
    let expected = rules_only.process(input(), false).await;
    assert_eq!(output, expected);
}

#[tokio::test]
async fn provider_error_falls_back_to_rule_engine() {
    let failing = Pipeline::new(Some(Arc::new(FailingProvider)), Duration::from_secs(5));
    let rules_only = Pipeline::rule_based();

    let output = failing.process(input(), true).await;
    let expected = rules_only.process(input(), false).await;
    assert_eq!(output, expected);
}

#[tokio::test]
async fn provider_timeout_falls_back_to_rule_engine() {
    let stalled = Pipeline::new(Some(Arc::new(StalledProvider)), Duration::from_millis(50));
    let rules_only = Pipeline::rule_based();

    let output = stalled.process(input(), true).await;
    let expected = rules_only.process(input(), false).await;
    assert_eq!(output, expected);
}

#[tokio::test]
async fn missing_provider_with_privileged_caller_uses_rules() {
    let pipeline = Pipeline::new(None, Duration::from_secs(5));
    let rules_only = Pipeline::rule_based();

    let output = pipeline.process(input(), true).await;
    let expected = rules_only.process(input(), false).await;
    assert_eq!(output, expected);
}
