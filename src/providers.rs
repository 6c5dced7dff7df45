//! External content provider interface and the HTTP-backed implementation.
//!
//! The core depends only on the [`ContentProvider`] trait; no addresses or
//! credentials leak into the pipeline. The shipped implementation talks to
//! an OpenAI-compatible chat-completions endpoint and parses a JSON object
//! carrying the four section lists.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::cognitive::load::Density;
use crate::cognitive::types::{GeneratedSections, PipelineContext};
use crate::config::ProviderConfig;
use crate::error::{ClearMindError, Result};

/// Abstract content generation collaborator. May fail or stall; the pipeline
/// treats every failure mode as a single "provider unavailable" condition.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn generate(
        &self,
        context: &PipelineContext,
        density: Density,
    ) -> Result<GeneratedSections>;
}

/// OpenAI-compatible chat-completions provider.
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl HttpProvider {
    /// Build a provider from configuration. Fails when the API key env var
    /// named in the config is unset or empty.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).unwrap_or_default();
        if api_key.is_empty() {
            return Err(ClearMindError::Config {
                message: format!("{} not set", config.api_key_env),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClearMindError::Internal {
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl ContentProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn generate(
        &self,
        context: &PipelineContext,
        density: Density,
    ) -> Result<GeneratedSections> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt(density)},
                {"role": "user", "content": context.normalized_text}
            ],
            "temperature": 0.2,
            "response_format": {"type": "json_object"}
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(ClearMindError::Provider {
                message: format!("provider returned {}: {}", status, body_text),
            });
        }

        let val: Value = resp.json().await?;
        let content = val["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ClearMindError::Provider {
                message: "response missing message content".to_string(),
            })?;

        parse_sections(content)
    }
}

fn system_prompt(density: Density) -> String {
    let count = density.item_count();
    format!(
        "You organize free-form thoughts into a structured summary. Output density is \
         {}. Respond as JSON with keys: coreIssues, canControl, letGo, nextSteps (each \
         an array of short strings, at most {} items, letGo at most {}). Use only what \
         the text itself says.",
        density.as_str(),
        count,
        count.saturating_sub(1).max(1)
    )
}

/// Parse the provider's JSON payload; code fences are tolerated. A payload
/// without usable coreIssues and nextSteps counts as malformed.
fn parse_sections(text: &str) -> Result<GeneratedSections> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```");
    let sections: GeneratedSections =
        serde_json::from_str(trimmed).map_err(|e| ClearMindError::Provider {
            message: format!("malformed provider payload: {}", e),
        })?;

    if sections.core_issues.is_empty() || sections.next_steps.is_empty() {
        return Err(ClearMindError::Provider {
            message: "provider payload missing required sections".to_string(),
        });
    }
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_payload() {
        let payload = r#"{
            "coreIssues": ["One"],
            "canControl": ["Two"],
            "letGo": ["Three"],
            "nextSteps": ["Four"]
        }"#;
        let sections = parse_sections(payload).unwrap();
        assert_eq!(sections.core_issues, vec!["One"]);
        assert_eq!(sections.next_steps, vec!["Four"]);
    }

    #[test]
    fn strips_code_fences() {
        let payload = "```json\n{\"coreIssues\":[\"A\"],\"canControl\":[],\"letGo\":[],\"nextSteps\":[\"B\"]}\n```";
        let sections = parse_sections(payload).unwrap();
        assert_eq!(sections.core_issues, vec!["A"]);
    }

    #[test]
    fn rejects_empty_required_sections() {
        let payload = r#"{"coreIssues":[],"canControl":[],"letGo":[],"nextSteps":[]}"#;
        assert!(parse_sections(payload).is_err());
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_sections("certainly! here are your sections").is_err());
    }
}
