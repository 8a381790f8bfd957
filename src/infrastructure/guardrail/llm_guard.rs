//! LLM-backed content safety filter
//!
//! Sends raw user input to a Llama-Guard-style moderation model and parses
//! its `safe` / `unsafe` + hazard-category verdict.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::guardrail::{ContentSafetyFilter, SafetyVerdict};
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::DomainError;

/// Safety filter backed by a moderation LLM
#[derive(Debug)]
pub struct LlmGuardFilter<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> LlmGuardFilter<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Parse a guard-model verdict.
    ///
    /// Expected forms: `safe`, or `unsafe` followed by comma- or
    /// newline-separated category codes (`unsafe\nS1,S6`). Anything else is a
    /// guardrail error, never treated as safe.
    fn parse_verdict(&self, text: &str) -> Result<SafetyVerdict, DomainError> {
        let trimmed = text.trim();
        let lowered = trimmed.to_lowercase();

        if lowered == "safe" {
            return Ok(SafetyVerdict::Safe);
        }

        if let Some(rest) = lowered.strip_prefix("unsafe") {
            let categories: Vec<String> = rest
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_uppercase())
                .collect();

            return Ok(SafetyVerdict::Unsafe { categories });
        }

        Err(DomainError::guardrail(format!(
            "Unrecognized guard verdict: {:?}",
            trimmed
        )))
    }
}

#[async_trait]
impl<P: LlmProvider> ContentSafetyFilter for LlmGuardFilter<P> {
    async fn classify(&self, text: &str) -> Result<SafetyVerdict, DomainError> {
        let request = LlmRequest::builder().user(text).build();

        let response = self.provider.chat(&self.model, request).await?;
        let verdict = self.parse_verdict(response.content())?;

        debug!(?verdict, "Guard verdict");

        Ok(verdict)
    }
}
