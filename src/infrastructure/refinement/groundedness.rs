//! Groundedness evaluation node.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::refinement::{Evaluator, SessionState};
use crate::domain::DomainError;

use super::prompts::GROUNDEDNESS_SYSTEM_PROMPT;
use super::score::parse_score;

/// Scores how well the response is supported by the retrieved context.
///
/// Writes `groundedness_score` and increments `groundedness_loop_count`
/// exactly once per evaluation. A malformed verdict surfaces as
/// [`DomainError::ScoreParse`] and leaves the counter untouched.
#[derive(Debug)]
pub struct GroundednessEvaluator<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> GroundednessEvaluator<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl<P: LlmProvider> Evaluator for GroundednessEvaluator<P> {
    async fn evaluate(&self, state: &mut SessionState) -> Result<(), DomainError> {
        if state.response.is_empty() {
            return Err(DomainError::missing_state("response"));
        }

        let user_message = format!(
            "Context:\n{}\n\nResponse:\n{}",
            state.context_text(),
            state.response
        );

        let request = LlmRequest::builder()
            .system(GROUNDEDNESS_SYSTEM_PROMPT)
            .user(user_message)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        let score = parse_score(response.content())?;

        state.groundedness_score = Some(score);
        state.groundedness_loop_count += 1;

        debug!(
            score,
            loop_count = state.groundedness_loop_count,
            "Groundedness evaluated"
        );

        Ok(())
    }
}
