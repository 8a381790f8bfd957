//! Precision evaluation node.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::refinement::{Evaluator, SessionState};
use crate::domain::DomainError;

use super::prompts::PRECISION_SYSTEM_PROMPT;
use super::score::parse_score;

/// Scores how directly the response answers the original query.
///
/// Judged against `query`, never `expanded_query`. Writes `precision_score`
/// and increments `precision_loop_count` exactly once per evaluation.
#[derive(Debug)]
pub struct PrecisionEvaluator<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> PrecisionEvaluator<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl<P: LlmProvider> Evaluator for PrecisionEvaluator<P> {
    async fn evaluate(&self, state: &mut SessionState) -> Result<(), DomainError> {
        if state.response.is_empty() {
            return Err(DomainError::missing_state("response"));
        }

        let user_message = format!(
            "Query:\n{}\n\nResponse:\n{}",
            state.query, state.response
        );

        let request = LlmRequest::builder()
            .system(PRECISION_SYSTEM_PROMPT)
            .user(user_message)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        let score = parse_score(response.content())?;

        state.precision_score = Some(score);
        state.precision_loop_count += 1;

        debug!(
            score,
            loop_count = state.precision_loop_count,
            "Precision evaluated"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;

    #[tokio::test]
    async fn test_evaluate_sets_score_and_bumps_counter() {
        let provider = Arc::new(MockLlmProvider::new("mock").push_text("Score: 7"));
        let evaluator = PrecisionEvaluator::new(provider, "gpt-4o-mini");

        let mut state = SessionState::new("q", 3);
        state.response = "an answer".to_string();

        evaluator.evaluate(&mut state).await.unwrap();

        assert_eq!(state.precision_score, Some(7.0));
        assert_eq!(state.precision_loop_count, 1);
        assert_eq!(state.groundedness_loop_count, 0);
    }

    #[tokio::test]
    async fn test_unparseable_score_surfaces() {
        let provider = Arc::new(MockLlmProvider::new("mock").push_text("N/A"));
        let evaluator = PrecisionEvaluator::new(provider, "gpt-4o-mini");

        let mut state = SessionState::new("q", 3);
        state.response = "an answer".to_string();

        let result = evaluator.evaluate(&mut state).await;

        assert!(matches!(result, Err(DomainError::ScoreParse { .. })));
        assert_eq!(state.precision_score, None);
        assert_eq!(state.precision_loop_count, 0);
    }
}
