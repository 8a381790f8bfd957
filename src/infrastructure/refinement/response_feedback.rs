//! Response feedback node, entered when groundedness fell short.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::refinement::{FeedbackProvider, SessionState};
use crate::domain::DomainError;

use super::prompts::RESPONSE_FEEDBACK_SYSTEM_PROMPT;

/// Analyzes the rejected response and writes advisory suggestions.
///
/// Stores the critique in `feedback`, packaged together with the response it
/// analyzed so the next generation pass sees both. Never rewrites `response`
/// itself.
#[derive(Debug)]
pub struct ResponseFeedbackProvider<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> ResponseFeedbackProvider<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl<P: LlmProvider> FeedbackProvider for ResponseFeedbackProvider<P> {
    async fn provide_feedback(&self, state: &mut SessionState) -> Result<(), DomainError> {
        if state.response.is_empty() {
            return Err(DomainError::missing_state("response"));
        }

        let user_message = format!(
            "Query:\n{}\n\nResponse:\n{}",
            state.query, state.response
        );

        let request = LlmRequest::builder()
            .system(RESPONSE_FEEDBACK_SYSTEM_PROMPT)
            .user(user_message)
            .build();

        let response = self.provider.chat(&self.model, request).await?;

        state.feedback = format!(
            "Previous Response: {}\nSuggestions: {}",
            state.response,
            response.content().trim()
        );

        debug!(chars = state.feedback.len(), "Response feedback produced");

        Ok(())
    }
}
