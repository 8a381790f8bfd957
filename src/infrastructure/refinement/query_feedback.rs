//! Query feedback node, entered when precision fell short.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::refinement::{FeedbackProvider, SessionState};
use crate::domain::DomainError;

use super::prompts::QUERY_FEEDBACK_SYSTEM_PROMPT;

/// Analyzes the current query expansion and writes advisory suggestions.
///
/// Stores the critique in `query_feedback`, packaged with the expansion it
/// analyzed, for the next expansion pass to consume. Never rewrites
/// `expanded_query` itself.
#[derive(Debug)]
pub struct QueryFeedbackProvider<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> QueryFeedbackProvider<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}

#[async_trait]
impl<P: LlmProvider> FeedbackProvider for QueryFeedbackProvider<P> {
    async fn provide_feedback(&self, state: &mut SessionState) -> Result<(), DomainError> {
        if state.expanded_query.is_empty() {
            return Err(DomainError::missing_state("expanded_query"));
        }

        let user_message = format!(
            "Original Query:\n{}\n\nExpanded Query:\n{}",
            state.query, state.expanded_query
        );

        let request = LlmRequest::builder()
            .system(QUERY_FEEDBACK_SYSTEM_PROMPT)
            .user(user_message)
            .build();

        let response = self.provider.chat(&self.model, request).await?;

        state.query_feedback = format!(
            "Previous Expanded Query: {}\nSuggestions: {}",
            state.expanded_query,
            response.content().trim()
        );

        debug!(chars = state.query_feedback.len(), "Query feedback produced");

        Ok(())
    }
}
