//! Query expansion node.

use std::sync::Arc;

use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::refinement::SessionState;
use crate::domain::DomainError;

use super::prompts::EXPANSION_SYSTEM_PROMPT;

/// Rewrites the user query into retrieval-optimized clinical phrasing.
///
/// Reads `query` (and `query_feedback` when a precision loop produced any)
/// and overwrites `expanded_query`. Everything else in the state is left
/// untouched.
#[derive(Debug)]
pub struct QueryExpander<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> QueryExpander<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub async fn expand(&self, state: &mut SessionState) -> Result<(), DomainError> {
        if state.query.is_empty() {
            return Err(DomainError::missing_state("query"));
        }

        let mut user_message = format!("Query: {}", state.query);
        if !state.query_feedback.is_empty() {
            user_message.push_str("\n\n");
            user_message.push_str(&state.query_feedback);
        }

        let request = LlmRequest::builder()
            .system(EXPANSION_SYSTEM_PROMPT)
            .user(user_message)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        state.expanded_query = response.content().trim().to_string();

        debug!(expanded_query = %state.expanded_query, "Expanded query");

        Ok(())
    }
}
