//! Response generation node.

use std::sync::Arc;

use tracing::debug;

use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::refinement::SessionState;
use crate::domain::DomainError;

use super::prompts::GENERATION_SYSTEM_PROMPT;

/// Sentinel answer the generation prompt mandates when the context cannot
/// answer the query at all.
pub const INSUFFICIENT_INFORMATION: &str =
    "I don't have sufficient information in the provided context to answer this question.";

/// Produces a context-grounded answer for the original query.
///
/// Reads `query`, `context` and (on refinement passes) `feedback`, and
/// overwrites `response`. The original query, not the expanded one, is what
/// the answer must address.
#[derive(Debug)]
pub struct ResponseGenerator<P: LlmProvider> {
    provider: Arc<P>,
    model: String,
}

impl<P: LlmProvider> ResponseGenerator<P> {
    pub fn new(provider: Arc<P>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub async fn generate(&self, state: &mut SessionState) -> Result<(), DomainError> {
        let mut user_message = format!(
            "Context:\n{}\n\nQuery: {}",
            state.context_text(),
            state.query
        );
        if !state.feedback.is_empty() {
            user_message.push_str("\n\nFeedback:\n");
            user_message.push_str(&state.feedback);
        }

        let request = LlmRequest::builder()
            .system(GENERATION_SYSTEM_PROMPT)
            .user(user_message)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        state.response = response.content().trim().to_string();

        debug!(chars = state.response.len(), "Generated response");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::retrieval::RetrievedDocument;

    #[tokio::test]
    async fn test_generate_overwrites_response() {
        let provider =
            Arc::new(MockLlmProvider::new("mock").push_text("Iron absorption improves with vitamin C (Guide, p.12)."));
        let generator = ResponseGenerator::new(provider, "gpt-4o-mini");

        let mut state = SessionState::new("How can I absorb more iron?", 3);
        state.context = vec![RetrievedDocument::new("Vitamin C enhances non-heme iron absorption.")];
        state.response = "old draft".to_string();

        generator.generate(&mut state).await.unwrap();

        assert!(state.response.contains("Iron absorption"));
    }

    #[tokio::test]
    async fn test_generate_with_empty_context_still_runs() {
        // Empty retrieval results are legitimate; the prompt contract makes
        // the model answer with the insufficient-information sentinel.
        let provider = Arc::new(MockLlmProvider::new("mock").push_text(INSUFFICIENT_INFORMATION));
        let generator = ResponseGenerator::new(provider, "gpt-4o-mini");

        let mut state = SessionState::new("q", 3);
        generator.generate(&mut state).await.unwrap();

        assert_eq!(state.response, INSUFFICIENT_INFORMATION);
    }

    #[tokio::test]
    async fn test_feedback_not_consumed_by_generation() {
        let provider = Arc::new(MockLlmProvider::new("mock").push_text("refined answer"));
        let generator = ResponseGenerator::new(provider, "gpt-4o-mini");

        let mut state = SessionState::new("q", 3);
        state.feedback = "Previous Response: draft\nSuggestions: cite sources".to_string();

        generator.generate(&mut state).await.unwrap();

        assert_eq!(state.response, "refined answer");
        assert!(!state.feedback.is_empty());
    }
}
