use serde::{Deserialize, Serialize};

use crate::domain::retrieval::RetrievedDocument;

/// Per-query working state threaded through the refinement graph.
///
/// One instance is created per user query and owned exclusively by the
/// orchestrator until a terminal node is reached; nodes receive it by
/// mutable reference, never by copy. Nothing is retained across queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// The user's original question; never rewritten after construction
    pub query: String,
    /// Retrieval-optimized reformulation, overwritten each expansion pass
    pub expanded_query: String,
    /// Retrieved passages, replaced wholesale each retrieval pass
    pub context: Vec<RetrievedDocument>,
    /// Latest generated answer (or the fallback message)
    pub response: String,
    /// Factual-support score in [0, 10]; None before the first evaluation
    pub groundedness_score: Option<f64>,
    /// Query-alignment score in [0, 10]; None before the first evaluation
    pub precision_score: Option<f64>,
    /// Incremented exactly once per groundedness evaluation
    pub groundedness_loop_count: u32,
    /// Incremented exactly once per precision evaluation
    pub precision_loop_count: u32,
    /// Advisory response-improvement text consumed by the next generation pass
    pub feedback: String,
    /// Advisory expansion-improvement text consumed by the next expansion pass
    pub query_feedback: String,
    /// Ceiling for the groundedness refinement loop
    pub loop_max_iter: u32,
}

impl SessionState {
    pub fn new(query: impl Into<String>, loop_max_iter: u32) -> Self {
        Self {
            query: query.into(),
            expanded_query: String::new(),
            context: Vec::new(),
            response: String::new(),
            groundedness_score: None,
            precision_score: None,
            groundedness_loop_count: 0,
            precision_loop_count: 0,
            feedback: String::new(),
            query_feedback: String::new(),
            loop_max_iter,
        }
    }

    /// Context passages joined into one blob, in retrieval order
    pub fn context_text(&self) -> String {
        self.context
            .iter()
            .map(|doc| doc.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::new("What is refeeding syndrome?", 3);

        assert_eq!(state.query, "What is refeeding syndrome?");
        assert!(state.expanded_query.is_empty());
        assert!(state.context.is_empty());
        assert!(state.response.is_empty());
        assert_eq!(state.groundedness_score, None);
        assert_eq!(state.precision_score, None);
        assert_eq!(state.groundedness_loop_count, 0);
        assert_eq!(state.precision_loop_count, 0);
        assert!(state.feedback.is_empty());
        assert!(state.query_feedback.is_empty());
        assert_eq!(state.loop_max_iter, 3);
    }

    #[test]
    fn test_context_text_preserves_order() {
        let mut state = SessionState::new("q", 3);
        state.context = vec![
            RetrievedDocument::new("first passage"),
            RetrievedDocument::new("second passage"),
        ];

        assert_eq!(state.context_text(), "first passage\nsecond passage");
    }
}
