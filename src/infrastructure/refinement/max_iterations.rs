//! Fallback exit node.

use tracing::info;

use crate::domain::refinement::SessionState;

/// Terminal handler for an exhausted refinement budget.
///
/// Overwrites `response` with the honest fallback message; scores and
/// counters are left as evidence of how the session ended.
#[derive(Debug, Clone)]
pub struct MaxIterationsHandler {
    fallback_message: String,
}

impl MaxIterationsHandler {
    pub fn new(fallback_message: impl Into<String>) -> Self {
        Self {
            fallback_message: fallback_message.into(),
        }
    }

    pub fn handle(&self, state: &mut SessionState) {
        info!(
            groundedness_loops = state.groundedness_loop_count,
            precision_loops = state.precision_loop_count,
            "Refinement budget exhausted, returning fallback"
        );

        state.response = self.fallback_message.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_replaces_response_and_keeps_scores() {
        let handler = MaxIterationsHandler::new("We need more context to provide an accurate answer.");

        let mut state = SessionState::new("q", 3);
        state.response = "a sub-threshold answer".to_string();
        state.groundedness_score = Some(5.0);
        state.groundedness_loop_count = 4;

        handler.handle(&mut state);

        assert_eq!(
            state.response,
            "We need more context to provide an accurate answer."
        );
        assert_eq!(state.groundedness_score, Some(5.0));
        assert_eq!(state.groundedness_loop_count, 4);
    }
}
