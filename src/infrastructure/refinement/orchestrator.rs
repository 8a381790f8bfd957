//! Workflow orchestrator.
//!
//! Drives one session state through the node graph until a terminal node is
//! reached. All branching goes through the pure routers; nodes never decide
//! where control flows next.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::llm::LlmProvider;
use crate::domain::refinement::{
    Evaluator, FeedbackProvider, GroundednessRoute, GroundednessRouter, PrecisionRoute,
    PrecisionRouter, RefinementConfig, SessionState,
};
use crate::domain::retrieval::VectorSearchStore;
use crate::domain::DomainError;

use super::expander::QueryExpander;
use super::generator::ResponseGenerator;
use super::groundedness::GroundednessEvaluator;
use super::max_iterations::MaxIterationsHandler;
use super::precision::PrecisionEvaluator;
use super::query_feedback::QueryFeedbackProvider;
use super::response_feedback::ResponseFeedbackProvider;
use super::retriever::ContextRetriever;

/// Nodes of the refinement graph, used for dispatch and trace output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkflowNode {
    ExpandQuery,
    RetrieveContext,
    GenerateResponse,
    ScoreGroundedness,
    RefineResponse,
    CheckPrecision,
    RefineQuery,
    MaxIterations,
}

/// Sequential driver for the refinement graph.
///
/// Owns every node and both routers; `run` creates a fresh [`SessionState`]
/// per query and threads it through the nodes by mutable reference. Any node
/// error aborts the run and propagates to the caller.
#[derive(Debug)]
pub struct RefinementOrchestrator<P: LlmProvider, S: VectorSearchStore> {
    expander: QueryExpander<P>,
    retriever: ContextRetriever<S>,
    generator: ResponseGenerator<P>,
    groundedness: GroundednessEvaluator<P>,
    precision: PrecisionEvaluator<P>,
    response_feedback: ResponseFeedbackProvider<P>,
    query_feedback: QueryFeedbackProvider<P>,
    max_iterations: MaxIterationsHandler,
    groundedness_router: GroundednessRouter,
    precision_router: PrecisionRouter,
    config: RefinementConfig,
}

impl<P: LlmProvider, S: VectorSearchStore> RefinementOrchestrator<P, S> {
    pub fn new(
        provider: Arc<P>,
        store: Arc<S>,
        model: impl Into<String>,
        config: RefinementConfig,
    ) -> Self {
        let model = model.into();

        Self {
            expander: QueryExpander::new(provider.clone(), model.clone()),
            retriever: ContextRetriever::new(store, config.top_k),
            generator: ResponseGenerator::new(provider.clone(), model.clone()),
            groundedness: GroundednessEvaluator::new(provider.clone(), model.clone()),
            precision: PrecisionEvaluator::new(provider.clone(), model.clone()),
            response_feedback: ResponseFeedbackProvider::new(provider.clone(), model.clone()),
            query_feedback: QueryFeedbackProvider::new(provider, model),
            max_iterations: MaxIterationsHandler::new(config.fallback_message.clone()),
            groundedness_router: GroundednessRouter::new(config.groundedness_threshold),
            precision_router: PrecisionRouter::new(
                config.precision_threshold,
                config.precision_max_loops,
            ),
            config,
        }
    }

    pub fn config(&self) -> &RefinementConfig {
        &self.config
    }

    /// Run one query through the graph to completion.
    pub async fn run(&self, query: impl Into<String>) -> Result<SessionState, DomainError> {
        let mut state = SessionState::new(query, self.config.loop_max_iter);
        let mut node = WorkflowNode::ExpandQuery;

        info!(query = %state.query, "Starting refinement workflow");

        loop {
            debug!(?node, "Entering node");

            node = match node {
                WorkflowNode::ExpandQuery => {
                    self.expander.expand(&mut state).await?;
                    WorkflowNode::RetrieveContext
                }
                WorkflowNode::RetrieveContext => {
                    self.retriever.retrieve(&mut state).await?;
                    WorkflowNode::GenerateResponse
                }
                WorkflowNode::GenerateResponse => {
                    self.generator.generate(&mut state).await?;
                    WorkflowNode::ScoreGroundedness
                }
                WorkflowNode::ScoreGroundedness => {
                    self.groundedness.evaluate(&mut state).await?;

                    let score = state
                        .groundedness_score
                        .ok_or_else(|| DomainError::missing_state("groundedness_score"))?;
                    let route = self.groundedness_router.route(
                        score,
                        state.groundedness_loop_count,
                        state.loop_max_iter,
                    );

                    debug!(score, ?route, "Groundedness routed");

                    match route {
                        GroundednessRoute::CheckPrecision => WorkflowNode::CheckPrecision,
                        GroundednessRoute::RefineResponse => WorkflowNode::RefineResponse,
                        GroundednessRoute::MaxIterations => WorkflowNode::MaxIterations,
                    }
                }
                WorkflowNode::RefineResponse => {
                    self.response_feedback.provide_feedback(&mut state).await?;
                    WorkflowNode::GenerateResponse
                }
                WorkflowNode::CheckPrecision => {
                    self.precision.evaluate(&mut state).await?;

                    let score = state
                        .precision_score
                        .ok_or_else(|| DomainError::missing_state("precision_score"))?;
                    let route = self
                        .precision_router
                        .route(score, state.precision_loop_count);

                    debug!(score, ?route, "Precision routed");

                    match route {
                        PrecisionRoute::Pass => {
                            info!(
                                groundedness = ?state.groundedness_score,
                                precision = ?state.precision_score,
                                "Workflow completed"
                            );
                            return Ok(state);
                        }
                        PrecisionRoute::RefineQuery => WorkflowNode::RefineQuery,
                        PrecisionRoute::MaxIterations => WorkflowNode::MaxIterations,
                    }
                }
                WorkflowNode::RefineQuery => {
                    self.query_feedback.provide_feedback(&mut state).await?;
                    WorkflowNode::ExpandQuery
                }
                WorkflowNode::MaxIterations => {
                    self.max_iterations.handle(&mut state);
                    return Ok(state);
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::retrieval::{MockVectorSearchStore, RetrievedDocument};

    fn store_with_passages() -> Arc<MockVectorSearchStore> {
        Arc::new(MockVectorSearchStore::new().with_results(vec![
            RetrievedDocument::new("Adults need roughly 0.8 g protein per kg body weight."),
            RetrievedDocument::new("Protein needs rise with resistance training."),
        ]))
    }

    fn orchestrator(
        provider: Arc<MockLlmProvider>,
        store: Arc<MockVectorSearchStore>,
        config: RefinementConfig,
    ) -> RefinementOrchestrator<MockLlmProvider, MockVectorSearchStore> {
        RefinementOrchestrator::new(provider, store, "gpt-4o-mini", config)
    }

    #[tokio::test]
    async fn test_happy_path_single_pass() {
        // Expansion, generation, groundedness, precision: one call each
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("1. Daily protein requirement in grams per kilogram")
                .push_text("Adults need about 0.8 g/kg daily (Guide, p.4).")
                .push_text("9")
                .push_text("9"),
        );
        let store = store_with_passages();
        let orch = orchestrator(provider.clone(), store.clone(), RefinementConfig::default());

        let state = orch.run("How much protein do I need?").await.unwrap();

        assert_eq!(state.response, "Adults need about 0.8 g/kg daily (Guide, p.4).");
        assert_eq!(state.groundedness_score, Some(9.0));
        assert_eq!(state.precision_score, Some(9.0));
        assert_eq!(state.groundedness_loop_count, 1);
        assert_eq!(state.precision_loop_count, 1);
        assert!(state.feedback.is_empty());
        assert!(state.query_feedback.is_empty());
        assert_eq!(provider.call_count(), 4);
        assert_eq!(store.search_count(), 1);
    }

    #[tokio::test]
    async fn test_groundedness_refinement_loop() {
        // First draft scores below threshold, feedback is produced, second
        // draft passes both checks.
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("expanded query")
                .push_text("first draft")
                .push_text("6")
                .push_text("add citations")
                .push_text("second draft with citations")
                .push_text("9")
                .push_text("9"),
        );
        let store = store_with_passages();
        let orch = orchestrator(provider.clone(), store.clone(), RefinementConfig::default());

        let state = orch.run("q").await.unwrap();

        assert_eq!(state.response, "second draft with citations");
        assert_eq!(state.groundedness_loop_count, 2);
        assert_eq!(state.precision_loop_count, 1);
        assert_eq!(
            state.feedback,
            "Previous Response: first draft\nSuggestions: add citations"
        );
        // Retrieval happened once; the response loop never re-retrieves
        assert_eq!(store.search_count(), 1);
        assert_eq!(provider.call_count(), 7);
    }

    #[tokio::test]
    async fn test_groundedness_budget_exhaustion_returns_fallback() {
        // Ceiling of 1, scores never reach the threshold. The evaluator runs
        // ceiling + 1 times before the fallback exit fires.
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("expanded query")
                .push_text("draft one")
                .push_text("5")
                .push_text("feedback one")
                .push_text("draft two")
                .push_text("5"),
        );
        let store = store_with_passages();
        let config = RefinementConfig::default().with_loop_max_iter(1);
        let orch = orchestrator(provider.clone(), store, config);

        let state = orch.run("q").await.unwrap();

        assert_eq!(
            state.response,
            "We need more context to provide an accurate answer."
        );
        assert_eq!(state.groundedness_loop_count, 2);
        assert_eq!(state.groundedness_score, Some(5.0));
        assert_eq!(state.precision_loop_count, 0);
        assert_eq!(provider.call_count(), 6);
    }

    #[tokio::test]
    async fn test_precision_refinement_reexpands_and_reretrieves() {
        // Precision fails once; the query loop re-runs expansion, retrieval,
        // generation and both evaluations.
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("first expansion")
                .push_text("first answer")
                .push_text("9")
                .push_text("4")
                .push_text("narrow the scope")
                .push_text("second expansion")
                .push_text("second answer")
                .push_text("9")
                .push_text("9"),
        );
        let store = store_with_passages();
        let orch = orchestrator(provider.clone(), store.clone(), RefinementConfig::default());

        let state = orch.run("q").await.unwrap();

        assert_eq!(state.response, "second answer");
        assert_eq!(state.expanded_query, "second expansion");
        assert_eq!(state.precision_loop_count, 2);
        assert_eq!(state.groundedness_loop_count, 2);
        assert_eq!(
            state.query_feedback,
            "Previous Expanded Query: first expansion\nSuggestions: narrow the scope"
        );
        assert_eq!(store.search_count(), 2);
        assert_eq!(provider.call_count(), 9);
    }

    #[tokio::test]
    async fn test_precision_budget_exhaustion_returns_fallback() {
        // Groundedness always passes, precision never does, ceiling of 1.
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("expansion one")
                .push_text("answer one")
                .push_text("9")
                .push_text("3")
                .push_text("suggestion")
                .push_text("expansion two")
                .push_text("answer two")
                .push_text("9")
                .push_text("3"),
        );
        let store = store_with_passages();
        let config = RefinementConfig::default().with_precision_max_loops(1);
        let orch = orchestrator(provider.clone(), store, config);

        let state = orch.run("q").await.unwrap();

        assert_eq!(
            state.response,
            "We need more context to provide an accurate answer."
        );
        assert_eq!(state.precision_loop_count, 2);
        assert_eq!(state.groundedness_loop_count, 2);
        assert_eq!(provider.call_count(), 9);
    }

    #[tokio::test]
    async fn test_score_parse_failure_aborts_run() {
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("expanded query")
                .push_text("a draft")
                .push_text("the response looks solid"),
        );
        let store = store_with_passages();
        let orch = orchestrator(provider, store, RefinementConfig::default());

        let result = orch.run("q").await;

        assert!(matches!(result, Err(DomainError::ScoreParse { .. })));
    }

    #[tokio::test]
    async fn test_provider_failure_aborts_run() {
        let provider = Arc::new(MockLlmProvider::new("mock").push_error("connection reset"));
        let store = store_with_passages();
        let orch = orchestrator(provider, store, RefinementConfig::default());

        assert!(orch.run("q").await.is_err());
    }

    #[tokio::test]
    async fn test_terminates_with_zero_ceilings() {
        // Both ceilings at zero: each evaluator still runs once before its
        // counter exceeds the ceiling.
        let provider = Arc::new(
            MockLlmProvider::new("mock")
                .push_text("expansion")
                .push_text("draft")
                .push_text("2"),
        );
        let store = store_with_passages();
        let config = RefinementConfig::default()
            .with_loop_max_iter(0)
            .with_precision_max_loops(0);
        let orch = orchestrator(provider.clone(), store, config);

        let state = orch.run("q").await.unwrap();

        assert_eq!(state.groundedness_loop_count, 1);
        assert_eq!(
            state.response,
            "We need more context to provide an accurate answer."
        );
        assert_eq!(provider.call_count(), 3);
    }
}
