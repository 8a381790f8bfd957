//! LLM- and search-backed implementations of the refinement graph nodes,
//! plus the orchestrator that drives them.

pub mod expander;
pub mod generator;
pub mod groundedness;
pub mod max_iterations;
pub mod orchestrator;
pub mod precision;
pub mod prompts;
pub mod query_feedback;
pub mod response_feedback;
pub mod retriever;
pub mod score;

pub use expander::QueryExpander;
pub use generator::{ResponseGenerator, INSUFFICIENT_INFORMATION};
pub use groundedness::GroundednessEvaluator;
pub use max_iterations::MaxIterationsHandler;
pub use orchestrator::RefinementOrchestrator;
pub use precision::PrecisionEvaluator;
pub use query_feedback::QueryFeedbackProvider;
pub use response_feedback::ResponseFeedbackProvider;
pub use retriever::ContextRetriever;
