pub mod error;
pub mod guardrail;
pub mod llm;
pub mod memory;
pub mod refinement;
pub mod retrieval;

pub use error::DomainError;
pub use guardrail::{ContentSafetyFilter, SafetyVerdict};
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage};
pub use memory::{Interaction, InteractionMemory};
pub use refinement::{
    Evaluator, FeedbackProvider, GroundednessRoute, GroundednessRouter, PrecisionRoute,
    PrecisionRouter, RefinementConfig, SessionState,
};
pub use retrieval::{RetrievedDocument, SearchParams, VectorSearchStore};
