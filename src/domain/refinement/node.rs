//! Trait seams for graph nodes.
//!
//! Each is a single-method capability with one implementation per variant.
//! Nodes mutate the session state they are handed; the orchestrator keeps
//! exclusive ownership and passes it down one node at a time.

use std::fmt::Debug;

use async_trait::async_trait;

use super::state::SessionState;
use crate::domain::DomainError;

/// Scores one quality axis of the current state and bumps its loop counter
#[async_trait]
pub trait Evaluator: Send + Sync + Debug {
    async fn evaluate(&self, state: &mut SessionState) -> Result<(), DomainError>;
}

/// Produces advisory improvement text without rewriting what it analyzed
#[async_trait]
pub trait FeedbackProvider: Send + Sync + Debug {
    async fn provide_feedback(&self, state: &mut SessionState) -> Result<(), DomainError>;
}
