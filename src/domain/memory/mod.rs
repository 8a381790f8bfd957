//! Long-term interaction memory
//!
//! Stores prior query/response pairs per user so the agent can fold relevant
//! history into the prompt context for follow-up questions. The refinement
//! graph itself never touches this store.

use std::collections::HashMap;
use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A stored query/response exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub query: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Interaction {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            query: query.into(),
            response: response.into(),
            timestamp: Utc::now(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Trait for per-user interaction storage and retrieval
#[async_trait]
pub trait InteractionMemory: Send + Sync + Debug {
    /// Record an interaction for a user
    async fn record(&self, user_id: &str, interaction: Interaction) -> Result<(), DomainError>;

    /// Retrieve up to `limit` past interactions relevant to the query
    async fn search_relevant(
        &self,
        user_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Interaction>, DomainError>;
}
