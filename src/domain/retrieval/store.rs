use std::fmt::Debug;

use async_trait::async_trait;

use super::document::{RetrievedDocument, SearchParams};
use crate::domain::DomainError;

/// Trait for similarity-search backends
///
/// Implementations return the top-k nearest passages in the backend's own
/// ranking order; the pipeline performs no re-ranking.
#[async_trait]
pub trait VectorSearchStore: Send + Sync + Debug {
    /// Search for passages similar to the query text
    async fn search(&self, params: SearchParams) -> Result<Vec<RetrievedDocument>, DomainError>;

    /// Get the store type name
    fn store_type(&self) -> &'static str;
}
