//! Context retrieval node.

use std::sync::Arc;

use tracing::debug;

use crate::domain::refinement::SessionState;
use crate::domain::retrieval::{SearchParams, VectorSearchStore};
use crate::domain::DomainError;

/// Fetches the top-k passages for the expanded query.
///
/// Replaces `context` wholesale on every pass; passages from earlier
/// retrievals never linger.
#[derive(Debug)]
pub struct ContextRetriever<S: VectorSearchStore> {
    store: Arc<S>,
    top_k: usize,
}

impl<S: VectorSearchStore> ContextRetriever<S> {
    pub fn new(store: Arc<S>, top_k: usize) -> Self {
        Self { store, top_k }
    }

    pub async fn retrieve(&self, state: &mut SessionState) -> Result<(), DomainError> {
        if state.expanded_query.is_empty() {
            return Err(DomainError::missing_state("expanded_query"));
        }

        let params = SearchParams::new(&state.expanded_query).with_top_k(self.top_k);
        let documents = self.store.search(params).await?;

        debug!(
            count = documents.len(),
            store = self.store.store_type(),
            "Retrieved context passages"
        );

        state.context = documents;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::retrieval::{MockVectorSearchStore, RetrievedDocument};

    #[tokio::test]
    async fn test_retrieve_replaces_context_wholesale() {
        let store = Arc::new(MockVectorSearchStore::new().with_results(vec![
            RetrievedDocument::new("fresh passage"),
        ]));
        let retriever = ContextRetriever::new(store, 3);

        let mut state = SessionState::new("q", 3);
        state.expanded_query = "expanded".to_string();
        state.context = vec![
            RetrievedDocument::new("stale one"),
            RetrievedDocument::new("stale two"),
        ];

        retriever.retrieve(&mut state).await.unwrap();

        assert_eq!(state.context.len(), 1);
        assert_eq!(state.context[0].content, "fresh passage");
    }

    #[tokio::test]
    async fn test_missing_expanded_query() {
        let store = Arc::new(MockVectorSearchStore::new());
        let retriever = ContextRetriever::new(store.clone(), 3);

        let mut state = SessionState::new("q", 3);
        let result = retriever.retrieve(&mut state).await;

        assert!(matches!(result, Err(DomainError::MissingState { .. })));
        assert_eq!(store.search_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_results_are_not_an_error() {
        let store = Arc::new(MockVectorSearchStore::new());
        let retriever = ContextRetriever::new(store, 3);

        let mut state = SessionState::new("q", 3);
        state.expanded_query = "expanded".to_string();

        retriever.retrieve(&mut state).await.unwrap();
        assert!(state.context.is_empty());
    }
}
