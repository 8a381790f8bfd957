//! Chroma-backed vector search store
//!
//! Talks to a Chroma server's collection query endpoint; embedding happens
//! server-side. The store returns passages in the server's ranking order and
//! carries metadata through untouched.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::retrieval::{RetrievedDocument, SearchParams, VectorSearchStore};
use crate::domain::DomainError;
use crate::infrastructure::llm::http_client::HttpClientTrait;

/// Vector search store backed by a Chroma collection
#[derive(Debug)]
pub struct ChromaSearchStore<C: HttpClientTrait> {
    client: C,
    base_url: String,
    collection: String,
}

impl<C: HttpClientTrait> ChromaSearchStore<C> {
    pub fn new(client: C, base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection: collection.into(),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, self.collection
        )
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<RetrievedDocument>, DomainError> {
        let response: ChromaQueryResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("chroma", format!("Failed to parse query response: {}", e))
        })?;

        // Chroma nests results per input query; we always send exactly one.
        let contents = response.documents.into_iter().next().unwrap_or_default();
        let metadatas = response
            .metadatas
            .unwrap_or_default()
            .into_iter()
            .next()
            .unwrap_or_default();

        let documents = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| {
                let metadata = metadatas.get(i).cloned().flatten().unwrap_or_default();
                RetrievedDocument::new(content).with_all_metadata(metadata)
            })
            .collect();

        Ok(documents)
    }
}

#[derive(Debug, Deserialize)]
struct ChromaQueryResponse {
    documents: Vec<Vec<String>>,
    metadatas: Option<Vec<Vec<Option<HashMap<String, serde_json::Value>>>>>,
}

#[async_trait]
impl<C: HttpClientTrait> VectorSearchStore for ChromaSearchStore<C> {
    async fn search(&self, params: SearchParams) -> Result<Vec<RetrievedDocument>, DomainError> {
        let body = serde_json::json!({
            "query_texts": [params.query],
            "n_results": params.top_k,
            "include": ["documents", "metadatas"],
        });

        debug!(
            collection = %self.collection,
            top_k = params.top_k,
            "Querying Chroma collection"
        );

        let headers = vec![("Content-Type", "application/json")];
        let json = self.client.post_json(&self.query_url(), headers, &body).await?;

        self.parse_response(json)
    }

    fn store_type(&self) -> &'static str {
        "chroma"
    }
}
