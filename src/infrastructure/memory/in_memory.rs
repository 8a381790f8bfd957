//! In-process interaction memory
//!
//! Keeps per-user interaction history in memory with naive keyword-overlap
//! relevance. Suitable for a single-process deployment; a hosted memory
//! service can replace it behind the same trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::memory::{Interaction, InteractionMemory};
use crate::domain::DomainError;

/// In-memory implementation of [`InteractionMemory`]
#[derive(Debug, Default)]
pub struct InMemoryInteractionMemory {
    interactions: RwLock<HashMap<String, Vec<Interaction>>>,
}

impl InMemoryInteractionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total interactions stored for a user
    pub async fn count_for(&self, user_id: &str) -> usize {
        self.interactions
            .read()
            .await
            .get(user_id)
            .map(|v| v.len())
            .unwrap_or(0)
    }

    fn relevance(query: &str, interaction: &Interaction) -> usize {
        let haystack = format!(
            "{} {}",
            interaction.query.to_lowercase(),
            interaction.response.to_lowercase()
        );

        query
            .to_lowercase()
            .split_whitespace()
            .filter(|term| term.len() > 2 && haystack.contains(*term))
            .count()
    }
}

#[async_trait]
impl InteractionMemory for InMemoryInteractionMemory {
    async fn record(&self, user_id: &str, interaction: Interaction) -> Result<(), DomainError> {
        debug!(user_id, "Recording interaction");

        self.interactions
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .push(interaction);

        Ok(())
    }

    async fn search_relevant(
        &self,
        user_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Interaction>, DomainError> {
        let interactions = self.interactions.read().await;

        let Some(history) = interactions.get(user_id) else {
            return Ok(Vec::new());
        };

        let mut scored: Vec<(usize, &Interaction)> = history
            .iter()
            .map(|i| (Self::relevance(query, i), i))
            .filter(|(score, _)| *score > 0)
            .collect();

        // Most overlapping terms first; ties keep recency order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, i)| i.clone())
            .collect())
    }
}
