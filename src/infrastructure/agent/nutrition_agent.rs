//! User-facing agent wrapping the refinement workflow.
//!
//! Layers the pieces the workflow itself stays ignorant of: the content
//! safety gate in front of it and per-user interaction memory around it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::guardrail::ContentSafetyFilter;
use crate::domain::llm::LlmProvider;
use crate::domain::memory::{Interaction, InteractionMemory};
use crate::domain::refinement::SessionState;
use crate::domain::retrieval::VectorSearchStore;
use crate::domain::DomainError;
use crate::infrastructure::refinement::RefinementOrchestrator;

/// Hazard categories tolerated for nutrition questions. S6 is specialized
/// advice, S7 is privacy; both fire routinely on legitimate dietary queries.
pub const DEFAULT_ALLOWED_CATEGORIES: &[&str] = &["S6", "S7"];

/// How many past interactions are folded into the prompt context
const MEMORY_SEARCH_LIMIT: usize = 3;

/// Outcome of one agent turn
#[derive(Debug)]
pub enum AgentReply {
    /// The workflow ran; final session state with response and scores
    Answer(SessionState),
    /// The safety gate rejected the input before any processing
    Rejected { categories: Vec<String> },
}

impl AgentReply {
    /// The text to show the user
    pub fn message(&self) -> String {
        match self {
            Self::Answer(state) => state.response.clone(),
            Self::Rejected { .. } => {
                "I can't help with that request. Please ask a nutrition-related question."
                    .to_string()
            }
        }
    }
}

/// Safety-gated, memory-augmented front end over the refinement workflow
#[derive(Debug)]
pub struct NutritionAgent<P: LlmProvider, S: VectorSearchStore> {
    guard: Arc<dyn ContentSafetyFilter>,
    memory: Arc<dyn InteractionMemory>,
    orchestrator: RefinementOrchestrator<P, S>,
    allowed_categories: Vec<String>,
}

impl<P: LlmProvider, S: VectorSearchStore> NutritionAgent<P, S> {
    pub fn new(
        guard: Arc<dyn ContentSafetyFilter>,
        memory: Arc<dyn InteractionMemory>,
        orchestrator: RefinementOrchestrator<P, S>,
    ) -> Self {
        Self {
            guard,
            memory,
            orchestrator,
            allowed_categories: DEFAULT_ALLOWED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }

    pub fn with_allowed_categories(mut self, categories: Vec<String>) -> Self {
        self.allowed_categories = categories;
        self
    }

    /// Handle one user turn: gate, recall, refine, remember.
    pub async fn ask(&self, user_id: &str, query: &str) -> Result<AgentReply, DomainError> {
        let verdict = self.guard.classify(query).await?;
        if !verdict.is_allowed(&self.allowed_categories) {
            warn!(user_id, categories = ?verdict.categories(), "Input rejected by safety gate");
            return Ok(AgentReply::Rejected {
                categories: verdict.categories().to_vec(),
            });
        }

        let history = self
            .memory
            .search_relevant(user_id, query, MEMORY_SEARCH_LIMIT)
            .await?;
        let input = Self::compose_input(query, &history);

        debug!(user_id, history = history.len(), "Running refinement workflow");

        let state = self.orchestrator.run(input).await?;

        let interaction = Interaction::new(query, state.response.clone())
            .with_metadata(
                "groundedness_score",
                serde_json::json!(state.groundedness_score),
            )
            .with_metadata("precision_score", serde_json::json!(state.precision_score));
        self.memory.record(user_id, interaction).await?;

        info!(user_id, "Agent turn completed");

        Ok(AgentReply::Answer(state))
    }

    /// Prefix the query with relevant history so follow-ups resolve.
    fn compose_input(query: &str, history: &[Interaction]) -> String {
        if history.is_empty() {
            return query.to_string();
        }

        let mut input = String::from("Relevant previous conversation:\n");
        for interaction in history {
            input.push_str(&format!(
                "User: {}\nAssistant: {}\n",
                interaction.query, interaction.response
            ));
        }
        input.push_str("\nCurrent question: ");
        input.push_str(query);
        input
    }
}
