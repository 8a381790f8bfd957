//! CLI module for NutriRAG
//!
//! Provides subcommands for running the assistant in different modes:
//! - `chat`: interactive console session
//! - `query`: answer a single question and exit

pub mod chat;
pub mod query;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::agent::NutritionAgent;
use crate::infrastructure::guardrail::LlmGuardFilter;
use crate::infrastructure::llm::{HttpClient, OpenAiProvider};
use crate::infrastructure::memory::InMemoryInteractionMemory;
use crate::infrastructure::refinement::RefinementOrchestrator;
use crate::infrastructure::retrieval::ChromaSearchStore;

/// NutriRAG - Quality-controlled RAG assistant for nutrition questions
#[derive(Parser)]
#[command(name = "nutrirag")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an interactive console chat session
    Chat(chat::ChatArgs),

    /// Answer a single question and exit
    Query(query::QueryArgs),
}

pub(crate) type DefaultAgent =
    NutritionAgent<OpenAiProvider<HttpClient>, ChromaSearchStore<HttpClient>>;

/// Wire the full stack from configuration and environment.
pub(crate) fn build_agent(config: &AppConfig) -> anyhow::Result<DefaultAgent> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY environment variable is not set")?;

    let http = HttpClient::with_timeout(Duration::from_secs(config.llm.timeout_secs))?;

    let provider = Arc::new(OpenAiProvider::with_base_url(
        http.clone(),
        api_key,
        &config.llm.base_url,
    ));
    let store = Arc::new(ChromaSearchStore::new(
        http.clone(),
        &config.retrieval.base_url,
        &config.retrieval.collection,
    ));
    let guard = Arc::new(LlmGuardFilter::new(
        provider.clone(),
        &config.llm.guard_model,
    ));
    let memory = Arc::new(InMemoryInteractionMemory::new());

    let orchestrator = RefinementOrchestrator::new(
        provider,
        store,
        &config.llm.model,
        config.refinement.clone(),
    );

    Ok(NutritionAgent::new(guard, memory, orchestrator))
}
