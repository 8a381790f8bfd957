//! NutriRAG
//!
//! An iterative, quality-controlled RAG pipeline for nutrition care queries:
//! - Query expansion into clinical terminology for better retrieval
//! - Semantic context retrieval from a vector search oracle
//! - Evidence-based response generation with source citations
//! - Groundedness and precision scoring with feedback-guided refinement loops
//! - Content safety gating and per-user interaction memory

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
