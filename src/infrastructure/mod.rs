pub mod agent;
pub mod guardrail;
pub mod llm;
pub mod logging;
pub mod memory;
pub mod refinement;
pub mod retrieval;
