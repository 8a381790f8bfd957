pub mod llm_guard;

pub use llm_guard::LlmGuardFilter;
