use serde::{Deserialize, Serialize};

/// Configuration for the refinement pipeline
///
/// The groundedness and precision loops carry independent ceilings
/// (`loop_max_iter` and `precision_max_loops`); they default to the same
/// value but are deliberately separate fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementConfig {
    /// Minimum groundedness score (0-10) to proceed to the precision check
    #[serde(default = "default_threshold")]
    pub groundedness_threshold: f64,
    /// Minimum precision score (0-10) to complete the workflow
    #[serde(default = "default_threshold")]
    pub precision_threshold: f64,
    /// Ceiling for groundedness refinement loops
    #[serde(default = "default_max_loops")]
    pub loop_max_iter: u32,
    /// Ceiling for precision refinement loops
    #[serde(default = "default_max_loops")]
    pub precision_max_loops: u32,
    /// Number of passages to retrieve per search
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Response used when iteration budgets are exhausted
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_threshold() -> f64 {
    8.0
}

fn default_max_loops() -> u32 {
    3
}

fn default_top_k() -> usize {
    3
}

fn default_fallback_message() -> String {
    "We need more context to provide an accurate answer.".to_string()
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            groundedness_threshold: default_threshold(),
            precision_threshold: default_threshold(),
            loop_max_iter: default_max_loops(),
            precision_max_loops: default_max_loops(),
            top_k: default_top_k(),
            fallback_message: default_fallback_message(),
        }
    }
}

impl RefinementConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groundedness_threshold(mut self, threshold: f64) -> Self {
        self.groundedness_threshold = threshold.clamp(0.0, 10.0);
        self
    }

    pub fn with_precision_threshold(mut self, threshold: f64) -> Self {
        self.precision_threshold = threshold.clamp(0.0, 10.0);
        self
    }

    pub fn with_loop_max_iter(mut self, max: u32) -> Self {
        self.loop_max_iter = max;
        self
    }

    pub fn with_precision_max_loops(mut self, max: u32) -> Self {
        self.precision_max_loops = max;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }
}
