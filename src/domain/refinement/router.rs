//! Pure routing predicates for the two refinement loops.
//!
//! Routers run after their evaluator has already incremented the loop
//! counter. The strictly-greater comparison against the ceiling is the
//! contract: an evaluator may run `ceiling + 1` times before the fallback
//! route fires.

use serde::{Deserialize, Serialize};

/// Route out of the groundedness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundednessRoute {
    /// Response is well grounded; proceed to the precision check
    CheckPrecision,
    /// Response needs refinement; loop back through feedback and generation
    RefineResponse,
    /// Iteration budget exhausted; take the fallback exit
    MaxIterations,
}

/// Route out of the precision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionRoute {
    /// Response is precise enough; terminal success
    Pass,
    /// Query needs refinement; loop back through feedback and expansion
    RefineQuery,
    /// Iteration budget exhausted; take the fallback exit
    MaxIterations,
}

/// Routing predicate for the groundedness loop
#[derive(Debug, Clone)]
pub struct GroundednessRouter {
    threshold: f64,
}

impl GroundednessRouter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Decide the next node from the score and the loop counter.
    ///
    /// Pure function of its arguments; no state access, no side effects.
    pub fn route(&self, score: f64, loop_count: u32, loop_max_iter: u32) -> GroundednessRoute {
        if score >= self.threshold {
            GroundednessRoute::CheckPrecision
        } else if loop_count > loop_max_iter {
            GroundednessRoute::MaxIterations
        } else {
            GroundednessRoute::RefineResponse
        }
    }
}

impl Default for GroundednessRouter {
    fn default() -> Self {
        Self::new(8.0)
    }
}

/// Routing predicate for the precision loop
///
/// Carries its own ceiling, configured independently of the groundedness
/// loop's `loop_max_iter`.
#[derive(Debug, Clone)]
pub struct PrecisionRouter {
    threshold: f64,
    max_loops: u32,
}

impl PrecisionRouter {
    pub fn new(threshold: f64, max_loops: u32) -> Self {
        Self {
            threshold,
            max_loops,
        }
    }

    /// Decide the next node from the score and the loop counter.
    pub fn route(&self, score: f64, loop_count: u32) -> PrecisionRoute {
        if score >= self.threshold {
            PrecisionRoute::Pass
        } else if loop_count > self.max_loops {
            PrecisionRoute::MaxIterations
        } else {
            PrecisionRoute::RefineQuery
        }
    }
}

impl Default for PrecisionRouter {
    fn default() -> Self {
        Self::new(8.0, 3)
    }
}
