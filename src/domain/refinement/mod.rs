//! Refinement pipeline domain: session state, configuration, node trait
//! seams, and the pure routing predicates.

pub mod config;
pub mod node;
pub mod router;
pub mod state;

pub use config::RefinementConfig;
pub use node::{Evaluator, FeedbackProvider};
pub use router::{GroundednessRoute, GroundednessRouter, PrecisionRoute, PrecisionRouter};
pub use state::SessionState;
