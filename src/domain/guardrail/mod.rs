//! Content safety filtering
//!
//! Gatekeeps entry into the refinement pipeline: a rejected verdict prevents
//! the query from ever reaching query expansion.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Verdict from the content safety filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum SafetyVerdict {
    Safe,
    /// Unsafe, with the hazard category codes reported by the filter
    Unsafe { categories: Vec<String> },
}

impl SafetyVerdict {
    /// Whether the input may enter the pipeline.
    ///
    /// Unsafe verdicts are admitted when every reported category is on the
    /// allow-list (the nutrition domain legitimately discusses self-harm and
    /// specialized-advice categories).
    pub fn is_allowed(&self, allowed_categories: &[String]) -> bool {
        match self {
            Self::Safe => true,
            Self::Unsafe { categories } => {
                !categories.is_empty()
                    && categories.iter().all(|c| allowed_categories.contains(c))
            }
        }
    }

    pub fn categories(&self) -> &[String] {
        match self {
            Self::Safe => &[],
            Self::Unsafe { categories } => categories,
        }
    }
}

/// Trait for content safety classification
#[async_trait]
pub trait ContentSafetyFilter: Send + Sync + Debug {
    /// Classify raw user input
    async fn classify(&self, text: &str) -> Result<SafetyVerdict, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["S6".to_string(), "S7".to_string()]
    }

    #[test]
    fn test_safe_is_allowed() {
        assert!(SafetyVerdict::Safe.is_allowed(&allowed()));
    }

    #[test]
    fn test_allowed_category_passes() {
        let verdict = SafetyVerdict::Unsafe {
            categories: vec!["S6".to_string()],
        };
        assert!(verdict.is_allowed(&allowed()));
    }

    #[test]
    fn test_disallowed_category_rejected() {
        let verdict = SafetyVerdict::Unsafe {
            categories: vec!["S1".to_string()],
        };
        assert!(!verdict.is_allowed(&allowed()));
    }

    #[test]
    fn test_mixed_categories_rejected() {
        let verdict = SafetyVerdict::Unsafe {
            categories: vec!["S6".to_string(), "S1".to_string()],
        };
        assert!(!verdict.is_allowed(&allowed()));
    }

    #[test]
    fn test_unsafe_without_categories_rejected() {
        let verdict = SafetyVerdict::Unsafe { categories: vec![] };
        assert!(!verdict.is_allowed(&allowed()));
    }
}
