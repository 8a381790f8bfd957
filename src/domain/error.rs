use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Score parse error: could not read a score in [0, 10] from {raw:?}")]
    ScoreParse { raw: String },

    #[error("Missing state field: {field} (node executed before its predecessor)")]
    MissingState { field: &'static str },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Guardrail error: {message}")]
    Guardrail { message: String },

    #[error("Memory error: {message}")]
    Memory { message: String },
}

impl DomainError {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn score_parse(raw: impl Into<String>) -> Self {
        Self::ScoreParse { raw: raw.into() }
    }

    pub fn missing_state(field: &'static str) -> Self {
        Self::MissingState { field }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn guardrail(message: impl Into<String>) -> Self {
        Self::Guardrail {
            message: message.into(),
        }
    }

    pub fn memory(message: impl Into<String>) -> Self {
        Self::Memory {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("openai", "rate limited");
        assert_eq!(error.to_string(), "Provider error: openai - rate limited");
    }

    #[test]
    fn test_score_parse_error() {
        let error = DomainError::score_parse("not a number");
        assert!(error.to_string().contains("not a number"));
    }

    #[test]
    fn test_missing_state_error() {
        let error = DomainError::missing_state("expanded_query");
        assert!(error.to_string().contains("expanded_query"));
    }
}
