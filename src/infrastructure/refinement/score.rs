//! Numeric score extraction from evaluator model output.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::DomainError;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+(\.\d+)?").unwrap());

/// Parse an evaluator verdict into a score in `[0, 10]`.
///
/// The evaluator prompts demand a bare number, but models occasionally wrap
/// it in prose ("Score: 8.5"). We first try a direct parse of the trimmed
/// text, then fall back to the first numeric token. Output that contains no
/// number, or a number outside the scale, is a [`DomainError::ScoreParse`];
/// callers must surface it rather than substitute a default.
pub fn parse_score(raw: &str) -> Result<f64, DomainError> {
    let trimmed = raw.trim();

    let value = match trimmed.parse::<f64>() {
        Ok(v) => v,
        Err(_) => NUMBER_RE
            .find(trimmed)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .ok_or_else(|| DomainError::score_parse(raw))?,
    };

    if !(0.0..=10.0).contains(&value) {
        return Err(DomainError::score_parse(raw));
    }

    Ok(value)
}
