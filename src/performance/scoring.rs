//! Conversion of categorical scores to numeric weights.

use crate::models::{Score, ScoreLevel};
use std::fmt;

/// A recorded score that has no numeric weight.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The response carries no score at all.
    Missing,
    /// The value is outside the `ScoreLevel` domain.
    Unrecognized(serde_json::Value),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Missing => write!(f, "Score: missing"),
            ScoreError::Unrecognized(raw) => write!(f, "Score: {}", raw),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Numeric weight of a score level.
pub fn score_to_number(level: ScoreLevel) -> f64 {
    match level {
        ScoreLevel::NotFamiliar => 0.0,
        ScoreLevel::Elementary => 0.5,
        ScoreLevel::Intermediate => 1.0,
        ScoreLevel::Advanced => 1.5,
    }
}

/// Converts a recorded score, failing for absent or out-of-domain values.
///
/// Callers substitute `0.0` on error so one bad record does not abort the
/// whole aggregation.
pub fn convert_score(score: Option<&Score>) -> Result<f64, ScoreError> {
    match score {
        Some(Score::Known(level)) => Ok(score_to_number(*level)),
        Some(Score::Unrecognized(raw)) => Err(ScoreError::Unrecognized(raw.clone())),
        None => Err(ScoreError::Missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_weights() {
        assert_eq!(score_to_number(ScoreLevel::NotFamiliar), 0.0);
        assert_eq!(score_to_number(ScoreLevel::Elementary), 0.5);
        assert_eq!(score_to_number(ScoreLevel::Intermediate), 1.0);
        assert_eq!(score_to_number(ScoreLevel::Advanced), 1.5);
    }

    #[test]
    fn test_convert_known_score() {
        assert_eq!(convert_score(Some(&Score::Known(ScoreLevel::Advanced))), Ok(1.5));
    }

    #[test]
    fn test_convert_unrecognized_score() {
        let raw = serde_json::json!("Expert");
        let err = convert_score(Some(&Score::Unrecognized(raw.clone()))).unwrap_err();

        assert_eq!(err, ScoreError::Unrecognized(raw));
        assert_eq!(err.to_string(), "Score: \"Expert\"");
    }

    #[test]
    fn test_convert_missing_score() {
        let err = convert_score(None).unwrap_err();

        assert_eq!(err, ScoreError::Missing);
        assert_eq!(err.to_string(), "Score: missing");
    }
}
