//! Typed errors for trait scoring.
//!
//! Narrative building is total and has no error type of its own.

use thiserror::Error;

use crate::scoring::TraitScale;
use crate::types::profile::ProfileField;

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Errors raised while turning questionnaire responses into trait scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A single Likert value fell outside 1..=7
    #[error("invalid Likert value: {value} (expected 1-7)")]
    InvalidLikert { value: i32 },

    /// A response set had the wrong number of items for its scale
    #[error("{scale} expects {expected} responses, got {actual}")]
    Length {
        scale: TraitScale,
        expected: usize,
        actual: usize,
    },

    /// Average requested over zero elements
    #[error("cannot average empty input")]
    EmptyInput,

    /// One of the profile inputs failed range validation
    #[error("invalid {field} input: every value must be between 1 and 7")]
    InvalidProfileInput { field: ProfileField },
}
