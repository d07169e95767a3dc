//! Learner Profile Library
//!
//! Scores the onboarding personality questionnaire and renders a learner's
//! preferences as first-person prose for semantic matching.
//!
//! # Usage
//!
//! ```rust,ignore
//! use learner_profile::{construct_user_profile_string, LearningPreferences, OnboardingResponses};
//!
//! let responses: OnboardingResponses = serde_json::from_str(submission)?;
//! let profile = responses.score()?;
//!
//! let prefs = stored_preferences.with_personality_profile(profile);
//! let narrative = construct_user_profile_string(&prefs);
//! // hand `narrative` to the embedding service
//! ```
//!
//! # Modules
//!
//! - [`scoring`] - Likert scale scoring (reverse items, averaging, validation)
//! - [`narrative`] - Preference record to narrative text
//! - [`types`] - Profile, preference, questionnaire and config types
//! - [`error`] - Scoring errors
//!
//! Everything here is pure and synchronous; callers may share it freely
//! across request handlers.

pub mod error;
pub mod narrative;
pub mod scoring;
pub mod types;

pub use error::{Result, ScoringError};
pub use narrative::{
    construct_user_profile_string, narrative_hash, NarrativeBuilder, TimeBudget, TraitBand,
};
pub use scoring::{
    calculate_average, compute_personality_profile, reverse_score, score_conscientiousness,
    score_emotional_stability, score_self_efficacy, validate_scores, TraitScale,
};
pub use types::{
    LearningPreferences, NarrativeConfig, OnboardingResponses, PersonalityProfile, ProfileField,
};
