//! Learner-facing data types.

pub mod config;
pub mod onboarding;
pub mod preferences;
pub mod profile;

pub use config::NarrativeConfig;
pub use onboarding::OnboardingResponses;
pub use preferences::LearningPreferences;
pub use profile::{PersonalityProfile, ProfileField};
