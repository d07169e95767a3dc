//! Raw onboarding questionnaire submission.

use serde::{Deserialize, Serialize};

use super::profile::PersonalityProfile;
use crate::error::Result;
use crate::scoring::compute_personality_profile;

/// Answers captured by the onboarding questionnaire, before scoring.
///
/// Likert arrays are kept as plain integers so that out-of-range values
/// coming from the client survive deserialization and are reported by
/// scoring with a proper error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponses {
    pub conscientiousness: Vec<i32>,
    pub emotional_stability: Vec<i32>,
    pub self_efficacy: Vec<i32>,
    pub mastery_orientation: f64,
    pub performance_orientation: f64,
}

impl OnboardingResponses {
    /// Score the submission into a [`PersonalityProfile`].
    pub fn score(&self) -> Result<PersonalityProfile> {
        compute_personality_profile(
            &self.conscientiousness,
            &self.emotional_stability,
            &self.self_efficacy,
            self.mastery_orientation,
            self.performance_orientation,
        )
    }
}
