//! Scored personality profile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Five trait scores on the 1-7 scale, rounded to two decimals.
///
/// Produced once at onboarding by
/// [`compute_personality_profile`](crate::scoring::compute_personality_profile)
/// and stored alongside the learner's preferences. Re-scoring means
/// submitting the whole questionnaire again and replacing the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub conscientiousness: f64,
    pub emotional_stability: f64,
    pub self_efficacy: f64,
    pub mastery_orientation: f64,
    pub performance_orientation: f64,
}

impl PersonalityProfile {
    /// Scores paired with their trait, in narrative order.
    pub fn traits(&self) -> [(ProfileField, f64); 5] {
        [
            (ProfileField::Conscientiousness, self.conscientiousness),
            (ProfileField::EmotionalStability, self.emotional_stability),
            (ProfileField::SelfEfficacy, self.self_efficacy),
            (ProfileField::MasteryOrientation, self.mastery_orientation),
            (
                ProfileField::PerformanceOrientation,
                self.performance_orientation,
            ),
        ]
    }

    /// Look up a single trait score.
    pub fn score(&self, field: ProfileField) -> f64 {
        match field {
            ProfileField::Conscientiousness => self.conscientiousness,
            ProfileField::EmotionalStability => self.emotional_stability,
            ProfileField::SelfEfficacy => self.self_efficacy,
            ProfileField::MasteryOrientation => self.mastery_orientation,
            ProfileField::PerformanceOrientation => self.performance_orientation,
        }
    }
}

/// The five traits of a [`PersonalityProfile`].
///
/// Declaration order is the validation order used when scoring and the
/// sentence order used when rendering a narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Conscientiousness,
    EmotionalStability,
    SelfEfficacy,
    MasteryOrientation,
    PerformanceOrientation,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Conscientiousness => "conscientiousness",
            ProfileField::EmotionalStability => "emotional stability",
            ProfileField::SelfEfficacy => "self-efficacy",
            ProfileField::MasteryOrientation => "mastery",
            ProfileField::PerformanceOrientation => "performance",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
