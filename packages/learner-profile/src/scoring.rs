//! Psychometric scale scoring.
//!
//! Converts 1-7 Likert questionnaire answers into trait scores. Negatively
//! worded items are inverted (`8 - x`) so every item points the same way,
//! then the items are averaged and rounded to two decimals.
//!
//! All functions are pure. Invalid input is a caller error and comes back
//! as a [`ScoringError`]; nothing here clamps or guesses.

use std::fmt;

use tracing::debug;

use crate::error::{Result, ScoringError};
use crate::types::profile::{PersonalityProfile, ProfileField};

/// Lowest Likert answer.
pub const LIKERT_MIN: i32 = 1;

/// Highest Likert answer.
pub const LIKERT_MAX: i32 = 7;

/// Multi-item scales of the onboarding questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitScale {
    /// "I get distracted easily", "I procrastinate frequently" and
    /// "I lose track of time when studying" are the reversed items.
    Conscientiousness,
    EmotionalStability,
    /// All items positively worded.
    SelfEfficacy,
}

impl TraitScale {
    /// Number of items the scale expects.
    pub fn item_count(&self) -> usize {
        match self {
            TraitScale::Conscientiousness => 7,
            TraitScale::EmotionalStability => 7,
            TraitScale::SelfEfficacy => 3,
        }
    }

    /// 1-indexed positions of the reverse-worded items.
    pub fn reversed_items(&self) -> &'static [usize] {
        match self {
            TraitScale::Conscientiousness => &[2, 5, 7],
            TraitScale::EmotionalStability => &[2, 4, 6],
            TraitScale::SelfEfficacy => &[],
        }
    }

    /// Whether the item at `position` (1-indexed) is reverse-worded.
    pub fn is_reversed(&self, position: usize) -> bool {
        self.reversed_items().contains(&position)
    }

    /// Score a full response set for this scale.
    ///
    /// The length check runs before any arithmetic. Reversed items are
    /// inverted through [`reverse_score`]; direct items are range-checked
    /// the same way so a stray 0 or 9 never leaks into an average.
    pub fn score(&self, responses: &[i32]) -> Result<f64> {
        let expected = self.item_count();
        if responses.len() != expected {
            return Err(ScoringError::Length {
                scale: *self,
                expected,
                actual: responses.len(),
            });
        }

        let values = responses
            .iter()
            .enumerate()
            .map(|(index, &response)| -> Result<f64> {
                let aligned = if self.is_reversed(index + 1) {
                    reverse_score(response)?
                } else {
                    check_likert(response)?
                };
                Ok(f64::from(aligned))
            })
            .collect::<Result<Vec<f64>>>()?;

        calculate_average(&values)
    }
}

impl fmt::Display for TraitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TraitScale::Conscientiousness => "conscientiousness",
            TraitScale::EmotionalStability => "emotional stability",
            TraitScale::SelfEfficacy => "self-efficacy",
        };
        f.write_str(name)
    }
}

/// Invert a Likert answer: 1 becomes 7, 7 becomes 1.
pub fn reverse_score(score: i32) -> Result<i32> {
    Ok(LIKERT_MAX + LIKERT_MIN - check_likert(score)?)
}

/// Arithmetic mean rounded to two decimals, half-up.
pub fn calculate_average(scores: &[f64]) -> Result<f64> {
    if scores.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    Ok(round_to_hundredths(mean))
}

pub fn score_conscientiousness(responses: &[i32]) -> Result<f64> {
    TraitScale::Conscientiousness.score(responses)
}

pub fn score_emotional_stability(responses: &[i32]) -> Result<f64> {
    TraitScale::EmotionalStability.score(responses)
}

pub fn score_self_efficacy(responses: &[i32]) -> Result<f64> {
    TraitScale::SelfEfficacy.score(responses)
}

/// True when every value lies in 1..=7. An empty slice is trivially valid.
pub fn validate_scores<T>(scores: &[T]) -> bool
where
    T: Copy + Into<f64>,
{
    scores.iter().all(|&score| in_likert_range(score.into()))
}

/// Score a complete questionnaire submission.
///
/// Inputs are validated in a fixed order (conscientiousness, emotional
/// stability, self-efficacy, mastery, performance) and the first failure is
/// reported. A profile is only returned when all five traits score.
pub fn compute_personality_profile(
    conscientiousness: &[i32],
    emotional_stability: &[i32],
    self_efficacy: &[i32],
    mastery: f64,
    performance: f64,
) -> Result<PersonalityProfile> {
    let checks = [
        (
            ProfileField::Conscientiousness,
            validate_scores(conscientiousness),
        ),
        (
            ProfileField::EmotionalStability,
            validate_scores(emotional_stability),
        ),
        (ProfileField::SelfEfficacy, validate_scores(self_efficacy)),
        (ProfileField::MasteryOrientation, in_likert_range(mastery)),
        (
            ProfileField::PerformanceOrientation,
            in_likert_range(performance),
        ),
    ];

    if let Some(&(field, _)) = checks.iter().find(|(_, valid)| !valid) {
        debug!(%field, "Rejected personality questionnaire");
        return Err(ScoringError::InvalidProfileInput { field });
    }

    let profile = PersonalityProfile {
        conscientiousness: score_conscientiousness(conscientiousness)?,
        emotional_stability: score_emotional_stability(emotional_stability)?,
        self_efficacy: score_self_efficacy(self_efficacy)?,
        mastery_orientation: round_to_hundredths(mastery),
        performance_orientation: round_to_hundredths(performance),
    };

    debug!(
        conscientiousness = profile.conscientiousness,
        emotional_stability = profile.emotional_stability,
        self_efficacy = profile.self_efficacy,
        mastery = profile.mastery_orientation,
        performance = profile.performance_orientation,
        "Computed personality profile"
    );

    Ok(profile)
}

fn check_likert(score: i32) -> Result<i32> {
    if (LIKERT_MIN..=LIKERT_MAX).contains(&score) {
        Ok(score)
    } else {
        Err(ScoringError::InvalidLikert { value: score })
    }
}

fn in_likert_range(value: f64) -> bool {
    (f64::from(LIKERT_MIN)..=f64::from(LIKERT_MAX)).contains(&value)
}

// Scores are always positive, so `round` (half away from zero) is half-up.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
