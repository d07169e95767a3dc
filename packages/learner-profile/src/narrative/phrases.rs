//! Editorial sentences used by the narrative builder.
//!
//! Wording is tuned for embedding similarity against course descriptions,
//! so keep it first-person and concrete.

use crate::types::config::NarrativeConfig;
use crate::types::profile::ProfileField;

/// Where a trait score falls relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitBand {
    Low,
    Balanced,
    High,
}

impl TraitBand {
    /// Classify a score. The balanced band is continuous (`3 < s < 5` by
    /// default), so averaged scores like 4.43 fall into it too.
    pub fn classify(score: f64, config: &NarrativeConfig) -> Self {
        if score >= config.high_threshold {
            TraitBand::High
        } else if score <= config.low_threshold {
            TraitBand::Low
        } else {
            TraitBand::Balanced
        }
    }
}

/// Sentence for a trait in a band; `None` for balanced scores.
pub fn trait_sentence(field: ProfileField, band: TraitBand) -> Option<&'static str> {
    let sentence = match (field, band) {
        (_, TraitBand::Balanced) => return None,

        (ProfileField::Conscientiousness, TraitBand::Low) => {
            "I prefer flexible, spontaneous exploration over rigid plans."
        }
        (ProfileField::Conscientiousness, TraitBand::High) => {
            "I am highly disciplined, organized, and prefer structured, step-by-step learning paths."
        }

        (ProfileField::EmotionalStability, TraitBand::Low) => {
            "I can feel anxious or overwhelmed by difficult material, so I appreciate a supportive and encouraging pace."
        }
        (ProfileField::EmotionalStability, TraitBand::High) => {
            "I stay calm under pressure and handle challenging material with composure."
        }

        (ProfileField::SelfEfficacy, TraitBand::Low) => {
            "I am not always confident in my abilities and benefit from foundational explanations and reassurance."
        }
        (ProfileField::SelfEfficacy, TraitBand::High) => {
            "I am confident in my ability to master complex topics and enjoy being challenged."
        }

        (ProfileField::MasteryOrientation, TraitBand::Low) => {
            "I care more about practical results than about deeply understanding the theory."
        }
        (ProfileField::MasteryOrientation, TraitBand::High) => {
            "I am driven by a genuine desire to deeply understand and master the subject."
        }

        (ProfileField::PerformanceOrientation, TraitBand::Low) => {
            "I am not motivated by grades, rankings, or comparing myself with others."
        }
        (ProfileField::PerformanceOrientation, TraitBand::High) => {
            "I am motivated by measurable achievements, benchmarks, and demonstrating my competence."
        }
    };

    Some(sentence)
}

/// Daily study budget buckets.
///
/// There is no bucket for 31-59 minutes; such budgets render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBudget {
    VeryLimited,
    Concise,
    DeepDive,
}

impl TimeBudget {
    pub fn from_minutes(minutes: i64) -> Option<Self> {
        if minutes <= 15 {
            Some(TimeBudget::VeryLimited)
        } else if minutes <= 30 {
            Some(TimeBudget::Concise)
        } else if minutes >= 60 {
            Some(TimeBudget::DeepDive)
        } else {
            None
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            TimeBudget::VeryLimited => {
                "I have very limited time, so I need short, bite-sized lessons I can finish in a few minutes."
            }
            TimeBudget::Concise => {
                "I prefer concise learning sessions that get to the point within half an hour."
            }
            TimeBudget::DeepDive => {
                "I have time for deep-dive sessions and enjoy comprehensive, in-depth material."
            }
        }
    }
}
