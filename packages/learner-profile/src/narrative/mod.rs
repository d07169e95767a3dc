//! Learner profile narratives.
//!
//! Turns a [`LearningPreferences`] record into first-person prose for the
//! embedding service. Each section is emitted only when its source field is
//! present and non-empty, so partial profiles degrade to shorter text and
//! never to an error.
//!
//! Section order:
//!
//! 1. Identity (role)
//! 2. Psychometric traits
//! 3. Goals
//! 4. Challenges
//! 5. Preferred materials
//! 6. Daily time budget
//! 7. Keyword anchors

mod hash;
pub mod phrases;

pub use hash::narrative_hash;
pub use phrases::{TimeBudget, TraitBand};

use tracing::debug;

use crate::types::config::NarrativeConfig;
use crate::types::preferences::LearningPreferences;
use crate::types::profile::PersonalityProfile;

/// Render a narrative with the default configuration.
pub fn construct_user_profile_string(prefs: &LearningPreferences) -> String {
    NarrativeBuilder::default().build(prefs)
}

/// Narrative renderer.
#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    config: NarrativeConfig,
}

impl NarrativeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NarrativeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Build the narrative. Returns an empty string when nothing is usable.
    pub fn build(&self, prefs: &LearningPreferences) -> String {
        let mut fragments: Vec<String> = Vec::new();

        if let Some(role) = non_empty(&prefs.role) {
            fragments.push(format!("I am a {}.", role));
        }

        if let Some(profile) = &prefs.personality_profile {
            let traits = self.describe_traits(profile);
            if !traits.is_empty() {
                fragments.push(traits);
            }
        }

        if let Some(text) = non_empty(&prefs.learning_goal_text) {
            fragments.push(format!("My specific goal is to: {}.", text));
        }
        if let Some(goals) = non_empty_list(&prefs.learning_goals) {
            fragments.push(format!(
                "I am actively looking to acquire knowledge in: {}.",
                goals.join(", ")
            ));
        }

        if let Some(text) = non_empty(&prefs.learning_challenges_text) {
            fragments.push(format!("However, I am currently struggling with: {}.", text));
        }
        if let Some(challenges) = non_empty_list(&prefs.learning_challenges) {
            fragments.push(format!(
                "I face specific technical hurdles with: {}.",
                challenges.join(", ")
            ));
        }

        if let Some(materials) = non_empty_list(&prefs.preferred_materials_ranked) {
            fragments.push(format!(
                "I learn best when the content is presented as: {}.",
                materials.join(", ")
            ));
        }

        if let Some(budget) = prefs.daily_time_minutes.and_then(TimeBudget::from_minutes) {
            fragments.push(budget.sentence().to_string());
        }

        if self.config.include_keywords {
            let keywords = keyword_anchors(prefs);
            if !keywords.is_empty() {
                fragments.push(format!("Keywords: {}.", keywords.join(" ")));
            }
        }

        let narrative = fragments.join(" ").trim().to_string();

        debug!(
            fragments = fragments.len(),
            length = narrative.len(),
            "Built learner profile narrative"
        );

        narrative
    }

    /// One sentence per non-balanced trait, space-joined.
    fn describe_traits(&self, profile: &PersonalityProfile) -> String {
        profile
            .traits()
            .into_iter()
            .filter_map(|(field, score)| {
                phrases::trait_sentence(field, TraitBand::classify(score, &self.config))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn non_empty_list(value: &Option<Vec<String>>) -> Option<&[String]> {
    value.as_deref().filter(|list| !list.is_empty())
}

// Goals first, then challenges, exactly as entered.
fn keyword_anchors(prefs: &LearningPreferences) -> Vec<&str> {
    let goals = prefs.learning_goals.iter().flatten();
    let challenges = prefs.learning_challenges.iter().flatten();

    goals.chain(challenges).map(String::as_str).collect()
}
