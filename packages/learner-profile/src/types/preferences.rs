//! Learner preference record fed to the narrative builder.

use serde::{Deserialize, Serialize};

use super::profile::PersonalityProfile;

/// Everything a learner told us during onboarding.
///
/// Every field is optional: stored documents are frequently partial and the
/// narrative builder simply skips whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_profile: Option<PersonalityProfile>,

    /// Free-text goal ("pass the AWS associate exam")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_goal_text: Option<String>,

    /// Goal topics picked from a list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_challenges_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_challenges: Option<Vec<String>>,

    /// Material formats, most preferred first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_materials_ranked: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_time_minutes: Option<i64>,
}

impl LearningPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy carrying a freshly scored profile.
    pub fn with_personality_profile(mut self, profile: PersonalityProfile) -> Self {
        self.personality_profile = Some(profile);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_goal_text(mut self, text: impl Into<String>) -> Self {
        self.learning_goal_text = Some(text.into());
        self
    }

    pub fn with_goals(mut self, goals: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.learning_goals = Some(goals.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_challenges_text(mut self, text: impl Into<String>) -> Self {
        self.learning_challenges_text = Some(text.into());
        self
    }

    pub fn with_challenges(
        mut self,
        challenges: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.learning_challenges = Some(challenges.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_preferred_materials(
        mut self,
        materials: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.preferred_materials_ranked = Some(materials.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_daily_time_minutes(mut self, minutes: i64) -> Self {
        self.daily_time_minutes = Some(minutes);
        self
    }
}
