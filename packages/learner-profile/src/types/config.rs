//! Configuration for narrative rendering.

use serde::{Deserialize, Serialize};

/// Knobs for [`NarrativeBuilder`](crate::narrative::NarrativeBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Trait scores at or above this render the "high" sentence.
    ///
    /// Default: 5.0.
    pub high_threshold: f64,

    /// Trait scores at or below this render the "low" sentence.
    ///
    /// Anything strictly between the two thresholds is treated as
    /// balanced and left out. Default: 3.0.
    pub low_threshold: f64,

    /// Append the raw `Keywords:` anchor built from goals and challenges.
    ///
    /// Default: true.
    pub include_keywords: bool,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            high_threshold: 5.0,
            low_threshold: 3.0,
            include_keywords: true,
        }
    }
}

impl NarrativeConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both band thresholds.
    pub fn with_thresholds(mut self, low: f64, high: f64) -> Self {
        self.low_threshold = low;
        self.high_threshold = high;
        self
    }

    /// Toggle the keyword anchor section.
    pub fn with_keywords(mut self, include: bool) -> Self {
        self.include_keywords = include;
        self
    }
}
