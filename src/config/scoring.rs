//! Scoring and weight policy configuration
//!
//! This module contains the engine policies that vary between deployments:
//! - How a category's weighted sum is scaled ([`ScoringMode`])
//! - The rating assumed for criteria a person has not been scored on
//! - How new criteria receive their initial weight ([`InsertPolicy`])
//! - The clamp bounds applied to weight updates

use serde::{Deserialize, Serialize};

/// Neutral rating assumed when a person has no score for a criterion
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Lowest raw rating a criterion accepts
pub const SCORE_MIN: f64 = 0.0;

/// Highest raw rating a criterion accepts
pub const SCORE_MAX: f64 = 10.0;

/// Weight given to a manually added criterion under [`InsertPolicy::Fixed`]
pub const DEFAULT_WEIGHT: f64 = 0.1;

/// Smallest weight a single criterion can be set to
pub const MIN_WEIGHT: f64 = 0.01;

/// Largest weight a single criterion can be set to
pub const MAX_WEIGHT: f64 = 1.0;

/// How the per-category weighted sum is turned into a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Raw `Σ score × weight`; only on the 0-10 scale when weights sum to 1
    Weighted,
    /// `Σ score × weight / Σ weight`; 0 when the total weight is 0
    #[default]
    Normalized,
}

/// Initial weight assignment for newly added criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertPolicy {
    /// New criteria get `default_weight`; existing weights are untouched
    #[default]
    Fixed,
    /// Every criterion in the category is reset to `1 / count`
    EqualSplit,
}

/// Policy for aggregating raw ratings into category scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    #[serde(default)]
    pub mode: ScoringMode,

    /// Rating used when a person has no entry for a criterion (0.0-10.0)
    #[serde(default = "default_missing_score")]
    pub missing_score: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            missing_score: default_missing_score(),
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), String> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&self.missing_score) {
            return Err(format!(
                "missing_score must be between {SCORE_MIN} and {SCORE_MAX}, got {}",
                self.missing_score
            ));
        }
        Ok(())
    }
}

/// Policy for inserting and updating criterion weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPolicy {
    #[serde(default)]
    pub insert_policy: InsertPolicy,

    /// Weight for new criteria under the fixed policy (0.0-1.0)
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    #[serde(default = "default_min_weight")]
    pub min_weight: f64,

    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            insert_policy: InsertPolicy::default(),
            default_weight: default_weight(),
            min_weight: default_min_weight(),
            max_weight: default_max_weight(),
        }
    }
}

impl WeightPolicy {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} must be between 0.0 and 1.0", name))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_weight(self.default_weight, "default_weight")?;
        Self::validate_weight(self.min_weight, "min_weight")?;
        Self::validate_weight(self.max_weight, "max_weight")?;
        if self.min_weight > self.max_weight {
            return Err(format!(
                "min_weight ({}) must not exceed max_weight ({})",
                self.min_weight, self.max_weight
            ));
        }
        Ok(())
    }

    /// Convert a slider percentage into a weight within the clamp bounds.
    ///
    /// NaN clamps to the minimum.
    pub fn clamp_percent(&self, raw_percent: f64) -> f64 {
        let weight = raw_percent / 100.0;
        if weight.is_nan() {
            return self.min_weight;
        }
        weight.clamp(self.min_weight, self.max_weight)
    }
}

pub fn default_missing_score() -> f64 {
    NEUTRAL_SCORE
}

pub fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

pub fn default_min_weight() -> f64 {
    MIN_WEIGHT
}

pub fn default_max_weight() -> f64 {
    MAX_WEIGHT
}
