use serde::{Deserialize, Serialize};

use super::scoring::{ScoringPolicy, WeightPolicy};

/// Root configuration structure for zonemap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ZonemapConfig {
    /// Score aggregation policy
    #[serde(default)]
    pub scoring: Option<ScoringPolicy>,

    /// Criterion weight policy
    #[serde(default)]
    pub weights: Option<WeightPolicy>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ZonemapConfig {
    pub fn scoring_policy(&self) -> ScoringPolicy {
        self.scoring.unwrap_or_default()
    }

    pub fn weight_policy(&self) -> WeightPolicy {
        self.weights.unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format used by `score` when `--format` is not given
    pub default_format: Option<String>,

    /// Disable colors and decorations
    #[serde(default)]
    pub plain: bool,
}
