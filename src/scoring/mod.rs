//! Weighted aggregation of raw ratings into zone map coordinates.
//!
//! Each category reduces to one number: `Σ score × weight` over its
//! criteria, optionally divided by the category's total weight (see
//! [`ScoringMode`]). The hot score becomes x, the crazy score y, and the
//! pair is classified with [`classify_zone`].

use serde::Serialize;

use crate::config::{ScoringMode, ScoringPolicy, SCORE_MAX, SCORE_MIN};
use crate::core::{Category, Criterion, ScoreMap};
use crate::weights::CriteriaSet;
use crate::zones::{classify_zone, Zone};

/// Derived result for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub hot_score: f64,
    pub crazy_score: f64,
    pub zone: Zone,
}

impl Assessment {
    pub fn from_scores(hot_score: f64, crazy_score: f64) -> Self {
        Self {
            hot_score,
            crazy_score,
            zone: classify_zone(hot_score, crazy_score),
        }
    }
}

/// Clamp a raw rating onto the 0-10 scale. NaN becomes the minimum.
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return SCORE_MIN;
    }
    raw.clamp(SCORE_MIN, SCORE_MAX)
}

// Summing weights that only add up to 1.0 in decimal leaves a few ulps of
// error, enough to put a perfect 10 just off the map.
const SCALE_SNAP: f64 = 1e-9;

/// Pull an aggregate that overshoots a scale bound by rounding error back
/// onto the bound. Genuine overshoot is left alone.
fn snap_to_scale(score: f64) -> f64 {
    if (score - SCORE_MAX).abs() <= SCALE_SNAP {
        SCORE_MAX
    } else if (score - SCORE_MIN).abs() <= SCALE_SNAP {
        SCORE_MIN
    } else {
        score
    }
}

/// Aggregate one category.
///
/// Criteria without a recorded rating use `policy.missing_score`. Scores
/// keyed by criteria that are not in `criteria` are ignored.
///
/// A normalized score is a weighted average of 0-10 ratings and is clamped
/// to the scale. A weighted sum is only snapped onto 0 or 10 when it misses
/// by rounding error, so overweight categories still land off the map.
pub fn category_score<'a>(
    scores: &ScoreMap,
    criteria: impl IntoIterator<Item = &'a Criterion>,
    policy: &ScoringPolicy,
) -> f64 {
    let (weighted_sum, total_weight) =
        criteria
            .into_iter()
            .fold((0.0, 0.0), |(sum, total), criterion| {
                let score = scores
                    .get(&criterion.id)
                    .copied()
                    .unwrap_or(policy.missing_score);
                (sum + score * criterion.weight, total + criterion.weight)
            });

    match policy.mode {
        ScoringMode::Weighted => snap_to_scale(weighted_sum),
        ScoringMode::Normalized if total_weight == 0.0 => 0.0,
        ScoringMode::Normalized => clamp_score(snap_to_scale(weighted_sum / total_weight)),
    }
}

/// Score a person against the full criteria set
pub fn score_entity(
    scores: &ScoreMap,
    criteria: &CriteriaSet,
    policy: &ScoringPolicy,
) -> Assessment {
    let hot = category_score(scores, criteria.criteria(Category::Hot), policy);
    let crazy = category_score(scores, criteria.criteria(Category::Crazy), policy);
    Assessment::from_scores(hot, crazy)
}
