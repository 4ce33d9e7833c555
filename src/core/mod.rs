pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::ScoringPolicy;
use crate::scoring::{score_entity, Assessment};
use crate::weights::CriteriaSet;
use crate::zones::Zone;

/// The two scoring axes.
///
/// "Hot" criteria describe attraction (higher is better), "crazy" criteria
/// describe instability (lower is better). The engine only aggregates and is
/// agnostic to which direction is desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hot,
    Crazy,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Hot, Category::Crazy];

    /// Lowercase key used in documents and generated ids
    pub fn key(&self) -> &'static str {
        match self {
            Category::Hot => "hot",
            Category::Crazy => "crazy",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Hot => "Hot",
            Category::Crazy => "Crazy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "hot" => Ok(Category::Hot),
            "crazy" => Ok(Category::Crazy),
            other => Err(Error::Configuration(format!(
                "unknown category '{other}' (expected hot or crazy)"
            ))),
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Identifier of a criterion, unique within a session and never reused
    CriterionId
);

opaque_id!(
    /// Identifier of a scored person
    PersonId
);

/// A named, weighted attribute used to score people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    /// Fraction of the category's total influence
    pub weight: f64,
    pub category: Category,
}

/// Raw per-criterion ratings, keyed by criterion id.
pub type ScoreMap = BTreeMap<CriterionId, f64>;

/// A person being rated, together with the derived assessment.
///
/// The assessment fields are private: they are only ever produced by
/// [`Person::rescore`] from the current criteria and raw scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    scores: ScoreMap,
    #[serde(flatten)]
    assessment: Assessment,
}

impl Person {
    pub(crate) fn new(
        id: PersonId,
        name: String,
        scores: ScoreMap,
        criteria: &CriteriaSet,
        policy: &ScoringPolicy,
    ) -> Self {
        let assessment = score_entity(&scores, criteria, policy);
        Self {
            id,
            name,
            scores,
            assessment,
        }
    }

    pub fn scores(&self) -> &ScoreMap {
        &self.scores
    }

    /// The recorded rating for a criterion, if any
    pub fn score(&self, criterion: &CriterionId) -> Option<f64> {
        self.scores.get(criterion).copied()
    }

    pub fn hot_score(&self) -> f64 {
        self.assessment.hot_score
    }

    pub fn crazy_score(&self) -> f64 {
        self.assessment.crazy_score
    }

    pub fn zone(&self) -> Zone {
        self.assessment.zone
    }

    pub(crate) fn set_score(&mut self, criterion: CriterionId, score: f64) {
        self.scores.insert(criterion, score);
    }

    /// Recompute hot/crazy scores and the zone from the current state
    pub(crate) fn rescore(&mut self, criteria: &CriteriaSet, policy: &ScoringPolicy) {
        self.assessment = score_entity(&self.scores, criteria, policy);
    }
}
