//! Weighted hot/crazy scoring and zone map classification.
//!
//! People are rated 0-10 on two categories of weighted criteria. Each
//! category collapses to one score, and the (hot, crazy) pair is placed on
//! a fixed map of six zones.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod scoring;
pub mod session;
pub mod templates;
pub mod weights;
pub mod wizard;
pub mod zones;

pub use crate::core::{
    Category, Criterion, CriterionId, Error, Person, PersonId, Result, ScoreMap,
};

pub use crate::config::{
    load_config, InsertPolicy, ScoringMode, ScoringPolicy, WeightPolicy, ZonemapConfig,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, ResultsView};
pub use crate::io::SessionDocument;

pub use crate::scoring::{category_score, clamp_score, score_entity, Assessment};
pub use crate::session::{Insights, Session};
pub use crate::templates::{find_template, Template, TEMPLATES};
pub use crate::weights::{is_valid_sum, CriteriaSet};
pub use crate::wizard::Step;
pub use crate::zones::{classify_zone, zone_distribution, Zone, ZoneRegion, ZONE_REGIONS};
