// Core configuration types
mod core;
mod loader;
mod scoring;

pub use self::core::{OutputConfig, ZonemapConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

pub use scoring::{
    default_max_weight, default_min_weight, default_missing_score, default_weight,
    InsertPolicy, ScoringMode, ScoringPolicy, WeightPolicy, DEFAULT_WEIGHT, MAX_WEIGHT,
    MIN_WEIGHT, NEUTRAL_SCORE, SCORE_MAX, SCORE_MIN,
};

/// Starter config written by `zonemap init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# zonemap configuration

[scoring]
# "normalized" divides each category's weighted sum by its total weight,
# "weighted" uses the raw weighted sum.
mode = "normalized"
# Rating assumed for criteria a person has not been scored on.
missing_score = 5.0

[weights]
# "fixed" gives new criteria default_weight, "equal-split" rebalances the
# whole category equally on every insert.
insert_policy = "fixed"
default_weight = 0.1
min_weight = 0.01
max_weight = 1.0

[output]
default_format = "terminal"
plain = false
"#;
