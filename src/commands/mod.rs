//! CLI command implementations.
//!
//! Available commands:
//! - **init**: write a starter `.zonemap.toml`
//! - **templates**: list the built-in criteria templates
//! - **new**: write a session document, optionally seeded from a template
//! - **score**: score a session document and render the results
//! - **classify**: place a single (hot, crazy) point on the zone map
//! - **normalize**: rescale a document's weights so each category sums to 100%

pub mod classify;
pub mod init;
pub mod new;
pub mod normalize;
pub mod score;
pub mod templates;

pub use classify::classify_point;
pub use init::init_config;
pub use new::{create_session, NewConfig};
pub use normalize::normalize_document;
pub use score::{score_session, ScoreConfig};
pub use templates::list_templates;
