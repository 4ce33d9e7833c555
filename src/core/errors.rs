//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use super::Category;
use crate::wizard::Step;

/// Main error type for zonemap operations
///
/// The scoring engine itself never fails; these errors come from the
/// collaborators around it (documents, config, wizard gating).
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Session document could not be parsed
    #[error("Failed to parse session document {}: {message}", path.display())]
    Document { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A category has no criteria where at least one is required
    #[error("No {category} criteria defined")]
    NoCriteria { category: Category },

    /// A category's weights do not sum to 100%
    #[error("{category} criteria weights must sum to 100% (currently {:.0}%)", total * 100.0)]
    InvalidWeights { category: Category, total: f64 },

    /// The wizard cannot leave the people step without anyone to score
    #[error("Add at least one person before viewing results")]
    NoPeople,

    /// The wizard has no step after the current one
    #[error("No step follows {0}")]
    NoNextStep(Step),

    /// Invalid criterion definition
    #[error("Invalid criterion '{name}': {reason}")]
    InvalidCriterion { name: String, reason: String },

    /// Duplicate criterion id in a document
    #[error("Duplicate criterion id '{0}'")]
    DuplicateCriterion(String),

    /// Reference to a criterion that does not exist
    #[error("Unknown criterion '{0}'")]
    UnknownCriterion(String),

    /// Reference to a person that does not exist
    #[error("Unknown person '{0}'")]
    UnknownPerson(String),

    /// Invalid person definition
    #[error("Invalid person: {0}")]
    InvalidPerson(String),

    /// Comparison mode needs at least two people
    #[error("Select at least two people to compare (got {0})")]
    NotEnoughToCompare(usize),

    /// Template lookup failure
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Zone lookup failure
    #[error("Unknown zone '{0}'")]
    UnknownZone(String),
}

impl Error {
    /// Wrap an I/O failure with the path it happened on
    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("{} ({})", source, path.display()),
            path: Some(path),
            source: Some(source),
        }
    }

    /// Create a document parse error
    pub fn document(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Document {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_criterion(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCriterion {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
