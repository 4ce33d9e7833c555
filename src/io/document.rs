//! Session documents: the on-disk form of criteria, people and ratings.
//!
//! TOML is the default; a `.json` extension selects JSON. Ratings may be
//! keyed by criterion id or by criterion name.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::ZonemapConfig;
use crate::core::{Category, CriterionId, Error, Result, ScoreMap};
use crate::session::Session;
use crate::templates::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Toml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub weight: f64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub scores: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionDocument {
    #[serde(default)]
    pub criteria: Vec<CriterionEntry>,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
}

impl SessionDocument {
    pub fn parse(contents: &str, format: DocumentFormat) -> std::result::Result<Self, String> {
        match format {
            DocumentFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
        let document = Self::parse(&contents, DocumentFormat::from_path(path))
            .map_err(|message| Error::document(path, message))?;
        log::debug!(
            "Loaded {} criteria and {} people from {}",
            document.criteria.len(),
            document.people.len(),
            path.display()
        );
        Ok(document)
    }

    pub fn render(&self, format: DocumentFormat) -> anyhow::Result<String> {
        match format {
            DocumentFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize session as TOML")
            }
            DocumentFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize session as JSON")
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = self.render(DocumentFormat::from_path(path))?;
        crate::io::write_file(path, &contents)
    }

    /// A document holding a template's criteria and nobody to rate yet
    pub fn from_template(template: &Template) -> Self {
        let mut session = Session::default();
        session.apply_template(template);
        Self::from_session(&session)
    }

    /// Snapshot a session. Ratings are keyed by criterion id.
    pub fn from_session(session: &Session) -> Self {
        let criteria = session
            .criteria()
            .iter()
            .map(|c| CriterionEntry {
                id: Some(c.id.to_string()),
                name: c.name.clone(),
                weight: c.weight,
                category: c.category,
            })
            .collect();
        let people = session
            .people()
            .iter()
            .map(|p| PersonEntry {
                name: p.name.clone(),
                scores: p
                    .scores()
                    .iter()
                    .map(|(id, score)| (id.to_string(), *score))
                    .collect(),
            })
            .collect();
        Self { criteria, people }
    }

    /// Build a live session. Every person is scored as they are added.
    ///
    /// Explicit criterion ids are reserved up front so an id generated for
    /// an earlier entry cannot take one claimed further down.
    pub fn into_session(self, config: &ZonemapConfig) -> Result<Session> {
        let mut session = Session::from_config(config);
        for id in self.criteria.iter().filter_map(|entry| entry.id.as_deref()) {
            session.reserve_criterion_id(CriterionId::new(id));
        }
        for entry in self.criteria {
            session.insert_criterion(
                entry.id.map(CriterionId::new),
                &entry.name,
                entry.weight,
                entry.category,
            )?;
        }
        for entry in self.people {
            let scores = resolve_scores(&session, &entry)?;
            session.add_person_with_scores(&entry.name, scores)?;
        }
        Ok(session)
    }
}

/// Map rating keys onto criterion ids. A criterion rated under two keys
/// (its id and its name) is rejected rather than letting one silently win.
fn resolve_scores(session: &Session, entry: &PersonEntry) -> Result<ScoreMap> {
    let criteria = session.criteria();
    let mut scores = ScoreMap::new();
    let mut keys: BTreeMap<CriterionId, &str> = BTreeMap::new();
    for (key, score) in &entry.scores {
        if !score.is_finite() {
            return Err(Error::InvalidPerson(format!(
                "{}: rating for '{}' is not a number",
                entry.name, key
            )));
        }
        let known = criteria
            .get(&CriterionId::new(key.as_str()))
            .or_else(|| criteria.find_by_name(key));
        let id = match known {
            Some(criterion) => {
                if let Some(previous) = keys.insert(criterion.id.clone(), key.as_str()) {
                    return Err(Error::InvalidPerson(format!(
                        "{}: '{}' is rated twice (as '{}' and '{}')",
                        entry.name, criterion.name, previous, key
                    )));
                }
                criterion.id.clone()
            }
            None => {
                log::warn!(
                    "{} has a rating for unknown criterion '{}'; it will be ignored",
                    entry.name,
                    key
                );
                CriterionId::new(key.as_str())
            }
        };
        scores.insert(id, *score);
    }
    Ok(scores)
}
