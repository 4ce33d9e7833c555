use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;
use std::str::FromStr;

use crate::core::{Criterion, Error, Person, Result};
use crate::formatting::FormattingConfig;
use crate::io::writers::{CsvWriter, JsonWriter, ReportWriter, TerminalWriter};
use crate::session::{Insights, Session};
use crate::zones::Zone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
    Report,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "report" | "text" => Ok(Self::Report),
            other => Err(Error::Configuration(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &ResultsView) -> anyhow::Result<()>;
}

/// Everything the results step shows, borrowed from a scored session.
///
/// `people` may be narrowed to one zone; `insights` always cover the whole
/// session.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView<'a> {
    pub criteria: Vec<&'a Criterion>,
    pub people: Vec<&'a Person>,
    pub insights: Insights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_filter: Option<Zone>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comparison: Vec<&'a Person>,
}

impl<'a> ResultsView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            criteria: session.criteria().iter().collect(),
            people: session.people().iter().collect(),
            insights: session.insights(),
            zone_filter: None,
            comparison: Vec::new(),
        }
    }

    pub fn only_zone(mut self, zone: Zone) -> Self {
        self.people.retain(|p| p.zone() == zone);
        self.zone_filter = Some(zone);
        self
    }

    /// Attach a side-by-side comparison of the named people
    pub fn compare<S: AsRef<str>>(mut self, session: &'a Session, keys: &[S]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut picked = session.compare(keys)?;
        picked.retain(|p| seen.insert(p.id.clone()));
        if picked.len() < 2 {
            return Err(Error::NotEnoughToCompare(picked.len()));
        }
        self.comparison = picked;
        Ok(self)
    }
}

pub fn create_writer(
    format: OutputFormat,
    out: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Csv => Box::new(CsvWriter::new(out)),
        OutputFormat::Report => Box::new(ReportWriter::new(out)),
    }
}
