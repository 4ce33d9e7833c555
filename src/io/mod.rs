pub mod document;
pub mod output;
pub mod writers;

pub use document::{DocumentFormat, SessionDocument};
pub use output::{create_writer, OutputFormat, OutputWriter, ResultsView};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
