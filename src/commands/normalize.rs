use crate::config::ZonemapConfig;
use crate::core::Category;
use crate::io::SessionDocument;
use anyhow::{Context, Result};
use std::path::Path;

/// Rescale each category's weights to sum to 100% and write the document
/// back (to `output` when given). Categories with zero total weight are
/// left alone.
pub fn normalize_document(
    session_path: &Path,
    output: Option<&Path>,
    config: &ZonemapConfig,
) -> Result<()> {
    let mut session = SessionDocument::load(session_path)?
        .into_session(config)
        .with_context(|| format!("Failed to load {}", session_path.display()))?;

    for category in Category::ALL {
        let before = session.criteria().total_weight(category);
        if session.normalize(category) {
            println!(
                "{category}: {:.0}% -> {:.0}%",
                before * 100.0,
                session.criteria().total_weight(category) * 100.0
            );
        } else {
            log::info!("{category} criteria left unchanged");
        }
    }

    let target = output.unwrap_or(session_path);
    SessionDocument::from_session(&session).save(target)?;
    println!("Wrote {}", target.display());
    Ok(())
}
