use crate::cli;
use crate::config::{load_config, load_config_from, ZonemapConfig};
use crate::formatting::FormattingConfig;
use crate::io::{create_writer, OutputFormat, ResultsView, SessionDocument};
use crate::session::Session;
use crate::zones::Zone;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct ScoreConfig {
    pub session: PathBuf,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub normalize: bool,
    pub compare: Option<Vec<String>>,
    pub zone: Option<String>,
    pub plain: bool,
}

pub fn score_session(config: ScoreConfig) -> Result<()> {
    let settings = load_settings(&config)?;
    let session = load_session(&config, &settings)?;

    let zone = config
        .zone
        .as_deref()
        .map(str::parse::<Zone>)
        .transpose()?;
    let format = determine_output_format(&config, &settings);
    let formatting = determine_formatting(&config, &settings, format);

    let mut view = ResultsView::new(&session);
    if let Some(zone) = zone {
        view = view.only_zone(zone);
    }
    if let Some(keys) = config.compare.as_deref() {
        view = view.compare(&session, keys)?;
    }

    let out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };
    create_writer(format, out, formatting).write_results(&view)?;

    if let Some(path) = &config.output {
        log::info!("Results written to {}", path.display());
    }
    Ok(())
}

fn load_settings(config: &ScoreConfig) -> Result<ZonemapConfig> {
    match &config.config {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

/// Load, optionally normalize, and check that both categories are usable
fn load_session(config: &ScoreConfig, settings: &ZonemapConfig) -> Result<Session> {
    let mut session = SessionDocument::load(&config.session)?
        .into_session(settings)
        .with_context(|| format!("Failed to load {}", config.session.display()))?;

    if config.normalize {
        session.normalize_all();
    }
    session
        .validate_weights()
        .with_context(|| format!("Cannot score {}", config.session.display()))?;

    if session.people().is_empty() {
        log::warn!("{} has nobody to score", config.session.display());
    }
    Ok(session)
}

fn determine_output_format(config: &ScoreConfig, settings: &ZonemapConfig) -> OutputFormat {
    if let Some(format) = config.format {
        return format.into();
    }
    match settings
        .output()
        .default_format
        .as_deref()
        .map(str::parse::<OutputFormat>)
    {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            log::warn!("{e}. Falling back to terminal output.");
            OutputFormat::Terminal
        }
        None => OutputFormat::Terminal,
    }
}

fn determine_formatting(
    config: &ScoreConfig,
    settings: &ZonemapConfig,
    format: OutputFormat,
) -> FormattingConfig {
    let to_file = format == OutputFormat::Terminal && config.output.is_some();
    if config.plain || settings.output().plain || to_file {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
