use crate::io::{self, SessionDocument};
use crate::templates::find_template;
use anyhow::Result;
use std::path::PathBuf;

pub struct NewConfig {
    pub path: PathBuf,
    pub template: Option<String>,
    pub force: bool,
}

pub fn create_session(config: NewConfig) -> Result<()> {
    if io::file_exists(&config.path) && !config.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config.path.display()
        );
    }

    let document = match config.template.as_deref() {
        Some(name) => SessionDocument::from_template(find_template(name)?),
        None => SessionDocument::default(),
    };
    document.save(&config.path)?;

    match config.template.as_deref() {
        Some(name) => println!("Created {} from template '{}'", config.path.display(), name),
        None => println!("Created empty session {}", config.path.display()),
    }
    Ok(())
}
