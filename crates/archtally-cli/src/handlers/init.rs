use crate::config::{Config, FALLBACK_LAYER};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

pub fn handle(config_path: &Path, paths: Vec<PathBuf>, force: bool) -> Result<()> {
    if paths.is_empty() {
        bail!("init needs at least one path to target");
    }
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut targets = Vec::new();
    for path in &paths {
        if path.exists() {
            targets.push(path.display().to_string());
        } else {
            eprintln!("warning: skipping missing path {}", path.display());
        }
    }
    if targets.is_empty() {
        bail!("none of the given paths exist");
    }

    let config = Config::starter(targets);
    config.save_to(config_path)?;

    println!("OK: wrote {}", config_path.display());
    println!(
        "Edit [topology] to split the '{}' layer into real layers and edges.",
        FALLBACK_LAYER
    );
    Ok(())
}
