use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use vsm_config::Config;

use crate::cli::Cli;

/// Load a config file; fields it leaves out take their defaults
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Config file (or defaults), then environment, then command-line flags
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?.with_env_overrides(),
        None => Config::new(),
    };

    if let Some(base_url) = &cli.base_url {
        config.complex_portal.base_url = base_url.clone();
    }
    if cli.log {
        config.complex_portal.log = true;
    }

    Ok(config)
}
