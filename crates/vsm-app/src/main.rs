use std::future::Future;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use vsm_core::Dictionary;
use vsm_dictionary_complex_portal::DictionaryComplexPortal;

pub mod cli;
pub mod logging;
pub mod profile;

use self::cli::{Cli, Command};

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.json_logs);

    let config = profile::load_config(&cli)?;
    let dict = DictionaryComplexPortal::new(&config.complex_portal)
        .context("Failed to create HTTP client")?;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(&dict, cli.command, shutdown).await
}

/// Run one lookup and print its `{items}` payload, unless `shutdown`
/// resolves first
pub async fn run<D: Dictionary>(
    dict: &D,
    command: Command,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    tokio::select! {
        biased;
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        result = lookup(dict, &command) => {
            let (json, count) = result?;
            println!("{json}");
            eprintln!("\n#Results: {count}");
            Ok(())
        }
    }
}

/// Pretty JSON of the lookup result and its item count
pub async fn lookup<D: Dictionary>(dict: &D, command: &Command) -> anyhow::Result<(String, usize)> {
    let options = command.query_options();

    match command {
        Command::DictInfos { .. } => {
            let res = dict.get_dict_infos(&options).await?;
            Ok((serde_json::to_string_pretty(&res)?, res.items.len()))
        }
        Command::Entries { .. } => {
            let res = dict.get_entries(&options).await.context("getEntries failed")?;
            Ok((serde_json::to_string_pretty(&res)?, res.items.len()))
        }
        Command::Match { search, .. } => {
            let res = dict
                .get_entry_matches_for_string(search, &options)
                .await
                .context("getEntryMatchesForString failed")?;
            Ok((serde_json::to_string_pretty(&res)?, res.items.len()))
        }
    }
}
