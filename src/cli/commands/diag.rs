//! Diagnostic commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted};
use crate::config::Config;
use crate::joke_api::JokeClient;
use crate::storage::SqliteStore;

#[derive(Subcommand, Debug)]
pub enum DiagCommands {
    /// Show config file, database and API endpoint
    Paths,
}

#[derive(Serialize)]
struct PathsResult {
    config_file: String,
    database: String,
    endpoint: String,
}

pub async fn run(command: DiagCommands, format: OutputFormat, _quiet: bool) -> Result<()> {
    match command {
        DiagCommands::Paths => paths(format),
    }
}

fn paths(format: OutputFormat) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    let endpoint = JokeClient::new(&config.api.base_url)
        .map(|client| client.endpoint())
        .unwrap_or_else(|_| "<error>".to_string());

    let result = PathsResult {
        config_file: Config::config_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| "<error>".to_string()),
        database: SqliteStore::db_path()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|_| "<error>".to_string()),
        endpoint,
    };

    print_formatted(&result, format, |r| {
        format!(
            "Config:   {}\nDatabase: {}\nEndpoint: {}",
            r.config_file, r.database, r.endpoint
        )
    });

    Ok(())
}
