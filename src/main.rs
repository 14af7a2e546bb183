// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod config;
mod joke_api;
mod state;
mod storage;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;
use crate::joke_api::JokeClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI runs stay quiet unless RUST_LOG asks otherwise
    let default_filter = if cli.command.is_some() {
        "jokebox=warn"
    } else {
        "jokebox=debug,info"
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(command) = cli.command {
        return cli::run(command, &cli.output).await;
    }

    tracing::info!("Starting Jokebox");

    let config = Config::load().unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    });
    let client = JokeClient::new(&config.api.base_url)?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([420.0, 480.0])
        .with_title("Jokebox");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Jokebox",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::JokeApp::new(cc, &config, client)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
