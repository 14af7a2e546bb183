//! CLI module
//!
//! Exposes the joke card operations for scripting. Without a subcommand the
//! binary opens the window instead.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Jokebox - random jokes with favorites
#[derive(Parser, Debug)]
#[command(name = "jokebox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print a random joke
    Fetch {
        /// Also add the joke to favorites
        #[arg(long)]
        like: bool,
    },

    /// Favorites management
    Favorites {
        #[command(subcommand)]
        command: commands::favorites::FavoritesCommands,
    },

    /// Theme preference
    Theme {
        #[command(subcommand)]
        command: commands::theme::ThemeCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },

    /// Diagnostics and debugging
    Diag {
        #[command(subcommand)]
        command: commands::diag::DiagCommands,
    },
}

/// Run a CLI subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Fetch { like } => commands::fetch::run(like, format, quiet).await,
        Commands::Favorites { command } => commands::favorites::run(command, format, quiet).await,
        Commands::Theme { command } => commands::theme::run(command, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
        Commands::Diag { command } => commands::diag::run(command, format, quiet).await,
    }
}
