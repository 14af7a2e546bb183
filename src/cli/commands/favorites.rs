//! Favorites management commands

use anyhow::Result;
use clap::Subcommand;

use super::open_store;
use crate::cli::output::{OutputFormat, format_joke_line, print_formatted, print_success};
use crate::state::FavoritesStore;

#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List saved jokes
    List,

    /// Remove one saved joke
    Remove {
        /// Joke ID
        id: u64,
    },

    /// Remove every saved joke
    Clear,
}

pub async fn run(command: FavoritesCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut favorites = FavoritesStore::load(open_store()?);

    match command {
        FavoritesCommands::List => {
            print_formatted(favorites.jokes(), format, |jokes| {
                if jokes.is_empty() {
                    "No favorites saved".to_string()
                } else {
                    jokes
                        .iter()
                        .map(format_joke_line)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            });
        }
        FavoritesCommands::Remove { id } => {
            if !favorites.try_remove(id)? {
                anyhow::bail!("Joke #{} is not a favorite", id);
            }
            print_success(&format!("Removed joke #{}", id), quiet);
        }
        FavoritesCommands::Clear => {
            let count = favorites.len();
            favorites.try_clear_favorites()?;
            print_success(&format!("Cleared {} favorite(s)", count), quiet);
        }
    }

    Ok(())
}
