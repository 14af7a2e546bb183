//! One-shot joke fetch

use anyhow::Result;

use super::open_store;
use crate::cli::output::{OutputFormat, format_joke, print_formatted, print_success};
use crate::config::Config;
use crate::joke_api::{JokeClient, JokeSource};
use crate::state::{FETCH_ERROR_MESSAGE, FavoritesStore};

pub async fn run(like: bool, format: OutputFormat, quiet: bool) -> Result<()> {
    let config = Config::load()?;
    let client = JokeClient::new(&config.api.base_url)?;

    let joke = client.random_joke().await.map_err(|e| {
        tracing::error!("Failed to fetch joke from {}: {}", client.endpoint(), e);
        anyhow::anyhow!(FETCH_ERROR_MESSAGE)
    })?;

    print_formatted(&joke, format, format_joke);

    if like {
        let mut favorites = FavoritesStore::load(open_store()?);
        if favorites.is_favorite(joke.id) {
            print_success(&format!("Joke #{} is already a favorite", joke.id), quiet);
        } else {
            favorites.try_toggle_favorite(Some(&joke))?;
            print_success(&format!("Added joke #{} to favorites", joke.id), quiet);
        }
    }

    Ok(())
}
