//! Application state modules
//!
//! Each component owns its fields and exposes the operations the UI and CLI
//! call. `JokeCard` wires them together for the window.

mod favorites;
mod fetch;
mod theme;

pub use favorites::FavoritesStore;
pub use fetch::{FETCH_ERROR_MESSAGE, FetchState, JokeFetcher};
pub use theme::{ThemePreference, ThemeSetting};

use std::sync::Arc;

use crate::joke_api::JokeSource;
use crate::storage::KeyValueStore;

/// Events that state poll methods can return.
/// These communicate results back to the app without direct mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),
}

/// The joke card controller: fetcher, favorites and theme sharing one store
pub struct JokeCard<S: JokeSource> {
    pub fetcher: JokeFetcher<S>,
    pub favorites: FavoritesStore,
    pub theme: ThemePreference,
}

impl<S: JokeSource> JokeCard<S> {
    /// Rehydrate favorites and theme, then issue the first fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(source: S, store: Arc<dyn KeyValueStore>) -> Self {
        let favorites = FavoritesStore::load(store.clone());
        let theme = ThemePreference::load(store);

        let mut card = Self {
            fetcher: JokeFetcher::new(source),
            favorites,
            theme,
        };
        card.fetcher.fetch_joke();
        card
    }

    /// `"<setup> - <punchline>"` for the joke on display
    pub fn copy_text(&self) -> Option<String> {
        self.fetcher.joke().map(|joke| joke.clipboard_text())
    }

    /// Like or unlike the joke on display
    pub fn toggle_current_favorite(&mut self) {
        self.favorites.toggle_favorite(self.fetcher.joke());
    }

    /// Whether the joke on display is a favorite
    pub fn is_current_favorite(&self) -> bool {
        self.fetcher
            .joke()
            .is_some_and(|joke| self.favorites.is_favorite(joke.id))
    }
}
