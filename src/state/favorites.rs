//! Favorite jokes and their persisted mirror

use std::collections::HashSet;
use std::sync::Arc;

use crate::joke_api::Joke;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the JSON array of favorite jokes
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered, id-unique list of favorite jokes.
///
/// Every mutation rewrites the full list under [`FAVORITES_KEY`]. A failed
/// write is logged and the in-memory list keeps the user's change.
pub struct FavoritesStore {
    jokes: Vec<Joke>,
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Rehydrate from storage, starting empty if nothing usable is stored
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let jokes = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Joke>>(&raw) {
                Ok(jokes) => dedup_by_id(jokes),
                Err(e) => {
                    tracing::warn!("Ignoring unreadable favorites: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites: {}", e);
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} favorite(s)", jokes.len());
        Self { jokes, store }
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.jokes.iter().any(|j| j.id == id)
    }

    /// Add the joke if its id is not saved yet, otherwise remove it.
    /// `None` leaves everything untouched.
    pub fn toggle_favorite(&mut self, joke: Option<&Joke>) {
        if let Err(e) = self.try_toggle_favorite(joke) {
            tracing::error!("Failed to save favorites: {}", e);
        }
    }

    /// Like [`toggle_favorite`](Self::toggle_favorite), but reports a failed write.
    /// The in-memory list is updated either way.
    pub fn try_toggle_favorite(&mut self, joke: Option<&Joke>) -> Result<(), StorageError> {
        let Some(joke) = joke else {
            return Ok(());
        };

        if self.is_favorite(joke.id) {
            self.jokes.retain(|j| j.id != joke.id);
        } else {
            self.jokes.push(joke.clone());
        }
        self.persist()
    }

    /// Remove the favorite with the given id, if present
    pub fn remove(&mut self, id: u64) -> bool {
        let present = self.is_favorite(id);
        if let Err(e) = self.try_remove(id) {
            tracing::error!("Failed to save favorites: {}", e);
        }
        present
    }

    /// Remove by id, reporting a failed write. `Ok(false)` if the id was not saved.
    pub fn try_remove(&mut self, id: u64) -> Result<bool, StorageError> {
        let before = self.jokes.len();
        self.jokes.retain(|j| j.id != id);
        if self.jokes.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Empty the list and drop the storage key
    pub fn clear_favorites(&mut self) {
        if let Err(e) = self.try_clear_favorites() {
            tracing::error!("Failed to clear stored favorites: {}", e);
        }
    }

    /// Empty the list and drop the storage key, reporting a failed delete
    pub fn try_clear_favorites(&mut self) -> Result<(), StorageError> {
        self.jokes.clear();
        self.store.remove(FAVORITES_KEY)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.jokes)?;
        self.store.set(FAVORITES_KEY, &json)
    }
}

fn dedup_by_id(jokes: Vec<Joke>) -> Vec<Joke> {
    let mut seen = HashSet::new();
    jokes.into_iter().filter(|j| seen.insert(j.id)).collect()
}
