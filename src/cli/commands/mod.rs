//! CLI subcommand implementations

pub mod config;
pub mod diag;
pub mod favorites;
pub mod fetch;
pub mod theme;

use std::sync::Arc;

use crate::storage::{KeyValueStore, SqliteStore};

/// Open the same store the window uses
fn open_store() -> anyhow::Result<Arc<dyn KeyValueStore>> {
    Ok(Arc::new(SqliteStore::open()?))
}
