use eframe::egui;
use std::sync::Arc;

use crate::config::Config;
use crate::joke_api::JokeClient;
use crate::state::{JokeCard, StateEvent};
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::ui::theme::Theme;
use crate::ui::{render_favorites, render_joke_card};

/// Main application state
pub struct JokeApp {
    /// Fetcher, favorites and theme
    pub card: JokeCard<JokeClient>,
    /// Palette for the current theme setting
    pub current_theme: Theme,
    /// Status message for the status bar
    pub status_message: String,
    /// Host name shown in the footer
    pub source_host: String,
    /// Site opened by the footer link
    pub source_url: String,
}

impl JokeApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config, client: JokeClient) -> Self {
        let store = open_store();

        let source_host = client.source_host().to_string();
        let source_url = config.api.base_url.clone();
        let card = JokeCard::start(client, store);
        let current_theme = Theme::for_setting(card.theme.setting());

        Self {
            card,
            current_theme,
            status_message: "Fetching joke...".to_string(),
            source_host,
            source_url,
        }
    }

    /// "New": fetch another joke
    pub fn new_joke(&mut self) {
        self.card.fetcher.fetch_joke();
        self.status_message = "Fetching joke...".to_string();
    }

    /// "Copy": place the joke on the clipboard
    pub fn copy_joke(&mut self, ctx: &egui::Context) {
        let Some(text) = self.card.copy_text() else {
            return;
        };
        ctx.copy_text(text);
        self.status_message = "Copied to clipboard".to_string();
    }

    /// "Like" / "Unlike" the joke on display
    pub fn toggle_like(&mut self) {
        self.card.toggle_current_favorite();
        self.status_message = if self.card.is_current_favorite() {
            "Added to favorites".to_string()
        } else {
            "Removed from favorites".to_string()
        };
    }

    pub fn remove_favorite(&mut self, id: u64) {
        if self.card.favorites.remove(id) {
            self.status_message = format!("Removed joke #{} from favorites", id);
        }
    }

    pub fn clear_favorites(&mut self) {
        self.card.favorites.clear_favorites();
        self.status_message = "Cleared favorites".to_string();
    }

    pub fn toggle_theme(&mut self) {
        let setting = self.card.theme.toggle_theme();
        self.current_theme = Theme::for_setting(setting);
        tracing::debug!("Theme switched to {}", setting);
    }

    fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(message) => self.status_message = message,
            }
        }
    }
}

/// Open the on-disk store, falling back to a session-only one
fn open_store() -> Arc<dyn KeyValueStore> {
    match SqliteStore::open() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to open storage, changes will not be kept: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

impl eframe::App for JokeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async tasks
        let events = self.card.fetcher.poll();
        self.handle_events(events);
        if self.card.fetcher.has_pending() {
            // Keep polling while a request is outstanding
            ctx.request_repaint();
        }

        if self.card.theme.take_dirty() {
            self.current_theme.apply(ctx);
        }

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .size(11.0)
                        .color(self.current_theme.text_muted),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            render_joke_card(self, ui);
            ui.add_space(16.0);
            render_favorites(self, ui);
        });
    }
}
