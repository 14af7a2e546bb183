//! Favorites list rendering

use eframe::egui::{self, RichText};

use crate::app::JokeApp;
use crate::ui::components::section_frame;

/// Render saved jokes with per-item removal
pub fn render_favorites(app: &mut JokeApp, ui: &mut egui::Ui) {
    let theme = app.current_theme.clone();
    let title = format!("Favorites ({})", app.card.favorites.len());

    section_frame(ui, &theme, &title, |ui| {
        if app.card.favorites.is_empty() {
            ui.label(
                RichText::new("No favorites yet. Like a joke to keep it here.")
                    .color(theme.text_muted),
            );
            return;
        }

        let mut remove_id = None;

        egui::ScrollArea::vertical()
            .id_salt("favorites_scroll")
            .max_height(260.0)
            .show(ui, |ui| {
                for joke in app.card.favorites.jokes() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.set_max_width(ui.available_width() - 80.0);
                            ui.label(RichText::new(&joke.setup).color(theme.text_primary));
                            ui.label(
                                RichText::new(&joke.punchline)
                                    .size(12.0)
                                    .color(theme.text_secondary),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Remove").clicked() {
                                remove_id = Some(joke.id);
                            }
                        });
                    });
                    ui.separator();
                }
            });

        // Applied after the loop so the list is not borrowed while mutating
        if let Some(id) = remove_id {
            app.remove_favorite(id);
        }

        ui.add_space(4.0);
        if ui.button("Clear All").clicked() {
            app.clear_favorites();
        }
    });
}
