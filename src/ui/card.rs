//! Joke card rendering

use eframe::egui::{self, RichText};

use crate::app::JokeApp;
use crate::state::FetchState;
use crate::ui::components::{source_footer, toolbar_button};

/// Render the header controls and the current joke
pub fn render_joke_card(app: &mut JokeApp, ui: &mut egui::Ui) {
    let theme = app.current_theme.clone();

    // Header row
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Random Joke")
                .size(20.0)
                .strong()
                .color(theme.text_primary),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_label = if theme.dark { "Light mode" } else { "Dark mode" };
            if toolbar_button(ui, &theme, theme_label).clicked() {
                app.toggle_theme();
            }

            if toolbar_button(ui, &theme, "Copy").on_hover_text("Copy joke").clicked() {
                app.copy_joke(ui.ctx());
            }

            let loading = app.card.fetcher.is_loading();
            let new_label = if loading { "Loading..." } else { "New" };
            if toolbar_button(ui, &theme, new_label).clicked() {
                app.new_joke();
            }
            if loading {
                ui.spinner();
            }
        });
    });

    ui.add_space(12.0);

    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(12.0)
        .inner_margin(24.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            match app.card.fetcher.state().clone() {
                FetchState::Error(message) => {
                    ui.label(RichText::new(message).color(theme.error));
                }
                FetchState::Success(joke) => {
                    ui.label(
                        RichText::new(&joke.setup)
                            .size(18.0)
                            .color(theme.text_secondary),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(&joke.punchline)
                            .size(16.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Type: {} • ID: {}", joke.kind, joke.id))
                                .size(11.0)
                                .color(theme.text_muted),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let liked = app.card.is_current_favorite();
                            let (label, color) = if liked {
                                ("♥ Unlike", theme.favorite)
                            } else {
                                ("♡ Like", theme.text_secondary)
                            };
                            if ui.button(RichText::new(label).color(color)).clicked() {
                                app.toggle_like();
                            }
                        });
                    });
                }
                FetchState::Idle | FetchState::Loading => {
                    ui.label(
                        RichText::new("No joke available. Press 'New' to try again.")
                            .color(theme.text_muted),
                    );
                }
            }
        });

    ui.add_space(8.0);
    let host = app.source_host.clone();
    let url = app.source_url.clone();
    source_footer(ui, &theme, &host, &url);
}
