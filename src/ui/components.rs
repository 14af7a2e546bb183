//! Shared UI components

use eframe::egui::{self, RichText};

use crate::ui::theme::Theme;

/// Framed section with a small accent title
pub fn section_frame<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8.0)
        .inner_margin(16.0)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(theme.accent).size(13.0).strong());
            ui.add_space(8.0);
            add_contents(ui)
        })
        .inner
}

/// Small toolbar button in the card header
pub fn toolbar_button(ui: &mut egui::Ui, theme: &Theme, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(theme.text_primary).size(13.0))
            .fill(theme.bg_light)
            .corner_radius(6.0),
    )
}

/// Source attribution linking to the joke API site
pub fn source_footer(ui: &mut egui::Ui, theme: &Theme, host: &str, url: &str) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .link(RichText::new(host).size(11.0).color(theme.accent))
            .clicked()
        {
            if let Err(e) = open::that(url) {
                tracing::warn!("Failed to open {}: {}", url, e);
            }
        }
        ui.label(RichText::new("Source:").size(11.0).color(theme.text_muted));
    });
}
