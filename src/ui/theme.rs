use eframe::egui::{self, Color32, Stroke, Visuals};

use crate::state::ThemeSetting;

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    pub dark: bool,

    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub favorite: Color32,
    pub error: Color32,

    pub border: Color32,
}

impl Theme {
    pub fn for_setting(setting: ThemeSetting) -> Self {
        match setting {
            ThemeSetting::Dark => Self::dark(),
            ThemeSetting::Light => Self::light(),
        }
    }

    /// Slate night palette
    pub fn dark() -> Self {
        Self {
            dark: true,

            bg_darkest: Color32::from_rgb(17, 24, 39), // Gray-900
            bg_dark: Color32::from_rgb(31, 41, 55),    // Gray-800
            bg_medium: Color32::from_rgb(42, 52, 66),
            bg_light: Color32::from_rgb(55, 65, 81), // Gray-700

            text_primary: Color32::from_rgb(243, 244, 246),
            text_secondary: Color32::from_rgb(209, 213, 219),
            text_muted: Color32::from_rgb(156, 163, 175),

            accent: Color32::from_rgb(129, 140, 248),       // Indigo-400
            accent_hover: Color32::from_rgb(165, 180, 252), // Indigo-300
            accent_muted: Color32::from_rgb(79, 70, 229),   // Indigo-600

            favorite: Color32::from_rgb(244, 114, 182), // Pink-400
            error: Color32::from_rgb(248, 113, 113),    // Red-400

            border: Color32::from_rgb(75, 85, 99),
        }
    }

    /// Paper palette
    pub fn light() -> Self {
        Self {
            dark: false,

            bg_darkest: Color32::from_rgb(255, 255, 255),
            bg_dark: Color32::from_rgb(243, 244, 246), // Gray-100
            bg_medium: Color32::from_rgb(249, 250, 251),
            bg_light: Color32::from_rgb(229, 231, 235), // Gray-200

            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(55, 65, 81),
            text_muted: Color32::from_rgb(107, 114, 128),

            accent: Color32::from_rgb(79, 70, 229),         // Indigo-600
            accent_hover: Color32::from_rgb(99, 102, 241),  // Indigo-500
            accent_muted: Color32::from_rgb(165, 180, 252), // Indigo-300

            favorite: Color32::from_rgb(219, 39, 119), // Pink-600
            error: Color32::from_rgb(220, 38, 38),     // Red-600

            border: Color32::from_rgb(209, 213, 219),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);

        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_setting() {
        assert!(Theme::for_setting(ThemeSetting::Dark).dark);
        assert!(!Theme::for_setting(ThemeSetting::Light).dark);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [Theme::dark(), Theme::light()] {
            let luma = |c: Color32| u32::from(c.r()) + u32::from(c.g()) + u32::from(c.b());
            let gap = luma(theme.text_primary).abs_diff(luma(theme.bg_dark));
            assert!(gap > 300, "primary text too close to background");
        }
    }
}
