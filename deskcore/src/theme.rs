//! Desk theme — black on white
//!
//! Pure black and white, 1px black outlines, square corners.
//! Numbers are set in the monospace family so columns of digits line up.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::preferences::Preferences;

/// The whole palette.
pub struct DeskColors;

impl DeskColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for the calculator window
#[derive(Debug, Clone, PartialEq)]
pub struct DeskTheme {
    pub font_size_body: f32,
    pub font_size_display: f32,
    pub font_size_button: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for DeskTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_display: 26.0,
            font_size_button: 20.0,
            window_padding: 10.0,
            item_spacing: 6.0,
        }
    }
}

impl DeskTheme {
    /// Theme with font sizes taken from the user's preferences.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            font_size_display: prefs.font_size_display,
            font_size_button: prefs.font_size_button,
            ..Self::default()
        }
    }

    /// Font used for the calculator display.
    pub fn display_font(&self) -> FontId {
        FontId::new(self.font_size_display, FontFamily::Monospace)
    }

    /// Build the egui style for this theme without touching a context.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body * 0.8, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body * 1.5, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = DeskColors::WHITE;
        visuals.panel_fill = DeskColors::WHITE;
        visuals.faint_bg_color = DeskColors::WHITE;
        visuals.extreme_bg_color = DeskColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;

        visuals.window_stroke = Stroke::new(1.0, DeskColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = DeskColors::WHITE;
            ws.weak_bg_fill = DeskColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, DeskColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, DeskColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.open);

        // pressed buttons invert
        visuals.widgets.active.bg_fill = DeskColors::BLACK;
        visuals.widgets.active.weak_bg_fill = DeskColors::BLACK;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, DeskColors::BLACK);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, DeskColors::WHITE);
        visuals.widgets.active.rounding = Rounding::ZERO;

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(DeskColors::WHITE)
        .stroke(Stroke::new(1.0, DeskColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(add_contents).inner
        });
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
