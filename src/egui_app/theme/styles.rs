//! Theme Styling Functions
//!
//! Helpers for applying the editor palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, RichText, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.override_text_color = Some(colors::TEXT_DARK);

    // Panel styling
    style.visuals.panel_fill = colors::BG_PRIMARY;

    // Widget styling
    style.visuals.widgets.inactive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.inactive.weak_bg_fill = colors::CARD_BG;
    style.visuals.widgets.hovered.weak_bg_fill = colors::CARD_BORDER;
    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY_HOVER;

    style.visuals.selection.bg_fill = colors::BG_ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_ACCENT)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for one rank or tag card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for the landing view's link box
pub fn landing_frame() -> egui::Frame {
    card_frame().inner_margin(egui::Margin::same(24))
}

/// Frame for the error banner
pub fn banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Button with a solid fill and light text
pub fn filled_button(text: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(colors::TEXT_LIGHT))
        .fill(fill)
        .corner_radius(CornerRadius::same(6))
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    filled_button(text, colors::BUTTON_PRIMARY)
}

pub fn danger_button(text: &str) -> egui::Button<'static> {
    filled_button(text, colors::BUTTON_DANGER)
}
