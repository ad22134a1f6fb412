//! Theme Styling Functions
//!
//! Helper functions for applying the color scheme consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::notice::NoticeLevel;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::DIALOG_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_DARK;

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);
    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;

    style.visuals.selection.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the central panel
pub fn main_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(24))
}

/// Create a frame for a movie card
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(16, 12))
}

/// Create a frame for a notice banner
pub fn notice_frame(level: NoticeLevel) -> egui::Frame {
    egui::Frame::new()
        .fill(notice_color(level))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 6))
}

/// Banner color per notice level
pub fn notice_color(level: NoticeLevel) -> Color32 {
    match level {
        NoticeLevel::Success => colors::SUCCESS,
        NoticeLevel::Info => colors::INFO,
        NoticeLevel::Error => colors::ERROR,
    }
}
