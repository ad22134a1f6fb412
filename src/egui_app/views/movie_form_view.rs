//! Add Movie View
//!
//! Admin-only create form. The field grid is shared with the edit dialog.

use eframe::egui;

use crate::egui_app::editor::{EditorMode, MovieDraft, MovieField};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.editor.mode() != &EditorMode::Create {
        state.editor.open_for_create();
    }

    ui.label(egui::RichText::new("Add New Movie").size(28.0).strong().color(colors::TEXT_LIGHT));
    ui.add_space(16.0);

    render_fields(ui, "create_movie_fields", state.editor.draft_mut());
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        let busy = state.editor.is_busy();
        let create = egui::Button::new(egui::RichText::new("Create Movie").color(colors::TEXT_LIGHT))
            .fill(colors::BUTTON_PRIMARY);
        if ui.add_enabled(!busy, create).clicked() {
            state.submit_editor();
        }
        if busy {
            ui.spinner();
        }
    });
}

/// Labelled inputs for every editable field
pub fn render_fields(ui: &mut egui::Ui, id: &str, draft: &mut MovieDraft) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            for field in MovieField::ALL {
                ui.colored_label(colors::TEXT_SECONDARY, field.label());
                let text = draft.field_mut(field);
                let input = if field == MovieField::Description {
                    egui::TextEdit::multiline(text).desired_rows(3)
                } else {
                    egui::TextEdit::singleline(text)
                };
                ui.add(input.desired_width(360.0));
                ui.end_row();
            }
        });
}
