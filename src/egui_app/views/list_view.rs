//! Movie List View
//!
//! Search bar, sort controls, movie cards, pagination, plus the edit dialog and
//! delete confirmation that open on top of the list.

use eframe::egui;

use crate::egui_app::editor::EditorMode;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::movie_form_view;
use crate::shared::movie::Movie;
use crate::shared::query::{SortField, SortOrder};

/// Card actions collected during rendering and applied afterwards
enum CardAction {
    Edit(Movie),
    Delete(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(egui::RichText::new("All Movies").size(28.0).strong().color(colors::ACCENT));
    ui.add_space(12.0);

    render_controls(ui, state);
    ui.add_space(12.0);

    if state.list.is_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
        });
        return;
    }

    let is_admin = state.is_admin();
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .max_height((ui.available_height() - 48.0).max(120.0))
        .show(ui, |ui| {
            if state.list.movies().is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No movies found.");
            }
            for movie in state.list.movies() {
                if let Some(card_action) = render_card(ui, movie, is_admin) {
                    action = Some(card_action);
                }
                ui.add_space(8.0);
            }
        });

    render_pagination(ui, state);

    match action {
        Some(CardAction::Edit(movie)) => state.editor.open_for_edit(&movie),
        Some(CardAction::Delete(id)) => state.editor.request_delete(id),
        None => {}
    }

    let ctx = ui.ctx().clone();
    render_edit_dialog(&ctx, state);
    render_delete_confirmation(&ctx, state);
}

fn render_controls(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("🔍");
        let mut search = state.list.search().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("Search movies...")
                .desired_width(280.0),
        );
        if response.changed() {
            state.list.set_search(search);
        }
        if !state.list.search().is_empty() && ui.button("✕").clicked() {
            state.list.set_search("");
        }

        ui.add_space(16.0);

        let mut sort = state.list.sort();
        egui::ComboBox::from_id_salt("sort_field")
            .selected_text(format!("Sort: {}", sort.label()))
            .show_ui(ui, |ui| {
                for field in SortField::ALL {
                    ui.selectable_value(&mut sort, field, field.label());
                }
            });
        if sort != state.list.sort() {
            state.list.set_sort(sort);
        }

        let arrow = match state.list.order() {
            SortOrder::Asc => "⬆ Asc",
            SortOrder::Desc => "⬇ Desc",
        };
        if ui.button(arrow).clicked() {
            state.list.toggle_order();
        }

        if state.list.is_refreshing() {
            ui.spinner();
        }
    });
}

fn render_card(ui: &mut egui::Ui, movie: &Movie, is_admin: bool) -> Option<CardAction> {
    let mut action = None;
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&movie.title).size(20.0).strong().color(colors::TEXT_LIGHT));
                if !movie.description.is_empty() {
                    ui.colored_label(colors::TEXT_SECONDARY, &movie.description);
                }
                ui.label(format!("Year: {}", movie.year));
                ui.label(format!("Rating: {}", movie.rating));
                ui.label(format!("Run Time: {} mins", movie.run_time));
                if !movie.banner_image.is_empty() {
                    ui.hyperlink_to("Banner", &movie.banner_image);
                }
            });

            if is_admin {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let delete = egui::Button::new(egui::RichText::new("Delete").color(colors::TEXT_LIGHT))
                        .fill(colors::BUTTON_DANGER);
                    if ui.add(delete).clicked() {
                        action = Some(CardAction::Delete(movie.id.clone()));
                    }
                    if ui.button("Edit").clicked() {
                        action = Some(CardAction::Edit(movie.clone()));
                    }
                });
            }
        });
    });
    action
}

fn render_pagination(ui: &mut egui::Ui, state: &mut AppState) {
    let page = state.list.page();
    let total_pages = state.list.total_pages();

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, egui::Button::new("◀ Prev")).clicked() {
            state.list.set_page(page - 1);
        }
        ui.label(format!(
            "Page {} of {} ({} movies)",
            page,
            total_pages.max(1),
            state.list.total_movies()
        ));
        if ui.add_enabled(page < total_pages, egui::Button::new("Next ▶")).clicked() {
            state.list.set_page(page + 1);
        }
    });
}

fn render_edit_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !matches!(state.editor.mode(), EditorMode::Edit { .. }) {
        return;
    }

    let mut open = true;
    let mut save = false;
    let mut cancel = false;

    egui::Window::new("Edit Movie")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            movie_form_view::render_fields(ui, "edit_movie_fields", state.editor.draft_mut());
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                let busy = state.editor.is_busy();
                if ui.add_enabled(!busy, egui::Button::new("Save").fill(colors::BUTTON_PRIMARY)).clicked() {
                    save = true;
                }
                if busy {
                    ui.spinner();
                }
            });
        });

    if save {
        state.submit_editor();
    } else if cancel || !open {
        state.editor.close();
    }
}

fn render_delete_confirmation(ctx: &egui::Context, state: &mut AppState) {
    if state.editor.pending_confirmation().is_none() {
        return;
    }

    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new("Delete Movie")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Are you sure you want to delete this movie?");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
                let delete = egui::Button::new(egui::RichText::new("Delete").color(colors::TEXT_LIGHT))
                    .fill(colors::BUTTON_DANGER);
                if ui.add(delete).clicked() {
                    confirmed = true;
                }
            });
        });

    if confirmed {
        state.editor.confirm_delete();
    } else if cancelled {
        state.editor.cancel_delete();
    }
}
