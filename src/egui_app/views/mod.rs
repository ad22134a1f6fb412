use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod auth_view;
pub mod list_view;
pub mod movie_form_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = egui::RichText::new("🎬 Movies-App").size(18.0).strong().color(colors::TEXT_LIGHT);
                if ui.add(egui::Label::new(title).sense(egui::Sense::click())).clicked() {
                    state.navigate(AppView::MovieList);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.is_logged_in() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                    } else {
                        if ui.button("Signup").clicked() {
                            state.navigate(AppView::Signup);
                        }
                        if ui.button("Login").clicked() {
                            state.navigate(AppView::Login);
                        }
                    }

                    if state.is_admin() {
                        let add = egui::Button::new(egui::RichText::new("Add New Movie").color(colors::TEXT_LIGHT))
                            .fill(colors::BUTTON_PRIMARY);
                        if ui.add(add).clicked() {
                            state.navigate(AppView::AddMovie);
                        }
                    }
                });
            });
        });
}

pub fn render_notices(ctx: &egui::Context, state: &mut AppState) {
    if state.notices.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::TopBottomPanel::bottom("notices")
        .frame(egui::Frame::new().fill(colors::BG_DARK).inner_margin(egui::Margin::same(8)))
        .show(ctx, |ui| {
            for (index, notice) in state.notices.iter().enumerate() {
                styles::notice_frame(notice.level).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(colors::TEXT_LIGHT, &notice.message);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });

    if let Some(index) = dismissed {
        state.notices.dismiss(index);
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| match state.current_view {
            AppView::MovieList => list_view::render(ui, state),
            AppView::AddMovie => movie_form_view::render(ui, state),
            AppView::Login | AppView::Signup => auth_view::render(ui, state),
        });
}
