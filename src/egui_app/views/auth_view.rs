use eframe::egui;

use crate::egui_app::AppView;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let is_signup = state.current_view == AppView::Signup;
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 280.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new(if is_signup { "Signup" } else { "Login" })
                .size(28.0)
                .strong()
                .color(colors::TEXT_LIGHT),
        );
        ui.add_space(20.0);

        if let Some(ref error) = state.auth.state().error {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(10.0);
        }

        let input_width = 280.0;
        let label_width = 80.0;
        let indent = ((available_rect.width() - input_width - label_width - 20.0) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.add_sized(
                [label_width, 24.0],
                egui::Label::new(egui::RichText::new("Email:").color(colors::TEXT_SECONDARY)),
            );
            ui.add_sized(
                [input_width, 28.0],
                egui::TextEdit::singleline(&mut state.email_input).text_color(colors::TEXT_LIGHT),
            );
        });
        ui.add_space(8.0);

        let mut submitted = false;
        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.add_sized(
                [label_width, 24.0],
                egui::Label::new(egui::RichText::new("Password:").color(colors::TEXT_SECONDARY)),
            );
            let response = ui.add_sized(
                [input_width, 28.0],
                egui::TextEdit::singleline(&mut state.password_input)
                    .password(true)
                    .text_color(colors::TEXT_LIGHT),
            );
            submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        });
        ui.add_space(20.0);

        let loading = state.auth.state().loading;
        ui.horizontal(|ui| {
            let button_width = 120.0;
            ui.add_space(((available_rect.width() - button_width * 2.0 - 10.0) / 2.0).max(0.0));

            let submit = egui::Button::new(
                egui::RichText::new(if is_signup { "Signup" } else { "Login" }).color(colors::TEXT_LIGHT),
            )
            .fill(colors::BUTTON_PRIMARY);
            if ui.add_enabled_ui(!loading, |ui| ui.add_sized([button_width, 32.0], submit)).inner.clicked() {
                submitted = true;
            }

            ui.add_space(10.0);

            let other = if is_signup { "Back to Login" } else { "Create Account" };
            if ui
                .add_sized(
                    [button_width, 32.0],
                    egui::Button::new(egui::RichText::new(other).color(colors::TEXT_SECONDARY)),
                )
                .clicked()
            {
                state.navigate(if is_signup { AppView::Login } else { AppView::Signup });
            }
        });

        if submitted && !loading {
            if is_signup {
                state.submit_signup();
            } else {
                state.submit_login();
            }
        }

        if loading {
            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.add_space(((available_rect.width() - 100.0) / 2.0).max(0.0));
                ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                ui.spinner();
            });
        }
    });
}
