//! Account login form: username, password, CAPTCHA.

use std::time::Instant;

use eframe::egui::{self, TextEdit};

use crate::components::captcha;
use crate::state::AppState;
use crate::views::{field_error, submit_button};

/// Renders the account form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let username = ui.add(
        TextEdit::singleline(&mut state.username)
            .hint_text("用户名/邮箱/手机号")
            .desired_width(f32::INFINITY),
    );
    if username.lost_focus() {
        state.username_blurred();
    }
    field_error(ui, state.hints.username);

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let toggle_width = 28.0;
        let password = ui.add_sized(
            [ui.available_width() - toggle_width, 20.0],
            TextEdit::singleline(&mut state.password)
                .password(!state.show_password)
                .hint_text("密码"),
        );
        if password.changed() {
            state.password_edited();
        }

        let eye = if state.show_password { "🙈" } else { "👁" };
        if ui.button(eye).clicked() {
            state.show_password = !state.show_password;
        }
    });
    field_error(ui, state.hints.password);

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut state.captcha_input)
                .hint_text("验证码")
                .desired_width(70.0),
        );

        // Clicking the surface refreshes it, same as the explicit control.
        if captcha::show(ui, &state.captcha).clicked() {
            state.regenerate_captcha();
        }
        if ui.link("换一张").clicked() {
            state.regenerate_captcha();
        }
    });

    ui.add_space(16.0);

    submit_button(ui, state, now);
}
