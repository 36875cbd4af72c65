//! Phone login form: number plus SMS code.

use std::time::Instant;

use eframe::egui::{self, Button, TextEdit};

use crate::state::AppState;
use crate::views::{field_error, submit_button};

/// Renders the phone form.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let phone = ui.add(
        TextEdit::singleline(&mut state.phone)
            .hint_text("手机号码")
            .desired_width(f32::INFINITY),
    );
    if phone.lost_focus() {
        state.phone_blurred();
    }
    field_error(ui, state.hints.phone);

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut state.sms_code)
                .hint_text("短信验证码")
                .desired_width(120.0),
        );

        let send = ui.add_enabled(
            !state.countdown.is_active(),
            Button::new(state.countdown.label()),
        );
        if send.clicked() {
            state.send_sms_code(now);
        }
    });

    ui.add_space(16.0);

    submit_button(ui, state, now);
}
