//! Per-tab login forms.

pub mod account;
pub mod phone;

use std::time::Instant;

use eframe::egui::{self, Button, Color32, RichText};

use crate::state::AppState;
use crate::theme;

/// Shows or clears the inline annotation under a field.
pub(crate) fn field_error(ui: &mut egui::Ui, hint: Option<&'static str>) {
    if let Some(text) = hint {
        ui.label(RichText::new(text).size(12.0).color(theme::field::ERROR_TEXT));
    }
}

/// The full-width submit button, shared by both forms.
pub(crate) fn submit_button(ui: &mut egui::Ui, state: &mut AppState, now: Instant) {
    let busy = state.is_busy();
    let label = if busy { "登录中..." } else { "登录" };

    let button = Button::new(RichText::new(label).size(16.0).color(Color32::WHITE))
        .fill(theme::brand::PRIMARY)
        .rounding(5.0);

    let response = ui.add_enabled_ui(!busy, |ui| {
        ui.add_sized([ui.available_width(), 40.0], button)
    });

    if response.inner.clicked() {
        state.submit(now);
    }
}
