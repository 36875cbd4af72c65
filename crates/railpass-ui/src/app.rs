//! Main application window and frame loop.

use std::time::{Duration, Instant};

use eframe::egui::{self, RichText};

use crate::components::toast;
use crate::fonts;
use crate::state::{AppState, Tab};
use crate::theme;
use crate::views::{account, phone};

/// Repaint cadence while timers are pending; well under the one-second
/// countdown tick so labels never visibly stall.
const TIMER_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// The login window.
pub struct LoginApp {
    state: AppState,

    /// Window focus as of the previous frame. A false-to-true edge
    /// refreshes the CAPTCHA, like the original page did when its tab
    /// became visible again.
    was_focused: bool,
}

impl LoginApp {
    /// Creates the window, installing a CJK-capable font first.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        fonts::install(&cc.egui_ctx);
        Self {
            state: AppState::new(),
            was_focused: true,
        }
    }

    /// Returns the window options for eframe.
    pub fn window_options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([420.0, 540.0])
                .with_min_inner_size([380.0, 480.0])
                .with_title("铁路12306 登录"),
            ..Default::default()
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.heading(
            RichText::new("铁路12306")
                .size(30.0)
                .color(theme::brand::PRIMARY)
                .strong(),
        );
        ui.label(RichText::new("铁路购票演示平台").size(13.0).weak());
    }

    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in Tab::all() {
                let selected = self.state.active_tab == tab;
                let text = if selected {
                    RichText::new(tab.label())
                        .color(theme::brand::PRIMARY)
                        .strong()
                } else {
                    RichText::new(tab.label())
                };
                if ui.selectable_label(selected, text).clicked() {
                    self.state.select_tab(tab);
                }
            }
        });
        ui.separator();
    }
}

impl eframe::App for LoginApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.poll(now);

        // Regaining window focus refreshes the CAPTCHA.
        let focused = ctx.input(|i| i.raw.focused);
        if focused && !self.was_focused {
            self.state.regenerate_captcha();
        }
        self.was_focused = focused;

        // Enter submits the active form.
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) && !self.state.is_busy() {
            self.state.submit(now);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(36.0);
                self.render_header(ui);
                ui.add_space(24.0);

                egui::Frame::none()
                    .fill(ui.style().visuals.widgets.noninteractive.bg_fill)
                    .rounding(8.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_min_width(280.0);
                        ui.set_max_width(300.0);

                        self.render_tabs(ui);
                        ui.add_space(16.0);

                        // Exactly one form renders, matching the tab.
                        match self.state.active_tab {
                            Tab::Account => account::render(ui, &mut self.state, now),
                            Tab::Phone => phone::render(ui, &mut self.state, now),
                        }
                    });
            });
        });

        if let Some(current) = &self.state.toast {
            toast::show(ctx, current, now);
        }

        if self.state.has_pending_timers() {
            ctx.request_repaint_after(TIMER_REPAINT_INTERVAL);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Nothing pending may outlive the window.
        self.state.cancel_timers();
    }
}
