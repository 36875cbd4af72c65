//! Single-slot toast notifications.
//!
//! At most one toast exists at a time; the owner replaces it wholesale, so
//! a burst of messages shows only the newest. A toast holds for a fixed
//! display duration with short enter/exit fades, then expires.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, RichText};

use crate::theme::status;

/// Time a toast stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Length of the enter and exit fades.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Message severity, mapped to a fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Background color for a toast of this severity.
    pub fn color(&self) -> Color32 {
        match self {
            Self::Success => status::SUCCESS,
            Self::Error => status::ERROR,
            Self::Warning => status::WARNING,
            Self::Info => status::INFO,
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    text: String,
    severity: Severity,
    shown_at: Instant,
}

impl Toast {
    pub fn new(text: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            text: text.into(),
            severity,
            shown_at: now,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Opacity at `now`: ramps in over the fade, holds at full, ramps out.
    pub fn opacity(&self, now: Instant) -> f32 {
        let age = now.duration_since(self.shown_at);
        let fade = FADE_DURATION.as_secs_f32();

        if age < FADE_DURATION {
            age.as_secs_f32() / fade
        } else if age < DISPLAY_DURATION {
            1.0
        } else if age < DISPLAY_DURATION + FADE_DURATION {
            1.0 - (age - DISPLAY_DURATION).as_secs_f32() / fade
        } else {
            0.0
        }
    }

    /// True once the exit fade has finished.
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= DISPLAY_DURATION + FADE_DURATION
    }
}

/// Draws the toast anchored to the window's top-right corner.
pub fn show(ctx: &egui::Context, toast: &Toast, now: Instant) {
    let opacity = toast.opacity(now);

    egui::Area::new(egui::Id::new("message-toast"))
        .anchor(Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            egui::Frame::none()
                .fill(toast.severity().color())
                .rounding(5.0)
                .inner_margin(egui::Margin::symmetric(20.0, 15.0))
                .show(ui, |ui| {
                    ui.set_max_width(300.0);
                    ui.label(RichText::new(toast.text()).color(Color32::WHITE).size(14.0));
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_match_theme() {
        assert_eq!(Severity::Success.color(), status::SUCCESS);
        assert_eq!(Severity::Error.color(), status::ERROR);
        assert_eq!(Severity::Warning.color(), status::WARNING);
        assert_eq!(Severity::Info.color(), status::INFO);
    }

    #[test]
    fn opacity_ramps_in_holds_and_ramps_out() {
        let t0 = Instant::now();
        let toast = Toast::new("msg", Severity::Info, t0);

        assert_eq!(toast.opacity(t0), 0.0);
        let mid_enter = toast.opacity(t0 + Duration::from_millis(150));
        assert!((mid_enter - 0.5).abs() < 0.01);
        assert_eq!(toast.opacity(t0 + Duration::from_secs(1)), 1.0);

        let mid_exit = toast.opacity(t0 + DISPLAY_DURATION + Duration::from_millis(150));
        assert!((mid_exit - 0.5).abs() < 0.01);
        assert_eq!(toast.opacity(t0 + Duration::from_secs(4)), 0.0);
    }

    #[test]
    fn expires_after_display_plus_exit_fade() {
        let t0 = Instant::now();
        let toast = Toast::new("msg", Severity::Success, t0);

        assert!(!toast.expired(t0 + DISPLAY_DURATION));
        assert!(toast.expired(t0 + DISPLAY_DURATION + FADE_DURATION));
    }
}
