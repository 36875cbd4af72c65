//! CAPTCHA surface widget.
//!
//! Paints a [`CaptchaChallenge`] into a fixed-size allocation. The geometry
//! all comes from the challenge; this module only converts hues to colors
//! and issues draw calls, in the same order the distractors are meant to
//! overlay the glyphs. Clicking the surface counts as a refresh request.

use eframe::egui::ecolor::Hsva;
use eframe::egui::epaint::TextShape;
use eframe::egui::{self, Color32, CursorIcon, FontId, Sense, Stroke, Vec2};

use railpass_core::captcha::{self, CaptchaChallenge};

use crate::theme;

/// Glyph color: saturated and dark enough to read on the light surface.
const GLYPH_SAT: f32 = 0.7;
const GLYPH_VAL: f32 = 0.55;

/// Distractor color: lighter, so the code stays legible.
const NOISE_SAT: f32 = 0.5;
const NOISE_VAL: f32 = 0.75;

const GLYPH_FONT_SIZE: f32 = 24.0;
const SPECK_RADIUS: f32 = 1.0;

fn hue_color(hue: f32, sat: f32, val: f32) -> Color32 {
    Color32::from(Hsva::new(hue / 360.0, sat, val, 1.0))
}

/// Draws the challenge and returns the surface response; a click means the
/// user wants a fresh code.
pub fn show(ui: &mut egui::Ui, challenge: &CaptchaChallenge) -> egui::Response {
    let size = Vec2::new(captcha::SURFACE_WIDTH, captcha::SURFACE_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 3.0, theme::captcha::BACKGROUND);

    for glyph in challenge.glyphs() {
        let color = hue_color(glyph.hue, GLYPH_SAT, GLYPH_VAL);
        let galley = painter.layout_no_wrap(
            glyph.ch.to_string(),
            FontId::monospace(GLYPH_FONT_SIZE),
            color,
        );
        let pos = rect.min + Vec2::new(glyph.x, glyph.y) - galley.size() / 2.0;
        painter.add(TextShape::new(pos, galley, color).with_angle(glyph.angle));
    }

    // Noise goes over the glyphs.
    for line in challenge.lines() {
        painter.line_segment(
            [
                rect.min + Vec2::new(line.from.0, line.from.1),
                rect.min + Vec2::new(line.to.0, line.to.1),
            ],
            Stroke::new(1.0, hue_color(line.hue, NOISE_SAT, NOISE_VAL)),
        );
    }
    for speck in challenge.specks() {
        painter.circle_filled(
            rect.min + Vec2::new(speck.x, speck.y),
            SPECK_RADIUS,
            hue_color(speck.hue, NOISE_SAT, NOISE_VAL),
        );
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wheel_maps_to_opaque_colors() {
        for hue in [0.0, 90.0, 180.0, 270.0, 359.0] {
            let color = hue_color(hue, GLYPH_SAT, GLYPH_VAL);
            assert_eq!(color.a(), 255);
        }
        // Distinct hues give distinct colors.
        assert_ne!(
            hue_color(0.0, GLYPH_SAT, GLYPH_VAL),
            hue_color(180.0, GLYPH_SAT, GLYPH_VAL)
        );
    }
}
