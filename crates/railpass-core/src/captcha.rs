//! CAPTCHA challenge generation.
//!
//! A challenge is the 4-character code plus everything needed to draw it:
//! per-glyph placement, tilt and hue, and two kinds of visual distractors.
//! The geometry is computed here rather than in the renderer so the painter
//! stays trivial and generation is testable without a GUI context.
//!
//! Correctness is defined by the stored code, not by pixels; tests assert
//! the code's alphabet and length and that the geometry stays on-surface.
//!
//! ## Usage
//!
//! ```
//! use railpass_core::captcha::CaptchaChallenge;
//!
//! let mut rng = rand::thread_rng();
//! let challenge = CaptchaChallenge::generate(&mut rng);
//! assert_eq!(challenge.code().len(), 4);
//!
//! let typed = challenge.code().to_lowercase();
//! assert!(challenge.verify(&typed));
//! ```

use rand::Rng;

/// Characters a code is drawn from.
pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters per code.
pub const CODE_LENGTH: usize = 4;

/// Drawing surface width in logical pixels.
pub const SURFACE_WIDTH: f32 = 120.0;

/// Drawing surface height in logical pixels.
pub const SURFACE_HEIGHT: f32 = 40.0;

/// Straight-line distractors per challenge.
pub const LINE_COUNT: usize = 5;

/// Point distractors per challenge.
pub const SPECK_COUNT: usize = 30;

/// Maximum vertical offset of a glyph from the centerline, in pixels.
const GLYPH_JITTER: f32 = 5.0;

/// Maximum glyph tilt off upright, in radians.
const GLYPH_TILT: f32 = 0.25;

/// Placement of one code character on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// Horizontal center of the glyph's cell.
    pub x: f32,
    /// Vertical center, jittered off the centerline.
    pub y: f32,
    /// Tilt in radians.
    pub angle: f32,
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f32,
}

/// A straight-line distractor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: (f32, f32),
    pub to: (f32, f32),
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f32,
}

/// A point distractor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speck {
    pub x: f32,
    pub y: f32,
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f32,
}

/// A generated challenge: the expected code and its render geometry.
#[derive(Debug, Clone)]
pub struct CaptchaChallenge {
    code: String,
    glyphs: Vec<Glyph>,
    lines: Vec<Line>,
    specks: Vec<Speck>,
}

impl CaptchaChallenge {
    /// Generates a fresh challenge.
    ///
    /// The code is drawn uniformly from [`CHARSET`]; each glyph gets its own
    /// jitter, tilt and hue, and the distractor sets are fully randomized.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let code: String = (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect();

        let cell = SURFACE_WIDTH / CODE_LENGTH as f32;
        let glyphs = code
            .chars()
            .enumerate()
            .map(|(i, ch)| Glyph {
                ch,
                x: cell * i as f32 + cell / 2.0,
                y: SURFACE_HEIGHT / 2.0 + rng.gen_range(-GLYPH_JITTER..=GLYPH_JITTER),
                angle: rng.gen_range(-GLYPH_TILT..=GLYPH_TILT),
                hue: rng.gen_range(0.0..360.0),
            })
            .collect();

        let lines = (0..LINE_COUNT)
            .map(|_| Line {
                from: (
                    rng.gen_range(0.0..SURFACE_WIDTH),
                    rng.gen_range(0.0..SURFACE_HEIGHT),
                ),
                to: (
                    rng.gen_range(0.0..SURFACE_WIDTH),
                    rng.gen_range(0.0..SURFACE_HEIGHT),
                ),
                hue: rng.gen_range(0.0..360.0),
            })
            .collect();

        let specks = (0..SPECK_COUNT)
            .map(|_| Speck {
                x: rng.gen_range(0.0..SURFACE_WIDTH),
                y: rng.gen_range(0.0..SURFACE_HEIGHT),
                hue: rng.gen_range(0.0..360.0),
            })
            .collect();

        Self {
            code,
            glyphs,
            lines,
            specks,
        }
    }

    /// The expected code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Per-character render placements, in code order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Straight-line distractors.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Point distractors.
    pub fn specks(&self) -> &[Speck] {
        &self.specks
    }

    /// Compares `input` (trimmed) against the code, ignoring case.
    pub fn verify(&self, input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(&self.code)
    }
}
