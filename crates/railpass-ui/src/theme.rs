//! Railpass UI theme.
//!
//! Railway-service blue for branding plus the four fixed toast colors.

use eframe::egui::Color32;

/// Primary brand colors.
pub mod brand {
    use super::Color32;

    /// Header/banner blue.
    pub const PRIMARY: Color32 = Color32::from_rgb(0x25, 0x77, 0xe3); // #2577e3

    /// Darker blue for hover states and emphasis.
    pub const DARK: Color32 = Color32::from_rgb(0x1b, 0x5f, 0xb8); // #1b5fb8

    /// Link color.
    pub const LINK: Color32 = PRIMARY;
}

/// Semantic status colors; one per toast severity.
pub mod status {
    use super::Color32;

    /// Success - green.
    pub const SUCCESS: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45); // #28a745

    /// Error - red.
    pub const ERROR: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45); // #dc3545

    /// Warning - amber.
    pub const WARNING: Color32 = Color32::from_rgb(0xff, 0xc1, 0x07); // #ffc107

    /// Info - cyan.
    pub const INFO: Color32 = Color32::from_rgb(0x17, 0xa2, 0xb8); // #17a2b8
}

/// Form field colors.
pub mod field {
    use super::Color32;

    /// Inline annotation text under an invalid field.
    pub const ERROR_TEXT: Color32 = super::status::ERROR;

    /// Resting input border.
    pub const BORDER: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0); // #e0e0e0
}

/// CAPTCHA surface colors.
pub mod captcha {
    use super::Color32;

    /// Surface background.
    pub const BACKGROUND: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa); // #f8f9fa
}
