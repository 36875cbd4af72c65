//! Reusable widgets: the CAPTCHA surface and the toast overlay.

pub mod captcha;
pub mod toast;
