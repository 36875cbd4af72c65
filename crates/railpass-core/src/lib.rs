//! Railpass Core - validation, CAPTCHA, and countdown logic.
//!
//! The framework-free half of the Railpass login screen. Everything here is
//! plain state queried or polled by the UI layer, so the behavior is
//! testable without a window.

pub mod captcha;
pub mod countdown;
pub mod flow;
pub mod timer;
pub mod validation;

pub use captcha::CaptchaChallenge;
pub use countdown::SmsCountdown;
pub use flow::{FlowEvent, LoginFlow};
pub use timer::{Deadline, Ticker};
pub use validation::{AccountForm, PhoneForm, ValidationError};
