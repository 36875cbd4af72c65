//! Railpass UI - the login screen front-end.
//!
//! Renders the railway-ticketing login window:
//!
//! - Account and phone login tabs
//! - A client-drawn CAPTCHA with click-to-refresh
//! - A simulated SMS send with a 60-second resend countdown
//! - Inline field annotations and toast messages
//!
//! All session state lives in [`AppState`]; the views are stateless render
//! functions over it, so the interesting behavior tests without a window.
//!
//! # Usage
//!
//! ```no_run
//! railpass_ui::run_login().expect("failed to run login window");
//! ```

mod app;
mod fonts;

pub mod components;
pub mod error;
pub mod state;
pub mod theme;
pub mod views;

pub use app::LoginApp;
pub use error::{Result, UiError};
pub use state::{AppState, Tab};

/// Runs the login window.
///
/// This is the main entry point for the GUI application.
pub fn run_login() -> Result<()> {
    let options = LoginApp::window_options();

    eframe::run_native(
        "铁路12306 登录",
        options,
        Box::new(|cc| Ok(Box::new(LoginApp::new(cc)))),
    )
    .map_err(|e| UiError::Launch(e.to_string()))
}
