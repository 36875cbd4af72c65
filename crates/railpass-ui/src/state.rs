//! Application state for the login screen.
//!
//! [`AppState`] owns every piece of mutable session UI state — the active
//! tab, field buffers, the live CAPTCHA, the SMS countdown, the submit
//! flow, and the toast slot — and exposes the operations the views call.
//! Nothing here touches egui, so the whole controller tests headless.

use std::time::{Duration, Instant};

use rand::thread_rng;

use railpass_core::captcha::CaptchaChallenge;
use railpass_core::countdown::SmsCountdown;
use railpass_core::flow::{FlowEvent, LoginFlow};
use railpass_core::timer::Ticker;
use railpass_core::validation::{self, AccountForm, PhoneForm, ValidationError};

use crate::components::toast::{Severity, Toast};

/// Login method tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Username + password + CAPTCHA.
    #[default]
    Account,
    /// Phone number + SMS code.
    Phone,
}

impl Tab {
    /// Display label for the tab control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Account => "账号登录",
            Self::Phone => "手机登录",
        }
    }

    /// All tabs, in display order.
    pub fn all() -> [Tab; 2] {
        [Self::Account, Self::Phone]
    }
}

/// Inline annotations under individual fields. Advisory only; the submit
/// validator never consults them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldHints {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub phone: Option<&'static str>,
}

/// The login screen controller.
///
/// Constructed once per window; every mutation goes through its methods.
pub struct AppState {
    /// Which login form is shown. Exactly one renders per frame.
    pub active_tab: Tab,

    // Account form buffers.
    pub username: String,
    pub password: String,
    pub captcha_input: String,
    /// Render the password in the clear.
    pub show_password: bool,

    // Phone form buffers.
    pub phone: String,
    pub sms_code: String,

    /// The live CAPTCHA challenge.
    pub captcha: CaptchaChallenge,

    /// SMS resend countdown, paired with its one-second ticker.
    pub countdown: SmsCountdown,
    sms_ticker: Option<Ticker>,

    /// Submit flow state.
    pub flow: LoginFlow,

    /// The single toast slot.
    pub toast: Option<Toast>,

    /// Inline field annotations.
    pub hints: FieldHints,
}

impl AppState {
    /// Creates the controller with a freshly generated CAPTCHA.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            username: String::new(),
            password: String::new(),
            captcha_input: String::new(),
            show_password: false,
            phone: String::new(),
            sms_code: String::new(),
            captcha: CaptchaChallenge::generate(&mut thread_rng()),
            countdown: SmsCountdown::new(),
            sms_ticker: None,
            flow: LoginFlow::default(),
            toast: None,
            hints: FieldHints::default(),
        }
    }

    /// Switches the visible login form. Re-selecting the active tab is a
    /// no-op.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        tracing::debug!(?tab, "switching login tab");
        self.active_tab = tab;
    }

    /// Replaces the CAPTCHA with a fresh challenge.
    pub fn regenerate_captcha(&mut self) {
        self.captcha = CaptchaChallenge::generate(&mut thread_rng());
        tracing::debug!("captcha regenerated");
    }

    /// Simulates sending an SMS code and starts the resend countdown.
    ///
    /// Ignored while a countdown is running (the control is disabled then).
    /// An invalid phone number toasts an error and changes nothing.
    pub fn send_sms_code(&mut self, now: Instant) {
        if self.countdown.is_active() {
            return;
        }
        if !validation::is_valid_phone(self.phone.trim()) {
            self.notify("请输入正确的手机号码", Severity::Error, now);
            return;
        }

        self.countdown.start();
        self.sms_ticker = Some(Ticker::every(now, Duration::from_secs(1)));
        tracing::info!(phone = %mask_phone(self.phone.trim()), "simulated sms code sent");
        self.notify("验证码已发送，请注意查收", Severity::Success, now);
    }

    /// Validates the active form and, on success, starts the submit flow.
    ///
    /// A failed validation toasts the first violated rule; a CAPTCHA
    /// mismatch additionally regenerates the challenge.
    pub fn submit(&mut self, now: Instant) {
        if self.flow.is_busy() {
            return;
        }

        let result = match self.active_tab {
            Tab::Account => validation::validate_account(
                &AccountForm {
                    username: &self.username,
                    password: &self.password,
                    captcha: &self.captcha_input,
                },
                &self.captcha,
            ),
            Tab::Phone => validation::validate_phone_form(&PhoneForm {
                phone: &self.phone,
                sms_code: &self.sms_code,
            }),
        };

        match result {
            Ok(()) => {
                tracing::info!(tab = ?self.active_tab, "login submitted");
                self.flow.begin(now);
            }
            Err(err) => {
                tracing::debug!(%err, "login rejected");
                if err == ValidationError::CaptchaMismatch {
                    self.regenerate_captcha();
                }
                self.notify(err.to_string(), Severity::Error, now);
            }
        }
    }

    /// Advances every timer. Called once per frame.
    pub fn poll(&mut self, now: Instant) {
        if let Some(ticker) = &mut self.sms_ticker {
            for _ in 0..ticker.poll(now) {
                if self.countdown.tick() == 0 {
                    tracing::debug!("sms countdown finished");
                    break;
                }
            }
            if !self.countdown.is_active() {
                self.sms_ticker = None;
            }
        }

        match self.flow.poll(now) {
            Some(FlowEvent::Succeeded) => {
                self.notify("登录成功！正在跳转...", Severity::Success, now);
            }
            Some(FlowEvent::HandOffDue) => {
                // Navigation target is out of scope; the flow just returns
                // to idle.
                tracing::info!("login finished; hand-off to the ticketing home is stubbed");
            }
            None => {}
        }

        if let Some(toast) = &self.toast {
            if toast.expired(now) {
                self.toast = None;
            }
        }
    }

    /// Shows a toast, replacing any toast currently visible.
    pub fn notify(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.toast = Some(Toast::new(text, severity, now));
    }

    /// Username field lost focus; refresh its inline annotation.
    pub fn username_blurred(&mut self) {
        self.hints.username = validation::username_hint(&self.username);
    }

    /// Phone field lost focus; refresh its inline annotation.
    pub fn phone_blurred(&mut self) {
        self.hints.phone = validation::phone_hint(&self.phone);
    }

    /// Password field changed; refresh its inline annotation.
    pub fn password_edited(&mut self) {
        self.hints.password = validation::password_hint(&self.password);
    }

    /// True while the submit control must appear busy.
    pub fn is_busy(&self) -> bool {
        self.flow.is_busy()
    }

    /// True while any timer is pending and the frame loop must keep
    /// scheduling repaints.
    pub fn has_pending_timers(&self) -> bool {
        self.sms_ticker.is_some() || !self.flow.is_idle() || self.toast.is_some()
    }

    /// Cancels all pending timers. Called on window teardown so nothing
    /// outlives the session.
    pub fn cancel_timers(&mut self) {
        if let Some(ticker) = &mut self.sms_ticker {
            ticker.cancel();
        }
        self.sms_ticker = None;
        self.countdown.cancel();
        self.flow.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the middle digits out of the logs.
fn mask_phone(phone: &str) -> String {
    if phone.len() == 11 && phone.is_ascii() {
        format!("{}****{}", &phone[..3], &phone[7..])
    } else {
        phone.to_string()
    }
}
