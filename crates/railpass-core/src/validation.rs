//! Form and field validation rules.
//!
//! Two layers share these rules:
//!
//! - **Submit validation**: [`validate_account`] / [`validate_phone_form`]
//!   check every rule in a fixed order and report the first violation as a
//!   [`ValidationError`], whose display text is the user-facing message.
//! - **Field hints**: [`username_hint`], [`phone_hint`] and
//!   [`password_hint`] back the inline annotations shown while typing.
//!   They are advisory only and never block a submission.
//!
//! ## Usage
//!
//! ```
//! use railpass_core::validation;
//!
//! assert!(validation::is_valid_phone("13812345678"));
//! assert!(!validation::is_valid_phone("12345"));
//! ```

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::captcha::CaptchaChallenge;

/// Minimum username length for the inline hint.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length for the inline hint.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The code every simulated SMS "delivers".
pub const SMS_CODE_PLACEHOLDER: &str = "123456";

/// Mainland mobile number: 11 digits, leading 1, second digit 3-9.
const PHONE_PATTERN: &str = r"^1[3-9]\d{9}$";

fn phone_regex() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    PHONE_RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Returns true if `phone` is a well-formed mobile number.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Account-login fields, read at validation time and not retained.
#[derive(Debug, Clone, Copy)]
pub struct AccountForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
    /// What the user typed into the CAPTCHA field.
    pub captcha: &'a str,
}

/// Phone-login fields, read at validation time and not retained.
#[derive(Debug, Clone, Copy)]
pub struct PhoneForm<'a> {
    pub phone: &'a str,
    pub sms_code: &'a str,
}

/// The first rule a submission violates.
///
/// Display text is the message shown to the user, one per attempt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Username field is empty.
    #[error("请输入用户名")]
    UsernameRequired,

    /// Password field is empty.
    #[error("请输入密码")]
    PasswordRequired,

    /// CAPTCHA field is empty.
    #[error("请输入验证码")]
    CaptchaRequired,

    /// CAPTCHA entry does not match the challenge. The caller regenerates
    /// the challenge on this variant.
    #[error("验证码错误")]
    CaptchaMismatch,

    /// Phone number fails the pattern.
    #[error("请输入正确的手机号码")]
    PhoneInvalid,

    /// SMS code field is empty.
    #[error("请输入短信验证码")]
    SmsCodeRequired,

    /// SMS code does not match the simulated delivery.
    #[error("短信验证码错误")]
    SmsCodeMismatch,
}

/// Validates an account-login submission against the current CAPTCHA.
///
/// Rules run in a fixed order; the first violation is returned. Values are
/// trimmed before checking.
pub fn validate_account(
    form: &AccountForm<'_>,
    challenge: &CaptchaChallenge,
) -> Result<(), ValidationError> {
    let username = form.username.trim();
    let password = form.password.trim();
    let captcha = form.captcha.trim();

    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if captcha.is_empty() {
        return Err(ValidationError::CaptchaRequired);
    }
    if !challenge.verify(captcha) {
        return Err(ValidationError::CaptchaMismatch);
    }

    Ok(())
}

/// Validates a phone-login submission.
///
/// Rules run in a fixed order; the first violation is returned. Values are
/// trimmed before checking.
pub fn validate_phone_form(form: &PhoneForm<'_>) -> Result<(), ValidationError> {
    let phone = form.phone.trim();
    let sms_code = form.sms_code.trim();

    if !is_valid_phone(phone) {
        return Err(ValidationError::PhoneInvalid);
    }
    if sms_code.is_empty() {
        return Err(ValidationError::SmsCodeRequired);
    }
    if sms_code != SMS_CODE_PLACEHOLDER {
        return Err(ValidationError::SmsCodeMismatch);
    }

    Ok(())
}

/// Inline hint for the username field, checked when it loses focus.
///
/// Empty input gets no hint; the submit validator owns the required check.
pub fn username_hint(value: &str) -> Option<&'static str> {
    let value = value.trim();
    (!value.is_empty() && value.chars().count() < MIN_USERNAME_LENGTH)
        .then_some("用户名至少3个字符")
}

/// Inline hint for the phone field, checked when it loses focus.
pub fn phone_hint(value: &str) -> Option<&'static str> {
    let value = value.trim();
    (!value.is_empty() && !is_valid_phone(value)).then_some("请输入正确的手机号码")
}

/// Inline hint for the password field, checked on every edit.
pub fn password_hint(value: &str) -> Option<&'static str> {
    (!value.is_empty() && value.chars().count() < MIN_PASSWORD_LENGTH).then_some("密码至少6个字符")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captcha::CaptchaChallenge;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn challenge() -> CaptchaChallenge {
        let mut rng = StdRng::seed_from_u64(7);
        CaptchaChallenge::generate(&mut rng)
    }

    // ==================== Phone Pattern Tests ====================

    #[test]
    fn phone_accepts_well_formed_numbers() {
        assert!(is_valid_phone("13812345678"));
        assert!(is_valid_phone("15900000000"));
        assert!(is_valid_phone("19912345678"));
    }

    #[test]
    fn phone_rejects_short_input() {
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn phone_rejects_invalid_leading_digits() {
        assert!(!is_valid_phone("23812345678"));
        assert!(!is_valid_phone("10812345678"));
        assert!(!is_valid_phone("12812345678"));
    }

    #[test]
    fn phone_rejects_trailing_garbage() {
        assert!(!is_valid_phone("138123456789"));
        assert!(!is_valid_phone("1381234567a"));
    }

    // ==================== Account Form Tests ====================

    #[test]
    fn account_passes_with_matching_captcha() {
        let challenge = challenge();
        let typed = challenge.code().to_lowercase();
        let form = AccountForm {
            username: "traveler",
            password: "secret99",
            captcha: &typed,
        };
        assert_eq!(validate_account(&form, &challenge), Ok(()));
    }

    #[test]
    fn account_rules_run_in_fixed_order() {
        let challenge = challenge();

        let form = AccountForm {
            username: "  ",
            password: "",
            captcha: "",
        };
        assert_eq!(
            validate_account(&form, &challenge),
            Err(ValidationError::UsernameRequired)
        );

        let form = AccountForm {
            username: "traveler",
            password: "",
            captcha: "",
        };
        assert_eq!(
            validate_account(&form, &challenge),
            Err(ValidationError::PasswordRequired)
        );

        let form = AccountForm {
            username: "traveler",
            password: "secret99",
            captcha: "",
        };
        assert_eq!(
            validate_account(&form, &challenge),
            Err(ValidationError::CaptchaRequired)
        );
    }

    #[test]
    fn account_mismatched_captcha_is_reported() {
        let challenge = challenge();
        let form = AccountForm {
            username: "traveler",
            password: "secret99",
            captcha: "----",
        };
        assert_eq!(
            validate_account(&form, &challenge),
            Err(ValidationError::CaptchaMismatch)
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ValidationError::UsernameRequired.to_string(), "请输入用户名");
        assert_eq!(ValidationError::CaptchaMismatch.to_string(), "验证码错误");
    }

    // ==================== Phone Form Tests ====================

    #[test]
    fn phone_form_passes_with_placeholder_code() {
        let form = PhoneForm {
            phone: "13812345678",
            sms_code: "123456",
        };
        assert_eq!(validate_phone_form(&form), Ok(()));
    }

    #[test]
    fn phone_form_checks_number_first() {
        let form = PhoneForm {
            phone: "12345",
            sms_code: "",
        };
        assert_eq!(validate_phone_form(&form), Err(ValidationError::PhoneInvalid));
    }

    #[test]
    fn phone_form_rejects_wrong_code() {
        let form = PhoneForm {
            phone: "13812345678",
            sms_code: "",
        };
        assert_eq!(
            validate_phone_form(&form),
            Err(ValidationError::SmsCodeRequired)
        );

        let form = PhoneForm {
            phone: "13812345678",
            sms_code: "654321",
        };
        assert_eq!(
            validate_phone_form(&form),
            Err(ValidationError::SmsCodeMismatch)
        );
    }

    // ==================== Field Hint Tests ====================

    #[test]
    fn username_hint_only_for_short_nonempty_input() {
        assert_eq!(username_hint(""), None);
        assert_eq!(username_hint("   "), None);
        assert_eq!(username_hint("ab"), Some("用户名至少3个字符"));
        assert_eq!(username_hint("abc"), None);
    }

    #[test]
    fn username_hint_counts_characters_not_bytes() {
        // Three CJK characters are three characters, not nine bytes.
        assert_eq!(username_hint("张小明"), None);
        assert_eq!(username_hint("张明"), Some("用户名至少3个字符"));
    }

    #[test]
    fn phone_hint_only_for_malformed_nonempty_input() {
        assert_eq!(phone_hint(""), None);
        assert_eq!(phone_hint("12345"), Some("请输入正确的手机号码"));
        assert_eq!(phone_hint("13812345678"), None);
    }

    #[test]
    fn password_hint_only_for_short_nonempty_input() {
        assert_eq!(password_hint(""), None);
        assert_eq!(password_hint("12345"), Some("密码至少6个字符"));
        assert_eq!(password_hint("123456"), None);
    }
}
