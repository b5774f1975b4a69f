//! Form validation for login and account screens

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_CREDENTIAL_LEN: usize = 3;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));

static PHONE_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\d+]").expect("valid strip regex"));

pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if username.chars().count() < MIN_CREDENTIAL_LEN
        || password.chars().count() < MIN_CREDENTIAL_LEN
    {
        return Err(ValidationError::TooShort(MIN_CREDENTIAL_LEN));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks a replacement address and returns it trimmed.
pub fn validate_new_email(new_email: &str, current_email: &str) -> Result<String, ValidationError> {
    let email = new_email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if email.to_lowercase() == current_email.to_lowercase() {
        return Err(ValidationError::SameEmail);
    }
    Ok(email.to_string())
}

/// Keeps digits and `+` only.
pub fn normalize_phone(phone: &str) -> String {
    PHONE_STRIP_RE.replace_all(phone, "").into_owned()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Checks a replacement number and returns it normalised.
pub fn validate_new_phone(new_phone: &str, current_phone: &str) -> Result<String, ValidationError> {
    let trimmed = new_phone.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::PhoneRequired);
    }

    let phone = normalize_phone(trimmed);
    if !is_valid_phone(&phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if phone == normalize_phone(current_phone) {
        return Err(ValidationError::SamePhone);
    }
    Ok(phone)
}
