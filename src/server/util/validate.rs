//! Field validators applied by the services before anything reaches the database.
//!
//! Each validator returns `AppError::BadRequest` carrying the message shown to the client.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

use crate::server::error::AppError;

pub const PASSWORD_MESSAGE: &str = "Password must contain minimum 8 characters, at least one letter, one number and one special character";

const PASSWORD_SPECIALS: &str = "@$!%*#?&";

static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\d@$!%*#?&]{8,}$").expect("valid password regex"));

static CUSTOMER_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Clinic staff addresses, e.g. `jane.doe@vet.com`.
static VETERINARIAN_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]+[._-])*[A-Za-z0-9]+@vet\.com$").expect("valid vet email regex")
});

/// At least 8 characters from `[A-Za-z0-9@$!%*#?&]` with a letter, a digit and a special.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let valid = PASSWORD_CHARSET.is_match(password)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if !valid {
        return Err(AppError::BadRequest(PASSWORD_MESSAGE.to_string()));
    }

    Ok(())
}

pub fn validate_customer_email(email: &str) -> Result<(), AppError> {
    if !CUSTOMER_EMAIL.is_match(email) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(())
}

pub fn validate_veterinarian_email(email: &str) -> Result<(), AppError> {
    if email.len() > 50 || !VETERINARIAN_EMAIL.is_match(email) {
        return Err(AppError::BadRequest("Invalid email".to_string()));
    }

    Ok(())
}

/// Contact numbers are stored without the leading zero, leaving exactly 9 digits.
pub fn validate_contact_number(contact_number: i64) -> Result<(), AppError> {
    if !(100_000_000..=999_999_999).contains(&contact_number) {
        return Err(AppError::BadRequest("Invalid contact number".to_string()));
    }

    Ok(())
}

/// Non-blank, and at most `max_len` characters when a limit is given.
pub fn validate_name(field: &str, value: &str, max_len: Option<usize>) -> Result<(), AppError> {
    let too_long = max_len.is_some_and(|max| value.chars().count() > max);

    if value.trim().is_empty() || too_long {
        return Err(AppError::BadRequest(format!("Invalid {}", field)));
    }

    Ok(())
}

/// Appointments start on the quarter hour.
pub fn validate_appointment_time(time: NaiveTime) -> Result<(), AppError> {
    let on_quarter = matches!(time.minute(), 0 | 15 | 30 | 45);

    if !on_quarter || time.second() != 0 || time.nanosecond() != 0 {
        return Err(AppError::BadRequest("Invalid time".to_string()));
    }

    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), AppError> {
    if age < 0 {
        return Err(AppError::BadRequest("Invalid age".to_string()));
    }

    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), AppError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(AppError::BadRequest("Invalid weight".to_string()));
    }

    Ok(())
}

/// Blank strings are stored as NULL.
pub fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
