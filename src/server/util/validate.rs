//! Input validation rules for motorcycles and accounts.

use std::sync::LazyLock;

use regex::Regex;

/// Inclusive range of accepted motorcycle model years.
pub const MIN_MODEL_YEAR: i32 = 2020;
pub const MAX_MODEL_YEAR: i32 = 2025;

pub const MIN_PASSWORD_LEN: usize = 5;

static PLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-\d{4}$").expect("plate pattern is a valid regex"));

/// Uppercases a plate so lookups and storage are case-insensitive.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

/// Checks an already normalized plate against the `AAA-9999` format.
pub fn is_valid_plate(plate: &str) -> bool {
    PLATE_RE.is_match(plate)
}

pub fn is_valid_year(year: i32) -> bool {
    (MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&year)
}

/// Minimal email check: non-empty and contains `@`.
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@')
}

/// Passwords are counted in characters, not bytes.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}
