//! Pure field validation for the settings form.
//!
//! `validate_field` returns an empty string for a valid value and a
//! human-readable message otherwise. The messages are part of the wire
//! contract of `PUT /api/settings`; handlers echo them verbatim.

use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^\d{5}$").unwrap();
}

/// Validate one form field by its camelCase name.
///
/// Every field is required; fields without a specific rule get only the
/// required check. Returns `""` when valid.
pub fn validate_field(field: &str, value: &str) -> String {
    if value.trim().is_empty() {
        return format!("{} is required.", field_label(field));
    }
    match field {
        "email" => {
            if EMAIL_REGEX.is_match(value) {
                String::new()
            } else {
                "Invalid email format.".to_string()
            }
        }
        "password" => {
            if value.chars().count() >= 8 {
                String::new()
            } else {
                "Password must be at least 8 characters.".to_string()
            }
        }
        "postalCode" => {
            if POSTAL_CODE_REGEX.is_match(value) {
                String::new()
            } else {
                "Postal code must be 5 digits.".to_string()
            }
        }
        "dateOfBirth" => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Err(_) => "Invalid date format.".to_string(),
            Ok(date) if date > Local::now().date_naive() => {
                "Date of birth cannot be in the future.".to_string()
            }
            Ok(_) => String::new(),
        },
        _ => String::new(),
    }
}

/// Humanize a camelCase field name for the required-message:
/// `postalCode` -> `Postal code`.
fn field_label(field: &str) -> String {
    let mut label = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}
