//! Registration draft validation
//!
//! Validation failures are data, not errors: `validate` always returns an
//! [`ErrorSet`], empty when every rule passed.

use super::draft::RegistrationDraft;
use super::field::Field;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
    // Country code of 1-3 digits followed by a 10 digit number, no separators
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+[0-9]{1,3}[0-9]{10}$").expect("phone pattern is valid");
    static ref PAN_REGEX: Regex =
        Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("PAN pattern is valid");
    static ref AADHAR_REGEX: Regex =
        Regex::new(r"^[0-9]{12}$").expect("Aadhar pattern is valid");
}

/// Per-field validation messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<Field, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in draft order
    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

/// Check every field of the draft and collect all failures
pub fn validate(draft: &RegistrationDraft) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if draft.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First Name is required");
    }
    if draft.last_name.trim().is_empty() {
        errors.insert(Field::LastName, "Last Name is required");
    }
    if draft.username.trim().is_empty() {
        errors.insert(Field::Username, "Username is required");
    }
    if !EMAIL_REGEX.is_match(&draft.email) {
        errors.insert(Field::Email, "Invalid email");
    }
    // Counted in characters (scalar values), not UTF-16 units
    if draft.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            Field::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
    if !PHONE_REGEX.is_match(&draft.phone) {
        errors.insert(
            Field::Phone,
            "Phone must include country code and 10 digits. E.g., +91xxxxxxxxxxx",
        );
    }
    if draft.country.is_none() {
        errors.insert(Field::Country, "Select a country");
    }
    if draft.city.is_empty() {
        errors.insert(Field::City, "Select a city");
    }
    if !PAN_REGEX.is_match(&draft.pan) {
        errors.insert(
            Field::Pan,
            "PAN format: 5 uppercase letters, 4 digits, 1 letter (e.g., ABCDE1234F)",
        );
    }
    if !AADHAR_REGEX.is_match(&draft.aadhar) {
        errors.insert(
            Field::Aadhar,
            "Aadhar must be exactly 12 digits with no spaces",
        );
    }

    errors
}
