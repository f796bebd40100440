//! # Registration Form Rules
//!
//! Field-level checks of the form page. Failures are data: every problem is a
//! [`FieldError`] and an empty list means the form can be submitted.

use std::sync::LazyLock;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_AGE: u32 = 120;

static EMAIL: LazyLock<regex::Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern must compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Terms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Signed so that negative input can be reported instead of failing to parse.
    pub age: Option<i64>,
    pub gender: String,
    pub interests: Vec<String>,
    pub country: String,
    pub bio: String,
    pub newsletter: bool,
    pub terms: bool,
}

impl RegistrationForm {
    /// Every failing field, at most one error each, in field order.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            required(Field::FirstName, &self.first_name, "First name is required"),
            required(Field::LastName, &self.last_name, "Last name is required"),
            self.check_email(),
            self.check_password(),
            self.check_confirm_password(),
            self.check_age(),
            (!self.terms).then(|| FieldError::new(Field::Terms, "You must accept the terms")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Adds the interest if absent, removes it otherwise.
    pub fn toggle_interest(&mut self, interest: &str) {
        match self.interests.iter().position(|i| i == interest) {
            Some(idx) => {
                self.interests.remove(idx);
            }
            None => self.interests.push(interest.to_string()),
        }
    }

    fn check_email(&self) -> Option<FieldError> {
        if self.email.is_empty() {
            return Some(FieldError::new(Field::Email, "Email is required"));
        }
        (!EMAIL.is_match(&self.email)).then(|| FieldError::new(Field::Email, "Invalid email address"))
    }

    fn check_password(&self) -> Option<FieldError> {
        if self.password.is_empty() {
            return Some(FieldError::new(Field::Password, "Password is required"));
        }
        (self.password.chars().count() < MIN_PASSWORD_LEN)
            .then(|| FieldError::new(Field::Password, "Password must be at least 8 characters"))
    }

    fn check_confirm_password(&self) -> Option<FieldError> {
        if self.confirm_password.is_empty() {
            return Some(FieldError::new(Field::ConfirmPassword, "Please confirm your password"));
        }
        (self.confirm_password != self.password)
            .then(|| FieldError::new(Field::ConfirmPassword, "Passwords do not match"))
    }

    fn check_age(&self) -> Option<FieldError> {
        match self.age {
            Some(age) if age < 0 => Some(FieldError::new(Field::Age, "Age must be positive")),
            Some(age) if age > i64::from(MAX_AGE) => {
                Some(FieldError::new(Field::Age, "Age must be less than 120"))
            }
            _ => None,
        }
    }
}

fn required(field: Field, value: &str, message: &'static str) -> Option<FieldError> {
    value.is_empty().then(|| FieldError::new(field, message))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
