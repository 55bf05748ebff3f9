//! Client-side form validation
//!
//! Rules run before any request is issued; violations are reported per field
//! and rendered inline next to the offending input.

use std::fmt;

use crate::types::{LoginRequest, ProfileUpdate, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 2;
pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 15;
pub const OTP_LEN: usize = 6;

/// Field name → message, in the order the fields appear on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. Only the first error per field is kept.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Drop the error for a field (the user started typing again).
    pub fn clear(&mut self, field: &str) {
        self.0.retain(|(name, _)| *name != field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, msg)| (*name, msg.as_str()))
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, msg) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", msg)?;
            first = false;
        }
        Ok(())
    }
}

/// Loose email check: `local@domain.tld`, no whitespace, one `@`.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// 10 to 15 characters of digits, `+`, `-` or spaces.
pub fn is_phone(value: &str) -> bool {
    let len = value.chars().count();
    (MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&len)
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
}

pub fn validate_login(req: &LoginRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if req.email.is_empty() {
        errors.add("login", "Email or phone number is required");
    } else if !is_email(&req.email) && !is_phone(&req.email) {
        errors.add("login", "Please enter a valid email or phone number");
    }

    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 8 characters");
    }

    errors.into_result()
}

pub fn validate_register(req: &RegisterRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if req.name.chars().count() < MIN_NAME_LEN {
        errors.add("name", "Name must be at least 2 characters");
    }
    if !is_email(&req.email) {
        errors.add("email", "Please enter a valid email");
    }
    if req.phone.chars().count() < MIN_PHONE_LEN {
        errors.add("phone", "Phone number must be at least 10 digits");
    }

    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", "Password must be at least 8 characters");
    } else if !req.password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.add("password", "Must contain at least one uppercase letter");
    } else if !req.password.chars().any(|c| c.is_ascii_digit()) {
        errors.add("password", "Must contain at least one number");
    }

    errors.into_result()
}

/// Parse a one-time password: exactly six digits.
pub fn parse_otp(value: &str) -> Result<u32, FieldErrors> {
    let value = value.trim();
    if value.len() == OTP_LEN && value.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(otp) = value.parse() {
            return Ok(otp);
        }
    }
    let mut errors = FieldErrors::new();
    errors.add("otp", "OTP must be 6 digits");
    Err(errors)
}

pub fn validate_profile(update: &ProfileUpdate) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if update.name.trim().is_empty() {
        errors.add("name", "Name is required");
    }

    if update.email.trim().is_empty() {
        errors.add("email", "Email is required");
    } else if !is_email(&update.email) {
        errors.add("email", "Please enter a valid email");
    }

    errors.into_result()
}
