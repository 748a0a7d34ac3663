//! Validation utilities for user input

use crate::core::error::{AppError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, mapping failures to [`AppError::Validation`].
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Run checks in order and return the first failure.
pub fn first_failure(checks: impl IntoIterator<Item = ValidationResult>) -> ValidationResult {
    checks
        .into_iter()
        .find(|check| !check.is_valid)
        .unwrap_or_else(ValidationResult::ok)
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.chars().count() < 6 {
        return ValidationResult::err("Password must be at least 6 characters");
    }

    ValidationResult::ok()
}

pub fn validate_full_name(full_name: &str) -> ValidationResult {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return ValidationResult::err("Full name is required");
    }

    if full_name.chars().count() < 2 {
        return ValidationResult::err("Full name must be at least 2 characters");
    }

    ValidationResult::ok()
}

/// Validate a phone number: 10 to 15 digits, spaces and a leading `+` allowed
pub fn validate_phone(phone: &str) -> ValidationResult {
    let phone = phone.trim();
    if phone.is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let digits = phone.strip_prefix('+').unwrap_or(phone).replace(' ', "");
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number can only contain digits");
    }

    if !(10..=15).contains(&digits.len()) {
        return ValidationResult::err("Phone number must be 10-15 digits");
    }

    ValidationResult::ok()
}

pub fn validate_address(address: &str) -> ValidationResult {
    let address = address.trim();
    if address.is_empty() {
        return ValidationResult::err("Shipping address is required");
    }

    if address.chars().count() < 10 {
        return ValidationResult::err("Shipping address must be at least 10 characters");
    }

    ValidationResult::ok()
}

/// Validate a non-empty field, naming it in the message
pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }
    ValidationResult::ok()
}

/// Validate a trimmed field has at least `min` characters
pub fn validate_min_length(value: &str, field: &str, min: usize) -> ValidationResult {
    let value = value.trim();
    if value.is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }

    if value.chars().count() < min {
        return ValidationResult::err(format!("{} must be at least {} characters", field, min));
    }

    ValidationResult::ok()
}

/// Parse a price typed into a form.
///
/// # Errors
///
/// `AppError::Validation` when the text is not a number or not above zero.
pub fn parse_price(text: &str) -> Result<f64> {
    let price: f64 = text
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("Price must be a number".to_string()))?;

    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::Validation("Price must be greater than 0".to_string()));
    }

    Ok(price)
}

/// Validate a stock import/export quantity
pub fn validate_stock_quantity(quantity: f64) -> ValidationResult {
    if !quantity.is_finite() || quantity <= 0.0 {
        return ValidationResult::err("Quantity must be greater than 0");
    }
    ValidationResult::ok()
}

/// Validate a review rating (1 to 5 stars)
pub fn validate_rating(rating: u8) -> ValidationResult {
    if !(1..=5).contains(&rating) {
        return ValidationResult::err("Rating must be between 1 and 5");
    }
    ValidationResult::ok()
}

/// Validate the registration form, reporting the first failing field
pub fn validate_registration(email: &str, password: &str, full_name: &str, phone: &str) -> ValidationResult {
    first_failure([
        validate_email(email),
        validate_password(password),
        validate_full_name(full_name),
        validate_phone(phone),
    ])
}
