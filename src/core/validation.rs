use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::credentials::{self, MAX_PASSWORD_BYTES};
use crate::core::errors::UserError;
use crate::core::models::user::User;

static MOBILE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{9}$").expect("mobile number pattern compiles"));
// ASCII word characters only (`\w` would admit Unicode letters). Matches the empty string as
// well; `EmailPolicy::Required` rejects that case separately.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4})?$")
        .expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailPolicy {
    /// An empty email is accepted; a non-empty one must be well formed.
    #[default]
    Optional,
    Required,
}

pub fn validate_username(username: &str) -> Result<(), UserError> {
    if username.trim().is_empty() {
        return Err(UserError::invalid_field(
            "username",
            "Invalid username",
            "Path `username` is required.".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_mobile_number(mobile_number: &str) -> Result<(), UserError> {
    if !MOBILE_NUMBER_REGEX.is_match(mobile_number) {
        return Err(UserError::invalid_field(
            "mobileNumber",
            "Invalid mobile number",
            format!(
                "The value of path mobileNumber ({}) is not a valid mobile number.",
                mobile_number
            ),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str, policy: EmailPolicy) -> Result<(), UserError> {
    if email.is_empty() && policy == EmailPolicy::Required {
        return Err(UserError::invalid_field(
            "email",
            "Invalid email",
            "Path `email` is required.".to_string(),
        ));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(UserError::invalid_field(
            "email",
            "Invalid email",
            format!("The value of path email ({}) is not a valid email.", email),
        ));
    }
    Ok(())
}

/// Only a pending plaintext is checked; a stored hash is never empty.
pub fn validate_password(user: &User) -> Result<(), UserError> {
    if !user.is_password_modified() {
        return Ok(());
    }
    if user.password().is_empty() {
        return Err(UserError::invalid_field(
            "password",
            "Invalid password",
            "Path `password` is required.".to_string(),
        ));
    }
    if user.password().len() > MAX_PASSWORD_BYTES {
        return Err(credentials::password_too_long(user.password()));
    }
    Ok(())
}

/// Runs every field validator, stopping at the first failure.
pub fn validate_user(user: &User, email_policy: EmailPolicy) -> Result<(), UserError> {
    validate_username(&user.username)?;
    validate_mobile_number(&user.mobile_number)?;
    validate_email(&user.email, email_policy)?;
    validate_password(user)
}
