use regex::Regex;
use std::sync::OnceLock;

use super::UserError;
use crate::models::UserPayload;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(?:\.[^@\s.]+)+$").expect("Invalid email regex")
    })
}

pub fn validate_username(username: &str) -> Result<&str, UserError> {
    if username.trim().is_empty() {
        return Err(UserError::Validation("Username cannot be empty".to_string()));
    }
    Ok(username)
}

pub fn validate_full_name(full_name: &str) -> Result<&str, UserError> {
    if full_name.trim().is_empty() {
        return Err(UserError::Validation("Full name cannot be empty".to_string()));
    }
    Ok(full_name)
}

pub fn validate_email(email: &str) -> Result<&str, UserError> {
    if email.is_empty() {
        return Err(UserError::Validation("Email cannot be empty".to_string()));
    }

    if !email_regex().is_match(email) {
        return Err(UserError::Validation(format!(
            "Invalid email address: {email}"
        )));
    }
    Ok(email)
}

pub fn validate_user_payload(payload: &UserPayload) -> Result<(), UserError> {
    validate_username(&payload.username)?;
    validate_email(&payload.email)?;
    validate_full_name(&payload.full_name)?;
    Ok(())
}
