//! Request validation helpers
//!
//! DTO fields arrive as options so that a missing field is reported with
//! its name instead of a generic deserialization failure.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::AppError;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// A present, non-blank string
pub fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(AppError::BadRequest(format!("{} must not be blank", field))),
        None => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

/// A present value of any type
pub fn present<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
}

pub fn email(field: &str, value: Option<String>) -> Result<String, AppError> {
    let value = required(field, value)?;
    if !email_pattern().is_match(&value) {
        return Err(AppError::BadRequest(format!(
            "{} must be a valid email address",
            field
        )));
    }
    Ok(value)
}

pub fn positive(field: &str, value: Option<i32>) -> Result<i32, AppError> {
    let value = present(field, value)?;
    if value <= 0 {
        return Err(AppError::BadRequest(format!("{} must be positive", field)));
    }
    Ok(value)
}

/// The id in the path must match the id in the body
pub fn matching_id(path_id: i64, body_id: Option<i64>) -> Result<(), AppError> {
    if body_id != Some(path_id) {
        return Err(AppError::BadRequest(
            "ID in path and body do not match".to_string(),
        ));
    }
    Ok(())
}
