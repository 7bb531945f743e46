//! Input validation utilities.
//!
//! Centralized validation helpers used by callers before handing request
//! bodies to the domain layer.

use validator::Validate;

use crate::error::ClubError;

/// Validate a request body, returning a ClubError::Validation on failure.
pub fn validate_request<T: Validate>(body: &T) -> Result<(), ClubError> {
    body.validate().map_err(|e| ClubError::Validation {
        message: format_validation_errors(e),
    })
}

/// Format validation errors into a human-readable string.
fn format_validation_errors(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate that a string is a safe club/event name.
pub fn validate_name(name: &str) -> Result<(), ClubError> {
    if name.trim().is_empty() {
        return Err(ClubError::Validation {
            message: "Name cannot be empty or whitespace only".into(),
        });
    }

    let valid = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == ' ');

    if !valid {
        return Err(ClubError::Validation {
            message: "Name can only contain letters, numbers, hyphens, underscores, and spaces"
                .into(),
        });
    }

    Ok(())
}
