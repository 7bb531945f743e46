//! Centralized error types for Clubhouse.
//!
//! Uses `thiserror` for ergonomic error definitions. Authorization denial is
//! never an error — every permission check returns a plain `bool`, and the
//! leadership workflow folds precondition failures into `Ok(false)`. Errors
//! here cover validation, missing resources, and collaborator I/O only.

/// Core application error type used across all Clubhouse crates.
#[derive(Debug, thiserror::Error)]
pub enum ClubError {
    // === Resource errors ===
    #[error("{resource} not found")]
    NotFound { resource: String },

    // === Validation errors ===
    #[error("Validation failed: {message}")]
    Validation { message: String },

    // === Permission errors ===
    #[error("Missing permission: {permission}")]
    MissingPermission { permission: String },

    // === Infrastructure errors ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClubError {
    /// Error code string for programmatic handling by callers.
    pub fn error_code(&self) -> &str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::MissingPermission { .. } => "MISSING_PERMISSION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convenience type alias for Results using ClubError.
pub type ClubResult<T> = Result<T, ClubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ClubError::NotFound {
            resource: "user".into(),
        };
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "user not found");

        let err = ClubError::MissingPermission {
            permission: "CreateClubs".into(),
        };
        assert_eq!(err.error_code(), "MISSING_PERMISSION");
    }
}
