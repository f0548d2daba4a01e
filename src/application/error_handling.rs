// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → UI responses the display layer can present
// - Provides one consistent error format for toasts and form field errors
// - Logs errors for debugging

use log::error;
use serde::{Deserialize, Serialize};

use super::dto::FormErrors;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
    /// Per-field messages for form validation failures
    pub field_errors: FormErrors,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Rejected locally, nothing was sent
    Validation,

    /// Loading the catalog or a movie failed
    Fetch,

    /// Create, update or delete failed at the backend
    Submission,

    /// Domain invariant violation
    DomainError,

    /// Configuration or serialization problem
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
            field_errors: FormErrors::new(),
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(message) => Self::new(ErrorType::Validation, message, None),

            AppError::Fetch(message) => Self::new(ErrorType::Fetch, message, None),

            AppError::Submission(message) => Self::new(ErrorType::Submission, message, None),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Config(message) => {
                error!("Configuration error: {}", message);
                Self::new(
                    ErrorType::Internal,
                    "Catalog is not configured correctly",
                    Some(message),
                )
            }
        }
    }

    /// Form submission rejected before reaching the backend
    pub fn from_form_errors(field_errors: FormErrors) -> Self {
        Self {
            field_errors,
            ..Self::new(ErrorType::Validation, "Please correct the highlighted fields", None)
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.error_type, ErrorType::Validation | ErrorType::DomainError)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} ({})", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}
