// src/application/error_handling.rs
//
// Error Handling for the presentation layer
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Network failures are coarse; only validation carries per-field detail
// - Logs errors for debugging

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::BookField;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
    /// Per-field messages, only for validation failures
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<BookField, String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Form input rejected locally
    Validation,

    /// Backend unreachable or answered with an error status
    Network,

    /// Domain invariant violation
    DomainError,

    /// Bad configuration at startup
    Configuration,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Validation(report) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Please correct the highlighted fields".to_string(),
                details: None,
                field_errors: report.errors().clone(),
            },

            AppError::Network(_) | AppError::ApiStatus { .. } => {
                log::error!("Backend error: {}", error);

                Self::coarse(
                    ErrorType::Network,
                    "Could not reach the library server",
                    Some(error.to_string()),
                )
            }

            AppError::Domain(domain_error) => Self::coarse(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Config(message) => {
                Self::coarse(ErrorType::Configuration, "Invalid configuration", Some(message))
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self::coarse(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self::coarse(ErrorType::Internal, &message, None)
            }
        }
    }

    fn coarse(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
            field_errors: BTreeMap::new(),
        }
    }
}
