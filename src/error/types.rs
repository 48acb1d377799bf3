// src/error/types.rs
use crate::domain::{DomainError, ValidationReport};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Form input rejected before anything was sent
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Transport failure talking to the REST backend
    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Anything that went wrong on the way to or from the backend
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::ApiStatus { .. })
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
