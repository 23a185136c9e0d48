//! # API Error Type
//!
//! Unified error type for desktop commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Cost Per Wear                          │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"cmd":"add_item", ...}                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON args? ──── serde_json::Error ──────────┐              │  │
//! │  │         │                                        │              │  │
//! │  │         ▼                                        ▼              │  │
//! │  │  Form invalid? ───── ValidationError ────────── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"id":7,"error":{"code":"VALIDATION_ERROR","message":"name is ..."}}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Updating or deleting an unknown id is not an error; those commands
//! return the unchanged inventory.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;
use wardrobe_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "cost is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum ErrorCode {
    /// Item not found
    NotFound,

    /// Form input validation failed
    ValidationError,

    /// No command with that name
    UnknownCommand,

    /// Request line or arguments could not be decoded
    InvalidRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown command error.
    pub fn unknown_command(cmd: &str) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, format!("Unknown command: {}", cmd))
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Item", &id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}
