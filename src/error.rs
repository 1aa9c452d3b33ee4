//! Application error type and its in-band rendering.
//!
//! Every failure is reported to the client inside a `200 OK` envelope, never
//! through the HTTP status. [`AppError`]'s [`IntoResponse`] impl is the outer
//! boundary that turns anything a handler could not handle into such an
//! envelope.

use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::api::envelope::{GenericApiResponse, ResponseCode};
use crate::api::serializer::render;

/// Message used for any failure the handlers did not anticipate.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error.";

/// Message used when the envelope could not be encoded.
pub const SERIALIZATION_FAILED: &str = "Converting object to JSON failed.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed client input.
    #[error("validation failed: {message}")]
    Validation { message: String, details: Value },

    /// The requested record does not exist.
    #[error("not found: {message}")]
    NotFound { message: String, details: Value },

    /// The store rejected or failed an operation.
    #[error("persistence failure: {message}")]
    Persistence { message: String, details: Value },

    /// A response could not be encoded as JSON.
    #[error("serialization failure: {message}")]
    Serialization { message: String },

    /// Anything else.
    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Whether the failure came from the store layer.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    /// Response code and client-facing message for this error.
    ///
    /// Client errors keep their own message under [`ResponseCode::Error`];
    /// server-side failures collapse to a generic message under
    /// [`ResponseCode::Exception`].
    pub fn outcome(&self) -> (ResponseCode, String) {
        match self {
            Self::Validation { message, .. } | Self::NotFound { message, .. } => {
                (ResponseCode::Error, message.clone())
            }
            Self::Serialization { .. } => {
                (ResponseCode::Exception, SERIALIZATION_FAILED.to_string())
            }
            Self::Persistence { .. } | Self::Internal { .. } => {
                (ResponseCode::Exception, INTERNAL_SERVER_ERROR.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::persistence(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::persistence("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation { details, .. } | AppError::NotFound { details, .. } => {
                tracing::warn!(error = %self, %details, "request rejected");
            }
            AppError::Persistence { details, .. } | AppError::Internal { details, .. } => {
                tracing::error!(error = %self, %details, "request failed");
            }
            AppError::Serialization { .. } => {
                tracing::error!(error = %self, "request failed");
            }
        }

        let (code, message) = self.outcome();
        render(GenericApiResponse::<Value>::failure(code, message), None).into_response()
    }
}
