//! Data-layer error type for the server side of the api crate.
//!
//! Server functions convert this into `ServerFnError` at the boundary; the
//! variants exist so internal helpers can say precisely what went wrong and
//! callers can branch on it before the message is flattened for the wire.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("not authenticated")]
    Unauthorized,

    #[error("account is inactive")]
    Inactive,

    #[error("{0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for a validation failure.
    pub fn invalid(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }
}

impl From<ApiError> for dioxus::prelude::ServerFnError {
    fn from(err: ApiError) -> Self {
        dioxus::prelude::ServerFnError::new(err.to_string())
    }
}
