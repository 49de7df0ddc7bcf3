//! Error types for the 5paisa API client.
//!
//! This module provides a single error type covering every failure mode of
//! the client: caller bugs, cipher failures, server-side rejections, and
//! transport errors.

use thiserror::Error;

/// A specialized `Result` type for 5paisa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all 5paisa API operations.
///
/// Server-side business rejections surface as [`Error::Auth`] or
/// [`Error::NoData`] carrying the server's human-readable `Message`;
/// transport problems surface as [`Error::Http`]. Nothing is retried
/// internally — retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (timeout, connection reset, non-2xx with no
    /// parseable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required argument is missing, or a business call was attempted
    /// before authentication. Caller bug; never retried.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Key derivation or credential encryption failed
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// The server rejected credentials or a token; carries the server's
    /// `Message`
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// An empty token was passed to `set_access_token`
    #[error("Invalid access token")]
    InvalidToken,

    /// A list endpoint returned zero rows; carries the server's `Message`
    #[error("No data: {0}")]
    NoData(String),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_) | Error::InvalidToken)
    }

    /// Returns `true` if this error indicates a client-side issue that
    /// resending the same request cannot fix.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Precondition(_) | Error::Cipher(_) | Error::InvalidToken
        )
    }

    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        Error::Precondition(msg.into())
    }
}
