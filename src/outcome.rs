//! The two-variant result every repository returns.
//!
//! [`Outcome`] is the error-propagation contract between the repository layer
//! and everything above it: a payload on success, a human-readable message on
//! failure. Unlike [`crate::Result`] it carries no error *type*; callers show
//! the message and offer a retry.
//!
//! # Examples
//!
//! ```rust
//! use shiori::Outcome;
//!
//! let ok: Outcome<u32> = Outcome::Success(3);
//! let failed: Outcome<u32> = Outcome::failure("Network error");
//!
//! assert_eq!(ok.map(|n| n * 2), Outcome::Success(6));
//! assert_eq!(failed.message(), Some("Network error"));
//! ```

use serde::{Deserialize, Serialize};

/// Message used whenever no better description of a failure exists.
pub const NETWORK_ERROR: &str = "Network error";

/// Success with a payload, or failure with a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    /// Builds a failure, falling back to [`NETWORK_ERROR`] for blank messages.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Outcome::Failure(NETWORK_ERROR.to_string())
        } else {
            Outcome::Failure(message)
        }
    }

    /// The generic failure used when a response had no payload.
    pub fn network_error() -> Self {
        Outcome::Failure(NETWORK_ERROR.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    /// Returns the payload, if any.
    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(message) => Outcome::Failure(message.clone()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Converts into a standard `Result` with the message as the error.
    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

impl<T> From<crate::Result<T>> for Outcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::failure(error.to_string()),
        }
    }
}
