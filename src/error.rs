//! Error types and result handling for Shiori operations.
//!
//! This module defines the error type used *inside* the crate: by the GraphQL
//! transport, the configuration loader and the settings store. All of those
//! return a [`Result<T>`], a type alias for `std::result::Result<T, Error>`.
//!
//! Repositories never let an [`enum@Error`] escape. They convert every failure
//! into [`Outcome::Failure`](crate::outcome::Outcome::Failure) at their
//! boundary, so UI code only ever deals with a message string.
//!
//! # Error Categories
//!
//! - **Network Errors**: DNS, timeouts, connection resets, non-2xx statuses
//! - **JSON Errors**: Response bodies that do not match the expected shape
//! - **GraphQL Errors**: The `errors` array of an otherwise successful response
//! - **Missing Data**: A response with neither `data` nor `errors`
//! - **Configuration Errors**: Invalid endpoints, unreadable config files
//! - **IO / TOML Errors**: Settings persistence failures
//!
//! # Examples
//!
//! ```rust
//! use shiori::error::{Error, Result};
//!
//! fn check(token: &str) -> Result<()> {
//!     if token.is_empty() {
//!         return Err(Error::config("access token is empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! ```

use thiserror::Error;

/// Type alias for Results with Shiori errors.
///
/// # Examples
///
/// ```rust
/// use shiori::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("Success".to_string())
/// }
///
/// fn example_with_error() -> Result<()> {
///     Err(Error::missing_data("Page"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the transport, configuration and settings layers.
///
/// # Variants
///
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`Http`](Error::Http) - Non-success HTTP status without a GraphQL body
/// * [`Json`](Error::Json) - Response decoding errors
/// * [`GraphQl`](Error::GraphQl) - Schema-level errors reported by the server
/// * [`MissingData`](Error::MissingData) - Response without payload or errors
/// * [`Config`](Error::Config) - Invalid configuration
/// * [`Io`](Error::Io) - File system errors
/// * [`TomlDe`](Error::TomlDe) / [`TomlSer`](Error::TomlSer) - Settings file errors
/// * [`Other`](Error::Other) - Generic error messages
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// This variant wraps errors from the underlying HTTP client (reqwest):
    /// connection timeouts, DNS resolution failures, TLS errors and
    /// connection resets.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status and a body that is not a
    /// GraphQL response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// JSON serialization and deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema-level errors returned in the GraphQL `errors` array.
    ///
    /// The messages are kept in the order the server reported them and are
    /// displayed one per line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::GraphQl(vec!["Not Found.".into(), "Invalid token".into()]);
    /// assert_eq!(error.to_string(), "Not Found.\nInvalid token");
    /// ```
    #[error("{}", .0.join("\n"))]
    GraphQl(Vec<String>),

    /// A response carried neither a payload nor an error.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and IO operation errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings or configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error messages.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a configuration error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::Error;
    ///
    /// let error = Error::config("endpoint must use https");
    /// assert!(error.to_string().contains("https"));
    /// ```
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Creates a missing-data error naming the absent payload.
    pub fn missing_data(what: impl Into<String>) -> Self {
        Error::MissingData(what.into())
    }

    /// Creates an HTTP status error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Error::Http {
            status,
            message: message.into(),
        }
    }
}
