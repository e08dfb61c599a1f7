//! Client configuration.
//!
//! A [`ClientConfig`] is immutable: changing the access token means building a
//! new config (see [`ClientConfig::with_access_token`]) and a new client from
//! it. Credentials never come from source code. They are read from the
//! settings store, a TOML file, or the `SHIORI_ACCESS_TOKEN` environment
//! variable.
//!
//! # Examples
//!
//! ```rust
//! use shiori::config::{ClientConfig, ClientConfigBuilder};
//!
//! let config = ClientConfigBuilder::default()
//!     .timeout_secs(10u64)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint.as_str(), "https://graphql.anilist.co/");
//! assert!(config.access_token.is_none());
//!
//! let signed_in = config.with_access_token(Some("token".to_string()));
//! assert_eq!(signed_in.bearer().as_deref(), Some("Bearer token"));
//! ```

use derive_builder::Builder;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use crate::error::{Error, Result};

/// Public AniList GraphQL endpoint.
pub const API_URL: &str = "https://graphql.anilist.co";

/// Environment variable consulted for the access token.
pub const TOKEN_ENV: &str = "SHIORI_ACCESS_TOKEN";

/// Environment variable consulted for an alternative endpoint.
pub const ENDPOINT_ENV: &str = "SHIORI_ENDPOINT";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("Shiori/", env!("CARGO_PKG_VERSION"));

static DEFAULT_ENDPOINT: Lazy<Url> =
    Lazy::new(|| Url::parse(API_URL).expect("API_URL is a valid URL"));

fn default_endpoint() -> Url {
    DEFAULT_ENDPOINT.clone()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Immutable configuration of one authenticated (or anonymous) session.
#[derive(Clone, Builder, Serialize, Deserialize, PartialEq, Eq)]
#[builder(setter(into))]
pub struct ClientConfig {
    /// GraphQL endpoint every request is posted to.
    #[builder(default = "default_endpoint()")]
    #[serde(default = "default_endpoint")]
    pub endpoint: Url,

    /// OAuth access token. Never serialized back to disk by this type.
    #[builder(default)]
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Whole-request timeout.
    #[builder(default = "default_timeout_secs()")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[builder(default = "default_user_agent()")]
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shiori::config::ClientConfig;
    ///
    /// let config = ClientConfig::from_toml_str(r#"
    ///     endpoint = "http://localhost:8080/graphql"
    ///     access_token = "abc"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.endpoint.port(), Some(8080));
    /// assert_eq!(config.timeout_secs, 30);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ClientConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Applies `SHIORI_ENDPOINT` and `SHIORI_ACCESS_TOKEN` when they are set.
    pub fn with_env_overrides(self) -> Result<Self> {
        let mut config = self;
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            config.endpoint = Url::parse(&endpoint)
                .map_err(|e| Error::config(format!("{}: {}", ENDPOINT_ENV, e)))?;
        }
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                config.access_token = Some(token.trim().to_string());
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Returns a new configuration carrying `token`, leaving `self` untouched.
    pub fn with_access_token(&self, token: Option<String>) -> Self {
        Self {
            access_token: token.filter(|t| !t.trim().is_empty()),
            ..self.clone()
        }
    }

    /// The `Authorization` header value, when a token is configured.
    pub fn bearer(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        match self.endpoint.scheme() {
            "https" | "http" => {}
            other => {
                return Err(Error::config(format!(
                    "unsupported endpoint scheme '{}'",
                    other
                )));
            }
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be positive"));
        }
        Ok(())
    }
}
