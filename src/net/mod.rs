//! GraphQL transport.
//!
//! This module provides the networking infrastructure for Shiori:
//!
//! - **[`Transport`]**: the seam repositories talk to. Tests swap in a fake.
//! - **[`GraphQlClient`]**: the reqwest-backed implementation, immutable and
//!   built from one [`ClientConfig`].
//! - **[`GraphQlRequest`] / [`RawResponse`]**: the wire envelope.
//!
//! There is no retry or backoff here: one call is one HTTP round trip. Retrying
//! is left to whoever displays the failure.
//!
//! # Examples
//!
//! ```rust,no_run
//! use shiori::config::ClientConfig;
//! use shiori::net::{GraphQlClient, GraphQlRequest, Transport};
//!
//! # async fn example() -> shiori::Result<()> {
//! let client = GraphQlClient::new(ClientConfig::default())?;
//! let request = GraphQlRequest::new(
//!     "Genres",
//!     "query Genres { GenreCollection }",
//!     serde_json::json!({}),
//! );
//! let response = client.send(&request).await?;
//! assert!(response.data.is_some());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// A GraphQL request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphQlRequest {
    /// Operation name, matching the name declared in `query`.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(operation_name: &'static str, query: &'static str, variables: Value) -> Self {
        Self {
            operation_name,
            query,
            variables,
        }
    }
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub status: Option<i32>,
}

/// A GraphQL response before the payload is decoded into typed DTOs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl RawResponse {
    /// A response carrying only a payload.
    pub fn data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// A response carrying only schema errors.
    pub fn errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: Some(
                messages
                    .into_iter()
                    .map(|message| GraphQlError {
                        message: message.into(),
                        status: None,
                    })
                    .collect(),
            ),
        }
    }

    /// Error messages in server order; empty when the response had none.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|error| error.message.clone())
            .collect()
    }

    /// The payload, or why there is none.
    ///
    /// Schema errors take precedence over a partial payload.
    pub fn into_data(self) -> Result<Value> {
        let messages = self.error_messages();
        if !messages.is_empty() {
            return Err(Error::GraphQl(messages));
        }
        self.data.ok_or_else(|| Error::missing_data("data"))
    }
}

/// Executes GraphQL requests.
///
/// Implementations must be safe to share between tasks. A returned `Err` is a
/// transport-level failure; schema errors travel inside [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse> {
        (**self).send(request).await
    }
}

/// HTTP implementation of [`Transport`].
///
/// The client is configured with:
/// - the timeout and User-Agent from its [`ClientConfig`]
/// - connection pooling (10 idle connections per host)
/// - compression support (gzip, brotli)
/// - an `Authorization` header only when a token is present
///
/// Nothing about a `GraphQlClient` changes after construction. To switch
/// accounts, build a new one (see [`Session`](crate::session::Session)).
#[derive(Clone, Debug)]
pub struct GraphQlClient {
    http: Client,
    config: Arc<ClientConfig>,
}

impl GraphQlClient {
    /// Builds a client for `config`.
    ///
    /// # Errors
    ///
    /// * [`Error::Config`] - If the configuration is invalid or the token
    ///   contains characters not allowed in a header
    /// * [`Error::Network`] - If the HTTP client cannot be constructed
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(bearer) = config.bearer() {
            let mut value = HeaderValue::from_str(&bearer)
                .map_err(|_| Error::config("access token is not a valid header value"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .pool_max_idle_per_host(10)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for GraphQlClient {
    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse> {
        let operation = request.operation_name;
        tracing::debug!(operation, "GraphQL request");

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        // AniList reports "Not Found." and validation failures with a 4xx
        // status and a regular GraphQL body, so decode before judging status.
        match serde_json::from_slice::<RawResponse>(&body) {
            Ok(raw) if raw.data.is_some() || raw.errors.is_some() => {
                if raw.errors.is_some() {
                    tracing::warn!(operation, status = status.as_u16(), "GraphQL errors");
                } else {
                    tracing::debug!(operation, status = %status, "GraphQL response received");
                }
                Ok(raw)
            }
            _ if !status.is_success() => {
                tracing::warn!(operation, status = status.as_u16(), "HTTP error");
                Err(Error::http(
                    status.as_u16(),
                    String::from_utf8_lossy(&body).trim().to_string(),
                ))
            }
            Ok(raw) => Ok(raw),
            Err(e) => Err(e.into()),
        }
    }
}
