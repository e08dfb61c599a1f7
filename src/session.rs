//! Per-account transport handle.
//!
//! A [`Session`] owns the current [`GraphQlClient`]. Signing in or out builds a
//! brand new client from a new [`ClientConfig`] and swaps it in. Requests take
//! a snapshot of the client when they start, so an in-flight request keeps the
//! credentials it was issued with even if the token changes mid-flight.
//!
//! # Examples
//!
//! ```rust
//! use shiori::config::ClientConfig;
//! use shiori::session::Session;
//!
//! # fn example() -> shiori::Result<()> {
//! let session = Session::new(ClientConfig::default())?;
//! assert!(!session.is_authenticated());
//!
//! let before = session.client();
//! session.sign_in("secret-token")?;
//! assert!(session.is_authenticated());
//! assert!(!before.config().is_authenticated());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::model::UserSettings;
use crate::net::{GraphQlClient, GraphQlRequest, RawResponse, Transport};

/// Holds the active client and replaces it wholesale on credential changes.
#[derive(Debug)]
pub struct Session {
    current: RwLock<Arc<GraphQlClient>>,
}

impl Session {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            current: RwLock::new(Arc::new(GraphQlClient::new(config)?)),
        })
    }

    /// Builds a session from stored settings, taking the token from them.
    pub fn from_settings(base: &ClientConfig, settings: &UserSettings) -> Result<Self> {
        Self::new(base.with_access_token(settings.token()))
    }

    /// Snapshot of the client in use right now.
    pub fn client(&self) -> Arc<GraphQlClient> {
        self.current.read().clone()
    }

    pub fn config(&self) -> ClientConfig {
        self.client().config().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client().config().is_authenticated()
    }

    /// Replaces the client with one authenticated by `token`.
    pub fn sign_in(&self, token: impl Into<String>) -> Result<()> {
        self.replace(Some(token.into()))
    }

    /// Replaces the client with an anonymous one.
    pub fn sign_out(&self) -> Result<()> {
        self.replace(None)
    }

    fn replace(&self, token: Option<String>) -> Result<()> {
        let config = self.client().config().with_access_token(token);
        let client = Arc::new(GraphQlClient::new(config)?);
        *self.current.write() = client;
        tracing::info!(authenticated = self.is_authenticated(), "Session client replaced");
        Ok(())
    }
}

#[async_trait]
impl Transport for Session {
    async fn send(&self, request: &GraphQlRequest) -> Result<RawResponse> {
        let client = self.client();
        client.send(request).await
    }
}
