//! # Shiori - a typed AniList client pipeline
//!
//! Shiori turns the public AniList GraphQL API into plain, immutable Rust
//! values. Every screen of a catalog app repeats the same three steps, and
//! this crate provides each of them:
//!
//! 1. **Query** ([`query`]): named GraphQL documents with typed variables and
//!    response DTOs. Unset optional variables are omitted, never sent as `null`.
//! 2. **Repository** ([`repository`]): one call per intent ("trending anime,
//!    page 2", "favourite character 501"), returning an [`Outcome`].
//! 3. **Paging** ([`paging`]): a key-based page loader wrapping any
//!    `(page, per_page)` repository method, plus a small [`Pager`](paging::Pager).
//!
//! ## Features
//!
//! - **Total mapping**: server fields that are null or missing become sentinels
//!   ([`model::UNKNOWN`], `""`, empty lists) at one boundary ([`mapping`])
//! - **Unknown-safe enums**: unrecognized server values land on `Unknown`
//! - **Notification sum type**: one variant per notification kind, with filter
//!   categories decided by a single exhaustive match
//! - **Immutable sessions**: a token change builds a new client instead of
//!   mutating a shared one ([`session`])
//! - **Observable settings**: TOML-backed, published over a watch channel
//!   ([`settings`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shiori::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> shiori::Result<()> {
//!     let config = ClientConfig::default().with_env_overrides()?;
//!     let repositories = Repositories::new(Arc::new(Session::new(config)?));
//!
//!     match repositories.home.trending(MediaType::Anime, 1, 10).await {
//!         Outcome::Success(media) => {
//!             for entry in media {
//!                 println!("{}", entry.display_title(TitleFormat::UserPreferred));
//!             }
//!         }
//!         Outcome::Failure(message) => eprintln!("{message}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Updating Progress
//!
//! ```rust,no_run
//! # use shiori::prelude::*;
//! # async fn example(repositories: Repositories) {
//! let media = match repositories.media.details(154587).await {
//!     Outcome::Success(media) => media,
//!     Outcome::Failure(message) => return eprintln!("{message}"),
//! };
//!
//! // Reaching the last episode marks the entry completed.
//! let update = ListEntryUpdateBuilder::default()
//!     .progress(media.total())
//!     .build()
//!     .unwrap();
//! let saved = repositories
//!     .media
//!     .save_list_entry(media.id, media.total(), media.list_entry.as_ref(), update)
//!     .await;
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`net`]: the [`Transport`] seam and its reqwest implementation
//! - [`query`]: GraphQL documents, variables and DTOs
//! - [`mapping`]: DTO to domain conversion
//! - [`model`]: domain values
//! - [`repository`]: per-area repositories returning [`Outcome`]
//! - [`paging`]: key-based paging adapter
//! - [`config`], [`session`], [`settings`]: credentials and preferences
//! - [`error`]: the internal error type

pub mod config;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod model;
pub mod net;
pub mod outcome;
pub mod paging;
pub mod query;
pub mod repository;
pub mod season;
pub mod session;
pub mod settings;
pub mod tracking;
pub mod types;

/// Prelude module for convenient imports.
///
/// ```rust
/// use shiori::prelude::*;
///
/// // Now you have access to:
/// // - Repositories and each repository type
/// // - Outcome, Session, ClientConfig
/// // - Media, MediaType, NotificationFilter and the other common model types
/// // - SearchFilters, ListEntryUpdate and their builders
/// ```
pub mod prelude {
    pub use crate::{
        config::{ClientConfig, ClientConfigBuilder},
        model::{
            CharacterDetail, Media, MediaFormat, MediaListEntry, MediaListStatus, MediaSeason,
            MediaSort, MediaStatus, MediaType, Notification, NotificationFilter, StaffDetail,
            StudioDetail, TitleFormat, UserSettings, Viewer,
        },
        net::Transport,
        outcome::Outcome,
        paging::{Pager, PagingSource, RepositoryPagingSource},
        repository::{
            CharacterRepository, FavouriteTarget, HomeRepository, MediaRepository,
            NotificationRepository, Repositories, StaffRepository, StudioRepository,
            UserRepository,
        },
        session::Session,
        settings::SettingsStore,
        types::{ListEntryUpdate, ListEntryUpdateBuilder, SearchFilters, SearchFiltersBuilder},
    };
}

// Re-export main types at crate root for direct access
pub use error::{Error, Result};
pub use net::{GraphQlClient, Transport};
pub use outcome::Outcome;
pub use repository::Repositories;
pub use session::Session;
