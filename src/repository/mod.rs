//! Repositories: one per domain area, one remote call per method.
//!
//! Every method builds a typed operation, sends it through the shared
//! [`Transport`], and converts whatever comes back into an [`Outcome`]:
//!
//! | Response | Outcome |
//! |---|---|
//! | transport error | `Failure(error message)` |
//! | schema errors | `Failure(messages joined by "\n")` |
//! | payload present | `Success(mapped entity)` |
//! | no payload, no errors | `Failure("Network error")` |
//!
//! Nothing is retried and nothing is cached. Repositories are cheap to clone
//! and hold no mutable state.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shiori::prelude::*;
//!
//! # async fn example() -> shiori::Result<()> {
//! let session = Arc::new(Session::new(ClientConfig::default())?);
//! let repositories = Repositories::new(session);
//!
//! match repositories.home.trending(MediaType::Anime, 1, 20).await {
//!     Outcome::Success(media) => println!("{} trending", media.len()),
//!     Outcome::Failure(message) => eprintln!("{message}"),
//! }
//! # Ok(())
//! # }
//! ```

mod character;
mod favourite;
mod home;
mod media;
mod notification;
mod staff;
mod studio;
mod user;

pub use character::CharacterRepository;
pub use favourite::FavouriteTarget;
pub use home::HomeRepository;
pub use media::MediaRepository;
pub use notification::NotificationRepository;
pub use staff::StaffRepository;
pub use studio::StudioRepository;
pub use user::UserRepository;

use std::sync::Arc;

use crate::error::Error;
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::Operation;

/// Every repository, sharing one transport.
#[derive(Clone)]
pub struct Repositories {
    pub home: HomeRepository,
    pub media: MediaRepository,
    pub character: CharacterRepository,
    pub staff: StaffRepository,
    pub studio: StudioRepository,
    pub notification: NotificationRepository,
    pub user: UserRepository,
}

impl Repositories {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            home: HomeRepository::new(transport.clone()),
            media: MediaRepository::new(transport.clone()),
            character: CharacterRepository::new(transport.clone()),
            staff: StaffRepository::new(transport.clone()),
            studio: StudioRepository::new(transport.clone()),
            notification: NotificationRepository::new(transport.clone()),
            user: UserRepository::new(transport),
        }
    }
}

/// Runs `operation` and maps its payload with `map`.
///
/// `map` returning `None` means the payload lacked the field the caller
/// needed, which is reported like a missing payload.
pub(crate) async fn execute<O, T, F>(transport: &dyn Transport, operation: &O, map: F) -> Outcome<T>
where
    O: Operation,
    F: FnOnce(O::Data) -> Option<T>,
{
    let request = match operation.request() {
        Ok(request) => request,
        Err(e) => return Outcome::failure(e.to_string()),
    };

    let response = match transport.send(&request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(operation = O::NAME, error = %e, "Request failed");
            return Outcome::failure(e.to_string());
        }
    };

    let data = match response.into_data() {
        Ok(data) => data,
        Err(Error::MissingData(_)) => {
            tracing::warn!(operation = O::NAME, "Response carried no data");
            return Outcome::network_error();
        }
        Err(e) => {
            tracing::warn!(operation = O::NAME, error = %e, "Request returned errors");
            return Outcome::failure(e.to_string());
        }
    };

    match serde_json::from_value::<O::Data>(data) {
        Ok(data) => match map(data) {
            Some(value) => Outcome::Success(value),
            None => {
                tracing::warn!(operation = O::NAME, "Response payload was empty");
                Outcome::network_error()
            }
        },
        Err(e) => {
            tracing::warn!(operation = O::NAME, error = %e, "Response did not decode");
            Outcome::failure(e.to_string())
        }
    }
}
