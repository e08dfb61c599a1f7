//! Domain objects.
//!
//! These are what repositories hand to callers. They are plain immutable
//! values built at the mapping boundary ([`crate::mapping`]); nothing here is
//! nullable except where absence is itself meaningful (a media entry that is
//! not on the viewer's list).
//!
//! Fields the server did not send hold a sentinel: [`UNKNOWN`] for numbers,
//! `""` for strings, an empty `Vec` for lists.

mod date;
mod enums;
mod media;
mod notification;
mod people;
mod studio;
mod user;

pub use date::FuzzyDate;
pub use enums::{
    CharacterRole, MediaFormat, MediaListStatus, MediaRelation, MediaSeason, MediaSort,
    MediaStatus, MediaType,
};
pub use media::{
    ExternalLink, Media, MediaListEntry, MediaTag, MediaTitle, NextAiring, RelatedMedia,
    StudioRef,
};
pub use notification::{
    ActivityEvent, MediaRef, Notification, NotificationFilter, NotificationKind,
    NotificationType, ThreadEvent, ThreadRef, UserRef,
};
pub use people::{
    Appearance, CharacterDetail, MediaCharacter, MediaStaff, PersonName, PersonRef, StaffDetail,
};
pub use studio::StudioDetail;
pub use user::{ListSort, Theme, TitleFormat, UserSettings, Viewer};

/// Sentinel for "not present in the response".
pub const UNKNOWN: i32 = -1;

/// A genre-independent tag definition, used by search filters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TagDefinition {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub is_adult: bool,
}
