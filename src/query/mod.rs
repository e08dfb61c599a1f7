//! Typed GraphQL operations.
//!
//! Each operation is a struct holding its variables. Serializing it yields the
//! `variables` object; `None` fields and empty lists are skipped, so an unset
//! optional argument is never sent as `null`. The associated [`Operation::Data`]
//! is the DTO the `data` payload decodes into.
//!
//! # Examples
//!
//! ```rust
//! use shiori::query::{MediaPageQuery, Operation};
//!
//! let query = MediaPageQuery {
//!     page: Some(2),
//!     per_page: Some(25),
//!     search: Some("frieren".into()),
//!     ..Default::default()
//! };
//! let request = query.request().unwrap();
//! assert_eq!(request.operation_name, "MediaPage");
//! assert_eq!(request.variables["search"], "frieren");
//! assert!(request.variables.get("season").is_none());
//! ```

pub mod documents;
pub mod dto;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::model::FuzzyDate;
use crate::net::GraphQlRequest;

use dto::*;

/// A named GraphQL document with typed variables and payload.
pub trait Operation: Serialize {
    /// Operation name as declared in the document.
    const NAME: &'static str;
    /// Full document text.
    const DOCUMENT: &'static str;
    /// Shape of the `data` payload.
    type Data: DeserializeOwned;

    fn request(&self) -> Result<GraphQlRequest> {
        Ok(GraphQlRequest::new(
            Self::NAME,
            Self::DOCUMENT,
            serde_json::to_value(self)?,
        ))
    }
}

macro_rules! operation {
    ($ty:ty, $name:literal, $document:path, $data:ty) => {
        impl Operation for $ty {
            const NAME: &'static str = $name;
            const DOCUMENT: &'static str = $document;
            type Data = $data;
        }
    };
}

/// Date argument for list-entry mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FuzzyDateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
}

impl From<FuzzyDate> for FuzzyDateInput {
    fn from(date: FuzzyDate) -> Self {
        let known = |value: i32| (value != crate::model::UNKNOWN).then_some(value);
        Self {
            year: known(date.year),
            month: known(date.month),
            day: known(date.day),
        }
    }
}

/// One page of media, shared by every discovery list and by search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub format_in: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_year: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genre_in: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genre_not_in: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_in: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_not_in: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_adult: Option<bool>,
}
operation!(MediaPageQuery, "MediaPage", documents::MEDIA_PAGE, MediaPageData);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenreCollectionQuery {}
operation!(
    GenreCollectionQuery,
    "GenreCollection",
    documents::GENRE_COLLECTION,
    GenreCollectionData
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TagCollectionQuery {}
operation!(
    TagCollectionQuery,
    "TagCollection",
    documents::TAG_COLLECTION,
    TagCollectionData
);

/// Variables of every single-entity lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ById {
    pub id: i32,
}

/// Variables of every connection paged under a parent entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedById {
    pub id: i32,
    pub page: u32,
    pub per_page: u32,
}

macro_rules! lookup {
    ($(#[$meta:meta])* $name:ident($vars:ty), $op:literal, $document:path, $data:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub $vars);
        operation!($name, $op, $document, $data);
    };
}

lookup!(MediaDetailsQuery(ById), "MediaDetails", documents::MEDIA_DETAILS, MediaData);
lookup!(
    MediaCharactersQuery(PagedById),
    "MediaCharacters",
    documents::MEDIA_CHARACTERS,
    MediaCharactersData
);
lookup!(
    MediaStaffQuery(PagedById),
    "MediaStaff",
    documents::MEDIA_STAFF,
    MediaStaffData
);
lookup!(
    CharacterDetailsQuery(ById),
    "CharacterDetails",
    documents::CHARACTER_DETAILS,
    CharacterData
);
lookup!(
    CharacterMediaQuery(PagedById),
    "CharacterMedia",
    documents::CHARACTER_MEDIA,
    CharacterMediaData
);
lookup!(
    StaffDetailsQuery(ById),
    "StaffDetails",
    documents::STAFF_DETAILS,
    StaffData
);
lookup!(
    StaffMediaQuery(PagedById),
    "StaffMedia",
    documents::STAFF_MEDIA,
    StaffMediaData
);
lookup!(
    StudioDetailsQuery(ById),
    "StudioDetails",
    documents::STUDIO_DETAILS,
    StudioData
);
lookup!(
    StudioMediaQuery(PagedById),
    "StudioMedia",
    documents::STUDIO_MEDIA,
    StudioMediaData
);
lookup!(
    DeleteMediaListEntryMutation(ById),
    "DeleteMediaListEntry",
    documents::DELETE_MEDIA_LIST_ENTRY,
    DeleteMediaListEntryData
);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_in: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_notification_count: Option<bool>,
}
operation!(
    NotificationsQuery,
    "Notifications",
    documents::NOTIFICATIONS,
    NotificationPageData
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewerQuery {}
operation!(ViewerQuery, "Viewer", documents::VIEWER, ViewerData);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListQuery {
    pub user_id: i32,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<&'static str>,
    pub page: u32,
    pub per_page: u32,
}
operation!(MediaListQuery, "MediaList", documents::MEDIA_LIST, MediaListData);

/// Exactly one id should be set; the server toggles that entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavouriteMutation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manga_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio_id: Option<i32>,
}
operation!(
    ToggleFavouriteMutation,
    "ToggleFavourite",
    documents::TOGGLE_FAVOURITE,
    ToggleFavouriteData
);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMediaListEntryMutation {
    pub media_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_raw: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_volumes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<FuzzyDateInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<FuzzyDateInput>,
}
operation!(
    SaveMediaListEntryMutation,
    "SaveMediaListEntry",
    documents::SAVE_MEDIA_LIST_ENTRY,
    SaveMediaListEntryData
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paged_lookup_serializes_flat() {
        let request = CharacterMediaQuery(PagedById {
            id: 40,
            page: 3,
            per_page: 10,
        })
        .request()
        .unwrap();
        assert_eq!(request.variables, json!({ "id": 40, "page": 3, "perPage": 10 }));
    }

    #[test]
    fn empty_filters_send_no_variables() {
        let request = MediaPageQuery::default().request().unwrap();
        assert_eq!(request.variables, json!({}));
    }

    #[test]
    fn fuzzy_date_input_drops_unknown_parts() {
        let input = FuzzyDateInput::from(FuzzyDate::new(2024, 5, crate::model::UNKNOWN));
        assert_eq!(
            serde_json::to_value(input).unwrap(),
            json!({ "year": 2024, "month": 5 })
        );
    }

    #[test]
    fn every_document_declares_its_operation_name() {
        let pairs = [
            (MediaPageQuery::NAME, MediaPageQuery::DOCUMENT),
            (MediaDetailsQuery::NAME, MediaDetailsQuery::DOCUMENT),
            (NotificationsQuery::NAME, NotificationsQuery::DOCUMENT),
            (ToggleFavouriteMutation::NAME, ToggleFavouriteMutation::DOCUMENT),
            (SaveMediaListEntryMutation::NAME, SaveMediaListEntryMutation::DOCUMENT),
            (MediaListQuery::NAME, MediaListQuery::DOCUMENT),
        ];
        for (name, document) in pairs {
            assert!(
                document.contains(&format!("query {name}"))
                    || document.contains(&format!("mutation {name}")),
                "{name} missing from its document"
            );
        }
    }
}
