//! Request-side value types: search filters and list-entry updates.
//!
//! Both are plain data with every field optional, built with the
//! `derive_builder`-generated builders. Unset fields never reach the wire:
//! they are omitted from the operation variables rather than sent as `null`.
//!
//! # Examples
//!
//! ```rust
//! use shiori::model::{MediaFormat, MediaType};
//! use shiori::types::SearchFiltersBuilder;
//!
//! let filters = SearchFiltersBuilder::default()
//!     .query("frieren")
//!     .media_type(MediaType::Anime)
//!     .formats(vec![MediaFormat::Tv])
//!     .build()
//!     .unwrap();
//!
//! let query = filters.to_query(1, 20);
//! assert_eq!(query.search.as_deref(), Some("frieren"));
//! assert_eq!(query.format_in, vec!["TV"]);
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::model::{
    FuzzyDate, MediaFormat, MediaListStatus, MediaSeason, MediaSort, MediaStatus, MediaType,
};
use crate::query::{FuzzyDateInput, MediaPageQuery, SaveMediaListEntryMutation};

/// Search criteria for the catalog.
///
/// # Fields
///
/// * `query` - Free text; empty means "browse"
/// * `sort` - Defaults to best match when searching by text, popularity otherwise
/// * `include_genres` / `exclude_genres` - Genre sets, matched by name
/// * `include_tags` / `exclude_tags` - Tag sets, matched by name
/// * `on_list` - Restrict to (or exclude) entries on the viewer's list
/// * `is_adult` - Adult content flag; unset lets the server decide
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default)]
pub struct SearchFilters {
    pub query: String,
    #[builder(setter(strip_option))]
    pub media_type: Option<MediaType>,
    #[builder(setter(strip_option))]
    pub sort: Option<MediaSort>,
    pub formats: Vec<MediaFormat>,
    #[builder(setter(strip_option))]
    pub status: Option<MediaStatus>,
    #[builder(setter(strip_option))]
    pub season: Option<MediaSeason>,
    #[builder(setter(strip_option))]
    pub season_year: Option<i32>,
    pub include_genres: Vec<String>,
    pub exclude_genres: Vec<String>,
    pub include_tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    #[builder(setter(strip_option))]
    pub on_list: Option<bool>,
    #[builder(setter(strip_option))]
    pub is_adult: Option<bool>,
}

impl SearchFilters {
    pub fn effective_sort(&self) -> MediaSort {
        match self.sort {
            Some(sort) => sort,
            None if self.query.trim().is_empty() => MediaSort::PopularityDesc,
            None => MediaSort::SearchMatch,
        }
    }

    /// Variables for one page of results.
    pub fn to_query(&self, page: u32, per_page: u32) -> MediaPageQuery {
        let query = self.query.trim();
        MediaPageQuery {
            page: Some(page),
            per_page: Some(per_page),
            media_type: self.media_type.and_then(MediaType::as_graphql),
            sort: vec![self.effective_sort().as_graphql()],
            search: (!query.is_empty()).then(|| query.to_string()),
            format_in: self
                .formats
                .iter()
                .filter_map(|format| format.as_graphql())
                .collect(),
            status: self.status.and_then(MediaStatus::as_graphql),
            season: self.season.and_then(MediaSeason::as_graphql),
            season_year: self.season_year,
            genre_in: self.include_genres.clone(),
            genre_not_in: self.exclude_genres.clone(),
            tag_in: self.include_tags.clone(),
            tag_not_in: self.exclude_tags.clone(),
            on_list: self.on_list,
            is_adult: self.is_adult,
        }
    }
}

impl From<String> for SearchFilters {
    fn from(query: String) -> Self {
        SearchFilters {
            query,
            ..Default::default()
        }
    }
}

impl From<&str> for SearchFilters {
    fn from(query: &str) -> Self {
        SearchFilters {
            query: query.to_string(),
            ..Default::default()
        }
    }
}

/// Changes to a personal list entry.
///
/// Only the fields that are set are sent. See
/// [`complete_if_finished`](ListEntryUpdate::complete_if_finished) for the
/// automatic completion rule.
///
/// ```rust
/// use shiori::model::MediaListStatus;
/// use shiori::types::ListEntryUpdateBuilder;
///
/// let update = ListEntryUpdateBuilder::default()
///     .progress(5)
///     .status(MediaListStatus::Current)
///     .build()
///     .unwrap();
/// assert_eq!(update.progress, Some(5));
/// assert!(update.notes.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
pub struct ListEntryUpdate {
    pub status: Option<MediaListStatus>,
    /// 0 to 100, whatever scoring format the account uses.
    pub score: Option<f64>,
    pub progress: Option<i32>,
    pub progress_volumes: Option<i32>,
    pub repeat: Option<i32>,
    pub private: Option<bool>,
    pub notes: Option<String>,
    pub started_at: Option<FuzzyDate>,
    pub completed_at: Option<FuzzyDate>,
}

impl ListEntryUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_mutation(&self, media_id: i32) -> SaveMediaListEntryMutation {
        SaveMediaListEntryMutation {
            media_id,
            status: self.status.and_then(MediaListStatus::as_graphql),
            score_raw: self.score.map(|score| score.clamp(0.0, 100.0).round() as i32),
            progress: self.progress,
            progress_volumes: self.progress_volumes,
            repeat: self.repeat,
            private: self.private,
            notes: self.notes.clone(),
            started_at: self.started_at.map(FuzzyDateInput::from),
            completed_at: self.completed_at.map(FuzzyDateInput::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Operation;
    use serde_json::json;

    #[test]
    fn unset_update_fields_are_not_sent() {
        let update = ListEntryUpdateBuilder::default()
            .progress(3)
            .build()
            .unwrap();
        let request = update.to_mutation(21).request().unwrap();
        assert_eq!(request.variables, json!({ "mediaId": 21, "progress": 3 }));
    }

    #[test]
    fn score_is_sent_on_the_hundred_point_scale() {
        let update = ListEntryUpdateBuilder::default()
            .score(84.6)
            .build()
            .unwrap();
        let request = update.to_mutation(21).request().unwrap();
        assert_eq!(request.variables, json!({ "mediaId": 21, "scoreRaw": 85 }));
        assert!(request.query.contains("scoreRaw: $scoreRaw"));

        let above = ListEntryUpdate {
            score: Some(140.0),
            ..ListEntryUpdate::default()
        };
        assert_eq!(above.to_mutation(21).score_raw, Some(100));
    }

    #[test]
    fn browse_defaults_to_popularity() {
        let filters = SearchFilters::default();
        assert_eq!(filters.effective_sort(), MediaSort::PopularityDesc);
        let query = filters.to_query(1, 50);
        assert!(query.search.is_none());
        assert_eq!(query.sort, vec!["POPULARITY_DESC"]);
    }

    #[test]
    fn text_search_defaults_to_best_match() {
        let filters = SearchFilters::from("  mushishi ");
        assert_eq!(filters.effective_sort(), MediaSort::SearchMatch);
        assert_eq!(filters.to_query(1, 10).search.as_deref(), Some("mushishi"));
    }

    #[test]
    fn unknown_enum_filters_are_dropped() {
        let filters = SearchFiltersBuilder::default()
            .media_type(MediaType::Unknown)
            .formats(vec![MediaFormat::Unknown, MediaFormat::Movie])
            .build()
            .unwrap();
        let query = filters.to_query(2, 10);
        assert!(query.media_type.is_none());
        assert_eq!(query.format_in, vec!["MOVIE"]);
    }
}
