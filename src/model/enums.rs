//! Domain enumerations.
//!
//! Every enum that is filled from a server response has an `Unknown` variant,
//! so an unrecognized server value always lands somewhere. Enums that are also
//! sent as query variables expose [`as_graphql`](MediaType::as_graphql), which
//! returns `None` for `Unknown` so the variable is omitted instead of sent.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaType {
    Anime,
    Manga,
    #[default]
    Unknown,
}

impl MediaType {
    pub fn as_graphql(self) -> Option<&'static str> {
        match self {
            Self::Anime => Some("ANIME"),
            Self::Manga => Some("MANGA"),
            Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    Manga,
    Novel,
    OneShot,
    #[default]
    Unknown,
}

impl MediaFormat {
    pub fn as_graphql(self) -> Option<&'static str> {
        match self {
            Self::Tv => Some("TV"),
            Self::TvShort => Some("TV_SHORT"),
            Self::Movie => Some("MOVIE"),
            Self::Special => Some("SPECIAL"),
            Self::Ova => Some("OVA"),
            Self::Ona => Some("ONA"),
            Self::Music => Some("MUSIC"),
            Self::Manga => Some("MANGA"),
            Self::Novel => Some("NOVEL"),
            Self::OneShot => Some("ONE_SHOT"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Tv => "TV",
            Self::TvShort => "TV Short",
            Self::Movie => "Movie",
            Self::Special => "Special",
            Self::Ova => "OVA",
            Self::Ona => "ONA",
            Self::Music => "Music",
            Self::Manga => "Manga",
            Self::Novel => "Light Novel",
            Self::OneShot => "One Shot",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
    #[default]
    Unknown,
}

impl MediaStatus {
    pub fn as_graphql(self) -> Option<&'static str> {
        match self {
            Self::Finished => Some("FINISHED"),
            Self::Releasing => Some("RELEASING"),
            Self::NotYetReleased => Some("NOT_YET_RELEASED"),
            Self::Cancelled => Some("CANCELLED"),
            Self::Hiatus => Some("HIATUS"),
            Self::Unknown => None,
        }
    }
}

/// Quarter of the broadcast year.
///
/// Season arithmetic lives in [`crate::season`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaSeason {
    Winter,
    Spring,
    Summer,
    Fall,
    #[default]
    Unknown,
}

impl MediaSeason {
    pub const ALL: [MediaSeason; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Fall];

    pub fn as_graphql(self) -> Option<&'static str> {
        match self {
            Self::Winter => Some("WINTER"),
            Self::Spring => Some("SPRING"),
            Self::Summer => Some("SUMMER"),
            Self::Fall => Some("FALL"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for MediaSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winter => write!(f, "Winter"),
            Self::Spring => write!(f, "Spring"),
            Self::Summer => write!(f, "Summer"),
            Self::Fall => write!(f, "Fall"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Status of an entry on the user's personal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaListStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
    #[default]
    Unknown,
}

impl MediaListStatus {
    pub fn as_graphql(self) -> Option<&'static str> {
        match self {
            Self::Current => Some("CURRENT"),
            Self::Planning => Some("PLANNING"),
            Self::Completed => Some("COMPLETED"),
            Self::Dropped => Some("DROPPED"),
            Self::Paused => Some("PAUSED"),
            Self::Repeating => Some("REPEATING"),
            Self::Unknown => None,
        }
    }

    /// Statuses that progress reaching the total may advance to `Completed`.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::Current | Self::Planning | Self::Repeating)
    }
}

/// How a related entry relates to the media it is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaRelation {
    Adaptation,
    Prequel,
    Sequel,
    Parent,
    SideStory,
    Character,
    Summary,
    Alternative,
    SpinOff,
    Other,
    Source,
    Compilation,
    Contains,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterRole {
    Main,
    Supporting,
    Background,
    #[default]
    Unknown,
}

/// Sort orders accepted by media queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSort {
    TrendingDesc,
    PopularityDesc,
    ScoreDesc,
    FavouritesDesc,
    StartDateDesc,
    StartDate,
    TitleRomaji,
    UpdatedAtDesc,
    SearchMatch,
}

impl MediaSort {
    pub fn as_graphql(self) -> &'static str {
        match self {
            Self::TrendingDesc => "TRENDING_DESC",
            Self::PopularityDesc => "POPULARITY_DESC",
            Self::ScoreDesc => "SCORE_DESC",
            Self::FavouritesDesc => "FAVOURITES_DESC",
            Self::StartDateDesc => "START_DATE_DESC",
            Self::StartDate => "START_DATE",
            Self::TitleRomaji => "TITLE_ROMAJI",
            Self::UpdatedAtDesc => "UPDATED_AT_DESC",
            Self::SearchMatch => "SEARCH_MATCH",
        }
    }
}
