use serde::{Deserialize, Serialize};

use super::{
    FuzzyDate, MediaFormat, MediaListStatus, MediaRelation, MediaSeason, MediaStatus, MediaType,
    TitleFormat, UNKNOWN,
};

/// Title in every form the server provides. Missing forms are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTitle {
    pub romaji: String,
    pub english: String,
    pub native: String,
    pub user_preferred: String,
}

impl MediaTitle {
    /// Picks the form requested by `format`, falling back through the others.
    pub fn get(&self, format: TitleFormat) -> &str {
        let preferred = match format {
            TitleFormat::Romaji => &self.romaji,
            TitleFormat::English => &self.english,
            TitleFormat::Native => &self.native,
            TitleFormat::UserPreferred => &self.user_preferred,
        };
        [
            preferred,
            &self.user_preferred,
            &self.romaji,
            &self.english,
            &self.native,
        ]
        .into_iter()
        .find(|title| !title.is_empty())
        .map(String::as_str)
        .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTag {
    pub name: String,
    /// Relevance, 0 to 100.
    pub rank: i32,
    pub is_spoiler: bool,
}

/// Link from one media entry to a related one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedMedia {
    pub id: i32,
    pub title: String,
    pub cover_image: String,
    pub relation: MediaRelation,
    pub media_type: MediaType,
    pub format: MediaFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub site: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioRef {
    pub id: i32,
    pub name: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextAiring {
    pub episode: i32,
    /// Unix seconds.
    pub airing_at: i64,
}

impl Default for NextAiring {
    fn default() -> Self {
        Self {
            episode: UNKNOWN,
            airing_at: UNKNOWN as i64,
        }
    }
}

/// The viewer's personal tracking state for one media entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaListEntry {
    pub id: i32,
    pub media_id: i32,
    pub status: MediaListStatus,
    pub progress: i32,
    pub progress_volumes: i32,
    /// 0 to 100.
    pub score: f64,
    pub private: bool,
    pub notes: String,
    pub repeat: i32,
    pub started_at: FuzzyDate,
    pub completed_at: FuzzyDate,
    /// Unix seconds.
    pub updated_at: i64,
}

impl Default for MediaListEntry {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            media_id: UNKNOWN,
            status: MediaListStatus::Unknown,
            progress: UNKNOWN,
            progress_volumes: UNKNOWN,
            score: UNKNOWN as f64,
            private: false,
            notes: String::new(),
            repeat: UNKNOWN,
            started_at: FuzzyDate::unknown(),
            completed_at: FuzzyDate::unknown(),
            updated_at: UNKNOWN as i64,
        }
    }
}

/// A catalog entry, anime or manga.
///
/// Built fresh from every response. Numeric fields the server did not send
/// hold [`UNKNOWN`]; strings are empty and lists are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: i32,
    pub id_mal: i32,
    pub title: MediaTitle,
    pub cover_image: String,
    pub banner_image: String,
    pub media_type: MediaType,
    pub format: MediaFormat,
    pub status: MediaStatus,
    pub season: MediaSeason,
    pub season_year: i32,
    pub episodes: i32,
    pub chapters: i32,
    pub volumes: i32,
    /// Minutes per episode.
    pub duration: i32,
    pub average_score: i32,
    pub mean_score: i32,
    pub popularity: i32,
    pub favourites: i32,
    pub is_favourite: bool,
    pub genres: Vec<String>,
    pub tags: Vec<MediaTag>,
    pub relations: Vec<RelatedMedia>,
    pub external_links: Vec<ExternalLink>,
    pub studios: Vec<StudioRef>,
    pub description: String,
    pub start_date: FuzzyDate,
    pub end_date: FuzzyDate,
    pub next_airing: NextAiring,
    /// `None` when the media is not on the viewer's list.
    pub list_entry: Option<MediaListEntry>,
}

impl Default for Media {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            id_mal: UNKNOWN,
            title: MediaTitle::default(),
            cover_image: String::new(),
            banner_image: String::new(),
            media_type: MediaType::Unknown,
            format: MediaFormat::Unknown,
            status: MediaStatus::Unknown,
            season: MediaSeason::Unknown,
            season_year: UNKNOWN,
            episodes: UNKNOWN,
            chapters: UNKNOWN,
            volumes: UNKNOWN,
            duration: UNKNOWN,
            average_score: UNKNOWN,
            mean_score: UNKNOWN,
            popularity: UNKNOWN,
            favourites: UNKNOWN,
            is_favourite: false,
            genres: Vec::new(),
            tags: Vec::new(),
            relations: Vec::new(),
            external_links: Vec::new(),
            studios: Vec::new(),
            description: String::new(),
            start_date: FuzzyDate::unknown(),
            end_date: FuzzyDate::unknown(),
            next_airing: NextAiring::default(),
            list_entry: None,
        }
    }
}

impl Media {
    /// Episode count for anime, chapter count for manga, [`UNKNOWN`] otherwise.
    pub fn total(&self) -> i32 {
        match self.media_type {
            MediaType::Anime => self.episodes,
            MediaType::Manga => self.chapters,
            MediaType::Unknown => UNKNOWN,
        }
    }

    pub fn display_title(&self, format: TitleFormat) -> &str {
        self.title.get(format)
    }

    /// Tags that are safe to show without a spoiler toggle.
    pub fn visible_tags(&self) -> impl Iterator<Item = &MediaTag> {
        self.tags.iter().filter(|tag| !tag.is_spoiler)
    }
}
