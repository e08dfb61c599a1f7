use serde::{Deserialize, Serialize};

use super::UNKNOWN;

/// Which title form to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleFormat {
    Romaji,
    English,
    Native,
    #[default]
    UserPreferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

/// Ordering of the personal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListSort {
    #[default]
    UpdatedDesc,
    ScoreDesc,
    TitleAsc,
    ProgressDesc,
    AddedDesc,
}

impl ListSort {
    pub fn as_graphql(self) -> &'static str {
        match self {
            Self::UpdatedDesc => "UPDATED_TIME_DESC",
            Self::ScoreDesc => "SCORE_DESC",
            Self::TitleAsc => "MEDIA_TITLE_ROMAJI",
            Self::ProgressDesc => "PROGRESS_DESC",
            Self::AddedDesc => "ADDED_TIME_DESC",
        }
    }
}

/// Persisted account and display preferences.
///
/// Only the settings store writes these; everything else reads them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub access_token: String,
    pub token_type: String,
    /// Unix seconds; [`UNKNOWN`] when not signed in.
    pub token_expires_at: i64,
    pub user_id: i32,
    pub title_format: TitleFormat,
    pub theme: Theme,
    pub list_sort: ListSort,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            token_type: String::new(),
            token_expires_at: UNKNOWN as i64,
            user_id: UNKNOWN,
            title_format: TitleFormat::default(),
            theme: Theme::default(),
            list_sort: ListSort::default(),
        }
    }
}

impl std::fmt::Debug for UserSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSettings")
            .field("access_token", &(!self.access_token.is_empty()).then_some("<redacted>"))
            .field("token_type", &self.token_type)
            .field("token_expires_at", &self.token_expires_at)
            .field("user_id", &self.user_id)
            .field("title_format", &self.title_format)
            .field("theme", &self.theme)
            .field("list_sort", &self.list_sort)
            .finish()
    }
}

impl UserSettings {
    pub fn token(&self) -> Option<String> {
        (!self.access_token.is_empty()).then(|| self.access_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        !self.access_token.is_empty() && self.user_id != UNKNOWN
    }

    /// Whether the stored token has passed its expiry at `now` (unix seconds).
    pub fn is_token_expired(&self, now: i64) -> bool {
        self.token_expires_at != UNKNOWN as i64 && self.token_expires_at <= now
    }

    /// Drops every credential, keeping display preferences.
    pub fn signed_out(&self) -> Self {
        Self {
            title_format: self.title_format,
            theme: self.theme,
            list_sort: self.list_sort,
            ..Self::default()
        }
    }
}

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: i32,
    pub name: String,
    pub avatar: String,
    pub unread_notification_count: i32,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            name: String::new(),
            avatar: String::new(),
            unread_notification_count: UNKNOWN,
        }
    }
}
