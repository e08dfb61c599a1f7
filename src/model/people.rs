use serde::{Deserialize, Serialize};

use super::{CharacterRole, Media, UNKNOWN};

/// Every name form of a character or staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub full: String,
    pub native: String,
    pub user_preferred: String,
    pub alternative: Vec<String>,
    /// Names that give away the plot. Hidden until the reader asks.
    pub alternative_spoiler: Vec<String>,
}

impl PersonName {
    /// The preferred form, falling back to the full name.
    pub fn display(&self) -> &str {
        if self.user_preferred.is_empty() {
            &self.full
        } else {
            &self.user_preferred
        }
    }
}

/// A character or staff member as listed on someone else's page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i32,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub id: i32,
    pub name: PersonName,
    pub image: String,
    pub favourites: i32,
    pub is_favourite: bool,
    /// Birthday, age, gender and blood type lines followed by the description.
    pub biography: String,
}

impl Default for CharacterDetail {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            name: PersonName::default(),
            image: String::new(),
            favourites: UNKNOWN,
            is_favourite: false,
            biography: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffDetail {
    pub id: i32,
    pub name: PersonName,
    pub image: String,
    pub favourites: i32,
    pub is_favourite: bool,
    pub language: String,
    pub occupations: Vec<String>,
    pub biography: String,
}

impl Default for StaffDetail {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            name: PersonName::default(),
            image: String::new(),
            favourites: UNKNOWN,
            is_favourite: false,
            language: String::new(),
            occupations: Vec::new(),
            biography: String::new(),
        }
    }
}

/// A character appearing in a media entry, with its voice actors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCharacter {
    pub character: PersonRef,
    pub role: CharacterRole,
    pub voice_actors: Vec<PersonRef>,
}

/// A staff member credited on a media entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaStaff {
    pub staff: PersonRef,
    pub role: String,
}

/// A media entry a character or staff member appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub media: Media,
    /// Character role, or the staff member's credited role.
    pub role: String,
}
