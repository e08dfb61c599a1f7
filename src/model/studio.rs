use serde::{Deserialize, Serialize};

use super::UNKNOWN;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioDetail {
    pub id: i32,
    pub name: String,
    pub is_animation_studio: bool,
    pub favourites: i32,
    pub is_favourite: bool,
    pub site_url: String,
}

impl Default for StudioDetail {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            name: String::new(),
            is_animation_studio: false,
            favourites: UNKNOWN,
            is_favourite: false,
            site_url: String::new(),
        }
    }
}
