use std::sync::Arc;

use super::execute;
use super::favourite::{self, FavouriteTarget};
use crate::mapping::{character_appearance, list};
use crate::model::{Appearance, CharacterDetail};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::{ById, CharacterDetailsQuery, CharacterMediaQuery, PagedById};

#[derive(Clone)]
pub struct CharacterRepository {
    transport: Arc<dyn Transport>,
}

impl CharacterRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn details(&self, id: i32) -> Outcome<CharacterDetail> {
        execute(self.transport.as_ref(), &CharacterDetailsQuery(ById { id }), |data| {
            data.character.map(CharacterDetail::from)
        })
        .await
    }

    /// Media the character appears in, most popular first.
    pub async fn media(&self, id: i32, page: u32, per_page: u32) -> Outcome<Vec<Appearance>> {
        let query = CharacterMediaQuery(PagedById { id, page, per_page });
        execute(self.transport.as_ref(), &query, |data| {
            let connection = data.character?.media?;
            Some(
                list(connection.edges)
                    .into_iter()
                    .filter_map(character_appearance)
                    .collect(),
            )
        })
        .await
    }

    pub async fn toggle_favourite(&self, id: i32) -> Outcome<bool> {
        favourite::toggle(self.transport.as_ref(), FavouriteTarget::Character(id)).await
    }
}
