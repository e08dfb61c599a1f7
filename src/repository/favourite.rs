//! Favourite toggling shared by every detail repository.
//!
//! The mutation answers with the viewer's favourites after the toggle, not
//! with the new state. Whether the entity is now a favourite is inferred from
//! its id appearing in the returned list. Only the first page of favourites
//! comes back, so an entity beyond it reads as "not a favourite".

use crate::mapping::list;
use crate::model::MediaType;
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::ToggleFavouriteMutation;
use crate::query::dto::{FavouritesDto, IdDto, NodesDto};

use super::execute;

/// The entity whose favourite flag to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavouriteTarget {
    Anime(i32),
    Manga(i32),
    Character(i32),
    Staff(i32),
    Studio(i32),
}

impl FavouriteTarget {
    /// Media target by type; `None` for [`MediaType::Unknown`].
    pub fn media(media_type: MediaType, id: i32) -> Option<Self> {
        match media_type {
            MediaType::Anime => Some(Self::Anime(id)),
            MediaType::Manga => Some(Self::Manga(id)),
            MediaType::Unknown => None,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Self::Anime(id)
            | Self::Manga(id)
            | Self::Character(id)
            | Self::Staff(id)
            | Self::Studio(id) => id,
        }
    }

    fn mutation(self) -> ToggleFavouriteMutation {
        let mut mutation = ToggleFavouriteMutation::default();
        match self {
            Self::Anime(id) => mutation.anime_id = Some(id),
            Self::Manga(id) => mutation.manga_id = Some(id),
            Self::Character(id) => mutation.character_id = Some(id),
            Self::Staff(id) => mutation.staff_id = Some(id),
            Self::Studio(id) => mutation.studio_id = Some(id),
        }
        mutation
    }

    fn connection(self, favourites: FavouritesDto) -> Option<NodesDto<IdDto>> {
        match self {
            Self::Anime(_) => favourites.anime,
            Self::Manga(_) => favourites.manga,
            Self::Character(_) => favourites.characters,
            Self::Staff(_) => favourites.staff,
            Self::Studio(_) => favourites.studios,
        }
    }
}

/// `Success(true)` when `target` is a favourite after the call.
pub(crate) async fn toggle(transport: &dyn Transport, target: FavouriteTarget) -> Outcome<bool> {
    tracing::debug!(?target, "Toggling favourite");
    execute(transport, &target.mutation(), |data| {
        let nodes = target.connection(data.favourites?)?.nodes?;
        let id = target.id();
        Some(
            list(Some(nodes))
                .into_iter()
                .any(|node| node.id == Some(id)),
        )
    })
    .await
}
