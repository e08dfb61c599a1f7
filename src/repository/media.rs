use chrono::Local;
use std::sync::Arc;

use super::favourite::{self, FavouriteTarget};
use super::execute;
use crate::mapping::{list, media_character, media_staff};
use crate::model::{Media, MediaCharacter, MediaListEntry, MediaStaff, MediaType};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::{
    ById, DeleteMediaListEntryMutation, MediaCharactersQuery, MediaDetailsQuery, MediaStaffQuery,
    PagedById,
};
use crate::types::ListEntryUpdate;

/// Media detail page and personal-list mutations.
#[derive(Clone)]
pub struct MediaRepository {
    transport: Arc<dyn Transport>,
}

impl MediaRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn details(&self, id: i32) -> Outcome<Media> {
        execute(self.transport.as_ref(), &MediaDetailsQuery(ById { id }), |data| {
            data.media.map(Media::from)
        })
        .await
    }

    pub async fn characters(
        &self,
        id: i32,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<MediaCharacter>> {
        let query = MediaCharactersQuery(PagedById { id, page, per_page });
        execute(self.transport.as_ref(), &query, |data| {
            let connection = data.media?.characters?;
            Some(list(connection.edges).into_iter().filter_map(media_character).collect())
        })
        .await
    }

    pub async fn staff(&self, id: i32, page: u32, per_page: u32) -> Outcome<Vec<MediaStaff>> {
        let query = MediaStaffQuery(PagedById { id, page, per_page });
        execute(self.transport.as_ref(), &query, |data| {
            let connection = data.media?.staff?;
            Some(list(connection.edges).into_iter().filter_map(media_staff).collect())
        })
        .await
    }

    /// Flips the favourite flag; `Success(true)` means it is now a favourite.
    pub async fn toggle_favourite(&self, media_type: MediaType, id: i32) -> Outcome<bool> {
        match FavouriteTarget::media(media_type, id) {
            Some(target) => favourite::toggle(self.transport.as_ref(), target).await,
            None => Outcome::failure("Unknown media type"),
        }
    }

    /// Saves `update` for `media_id` and returns the resulting entry.
    ///
    /// `total` is the episode or chapter count ([`crate::model::UNKNOWN`] when
    /// not known) and drives the automatic completion rule. `current` is the
    /// entry as last fetched, if the media is already on the list; the result
    /// starts from it, applies the update, then takes every value the server
    /// returned.
    pub async fn save_list_entry(
        &self,
        media_id: i32,
        total: i32,
        current: Option<&MediaListEntry>,
        update: ListEntryUpdate,
    ) -> Outcome<MediaListEntry> {
        let today = Local::now().date_naive();
        let update = update.complete_if_finished(total, today);
        let local = current
            .cloned()
            .unwrap_or_else(|| MediaListEntry {
                media_id,
                ..MediaListEntry::default()
            })
            .with_update(&update);

        tracing::debug!(media_id, ?update.status, ?update.progress, "Saving list entry");
        execute(self.transport.as_ref(), &update.to_mutation(media_id), |data| {
            data.entry
                .map(|entry| local.merged_with(&MediaListEntry::from(entry)))
        })
        .await
    }

    /// Removes an entry from the list. `Success(true)` when the server deleted it.
    pub async fn delete_list_entry(&self, entry_id: i32) -> Outcome<bool> {
        let mutation = DeleteMediaListEntryMutation(ById { id: entry_id });
        execute(self.transport.as_ref(), &mutation, |data| {
            data.result.map(|result| result.deleted.unwrap_or(false))
        })
        .await
    }
}
