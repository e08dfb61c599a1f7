use std::sync::Arc;

use super::execute;
use crate::mapping::list;
use crate::model::{ListSort, Media, MediaListEntry, MediaListStatus, MediaType, Viewer};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::dto::MediaListItemDto;
use crate::query::{MediaListQuery, ViewerQuery};

fn list_item(item: MediaListItemDto) -> Option<Media> {
    let media = item.media?;
    Some(Media {
        list_entry: Some(MediaListEntry::from(item.entry)),
        ..Media::from(media)
    })
}

/// The signed-in user and their list.
#[derive(Clone)]
pub struct UserRepository {
    transport: Arc<dyn Transport>,
}

impl UserRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn viewer(&self) -> Outcome<Viewer> {
        execute(self.transport.as_ref(), &ViewerQuery {}, |data| {
            data.viewer.map(Viewer::from)
        })
        .await
    }

    /// One page of `user_id`'s list. `MediaListStatus::Unknown` means every status.
    pub async fn media_list(
        &self,
        user_id: i32,
        media_type: MediaType,
        status: MediaListStatus,
        sort: ListSort,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<Media>> {
        let query = MediaListQuery {
            user_id,
            media_type: media_type.as_graphql(),
            status: status.as_graphql(),
            sort: vec![sort.as_graphql()],
            page,
            per_page,
        };
        execute(self.transport.as_ref(), &query, |data| {
            let page = data.page?;
            Some(
                list(page.media_list)
                    .into_iter()
                    .filter_map(list_item)
                    .collect(),
            )
        })
        .await
    }
}
