use std::sync::Arc;

use super::execute;
use super::favourite::{self, FavouriteTarget};
use crate::mapping::{list, studio_production};
use crate::model::{Media, StudioDetail};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::{ById, PagedById, StudioDetailsQuery, StudioMediaQuery};

#[derive(Clone)]
pub struct StudioRepository {
    transport: Arc<dyn Transport>,
}

impl StudioRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn details(&self, id: i32) -> Outcome<StudioDetail> {
        execute(self.transport.as_ref(), &StudioDetailsQuery(ById { id }), |data| {
            data.studio.map(StudioDetail::from)
        })
        .await
    }

    /// Productions, newest first.
    pub async fn media(&self, id: i32, page: u32, per_page: u32) -> Outcome<Vec<Media>> {
        let query = StudioMediaQuery(PagedById { id, page, per_page });
        execute(self.transport.as_ref(), &query, |data| {
            let connection = data.studio?.media?;
            Some(
                list(connection.edges)
                    .into_iter()
                    .filter_map(studio_production)
                    .collect(),
            )
        })
        .await
    }

    pub async fn toggle_favourite(&self, id: i32) -> Outcome<bool> {
        favourite::toggle(self.transport.as_ref(), FavouriteTarget::Studio(id)).await
    }
}
