use std::sync::Arc;

use super::execute;
use super::favourite::{self, FavouriteTarget};
use crate::mapping::{list, staff_appearance};
use crate::model::{Appearance, StaffDetail};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::{ById, PagedById, StaffDetailsQuery, StaffMediaQuery};

#[derive(Clone)]
pub struct StaffRepository {
    transport: Arc<dyn Transport>,
}

impl StaffRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn details(&self, id: i32) -> Outcome<StaffDetail> {
        execute(self.transport.as_ref(), &StaffDetailsQuery(ById { id }), |data| {
            data.staff.map(StaffDetail::from)
        })
        .await
    }

    /// Media the staff member is credited on, with their role.
    pub async fn media(&self, id: i32, page: u32, per_page: u32) -> Outcome<Vec<Appearance>> {
        let query = StaffMediaQuery(PagedById { id, page, per_page });
        execute(self.transport.as_ref(), &query, |data| {
            let connection = data.staff?.staff_media?;
            Some(
                list(connection.edges)
                    .into_iter()
                    .filter_map(staff_appearance)
                    .collect(),
            )
        })
        .await
    }

    pub async fn toggle_favourite(&self, id: i32) -> Outcome<bool> {
        favourite::toggle(self.transport.as_ref(), FavouriteTarget::Staff(id)).await
    }
}
