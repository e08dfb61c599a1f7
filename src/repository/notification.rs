use std::sync::Arc;

use super::execute;
use crate::mapping::{list, number};
use crate::model::{Notification, NotificationFilter, NotificationType};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::{NotificationsQuery, ViewerQuery};

/// The viewer's notification feed.
#[derive(Clone)]
pub struct NotificationRepository {
    transport: Arc<dyn Transport>,
}

impl NotificationRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// One page of notifications in `filter`.
    ///
    /// With `reset_unread` the server also clears the unread counter.
    pub async fn notifications(
        &self,
        filter: NotificationFilter,
        page: u32,
        per_page: u32,
        reset_unread: bool,
    ) -> Outcome<Vec<Notification>> {
        let query = NotificationsQuery {
            page,
            per_page,
            type_in: filter
                .types()
                .unwrap_or_default()
                .into_iter()
                .filter_map(NotificationType::as_graphql)
                .collect(),
            reset_notification_count: reset_unread.then_some(true),
        };
        execute(self.transport.as_ref(), &query, |data| {
            let page = data.page?;
            Some(
                list(page.notifications)
                    .into_iter()
                    .map(Notification::from)
                    .collect(),
            )
        })
        .await
    }

    pub async fn unread_count(&self) -> Outcome<i32> {
        execute(self.transport.as_ref(), &ViewerQuery {}, |data| {
            data.viewer
                .map(|viewer| number(viewer.unread_notification_count))
        })
        .await
    }
}
