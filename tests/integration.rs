//! Integration tests for Shiori
//!
//! End-to-end flows across repositories, mapping and the tracking policy,
//! driven by a scripted transport.

use chrono::{Datelike, Local};
use serde_json::json;

use shiori::model::{FuzzyDate, MediaListStatus, NotificationKind, NotificationType, UNKNOWN};
use shiori::prelude::*;

mod common;
use common::{FakeTransport, media_node};

#[cfg(test)]
mod tracking_tests {
    use super::*;

    fn watching(progress: i32) -> MediaListEntry {
        MediaListEntry {
            id: 9,
            media_id: 154587,
            status: MediaListStatus::Current,
            progress,
            ..MediaListEntry::default()
        }
    }

    #[tokio::test]
    async fn test_last_episode_completes_entry() {
        let today = Local::now().date_naive();
        let transport = FakeTransport::new().reply(json!({ "SaveMediaListEntry": {
            "id": 9,
            "mediaId": 154587,
            "status": "COMPLETED",
            "progress": 12,
            "completedAt": { "year": today.year(), "month": today.month(), "day": today.day() }
        } }));
        let repositories = transport.repositories();
        let update = ListEntryUpdateBuilder::default().progress(12).build().unwrap();

        let entry = repositories
            .media
            .save_list_entry(154587, 12, Some(&watching(11)), update)
            .await
            .success()
            .expect("save should succeed");

        assert_eq!(entry.status, MediaListStatus::Completed);
        assert_eq!(entry.progress, 12);
        assert_eq!(entry.completed_at, FuzzyDate::from(today));

        let request = transport.last_sent();
        assert_eq!(request.operation_name, "SaveMediaListEntry");
        assert_eq!(
            request.variables,
            json!({
                "mediaId": 154587,
                "status": "COMPLETED",
                "progress": 12,
                "completedAt": { "year": today.year(), "month": today.month(), "day": today.day() }
            })
        );
    }

    #[tokio::test]
    async fn test_partial_progress_sends_only_progress() {
        let transport = FakeTransport::new().reply(json!({ "SaveMediaListEntry": {
            "id": 9, "progress": 5
        } }));
        let repositories = transport.repositories();
        let update = ListEntryUpdateBuilder::default().progress(5).build().unwrap();

        let entry = repositories
            .media
            .save_list_entry(154587, 12, Some(&watching(4)), update)
            .await
            .success()
            .unwrap();

        assert_eq!(entry.status, MediaListStatus::Current);
        assert_eq!(entry.progress, 5);
        assert!(entry.completed_at.is_unknown());
        assert_eq!(
            transport.last_sent().variables,
            json!({ "mediaId": 154587, "progress": 5 })
        );
    }

    #[tokio::test]
    async fn test_unknown_total_never_completes() {
        let transport = FakeTransport::new().reply(json!({ "SaveMediaListEntry": { "id": 3 } }));
        let repositories = transport.repositories();
        let update = ListEntryUpdateBuilder::default().progress(400).build().unwrap();

        let entry = repositories
            .media
            .save_list_entry(21, UNKNOWN, None, update)
            .await
            .success()
            .unwrap();

        assert_eq!(entry.id, 3);
        assert_eq!(entry.media_id, 21);
        assert_eq!(entry.status, MediaListStatus::Unknown);
        assert!(transport.last_sent().variables.get("status").is_none());
    }

    #[tokio::test]
    async fn test_failed_save_reports_server_message() {
        let transport = FakeTransport::new().reply_errors(&["Invalid token"]);
        let repositories = transport.repositories();
        let update = ListEntryUpdateBuilder::default().progress(1).build().unwrap();

        let outcome = repositories.media.save_list_entry(1, 12, None, update).await;

        assert_eq!(outcome.message(), Some("Invalid token"));
    }
}

#[cfg(test)]
mod notification_tests {
    use super::*;

    #[tokio::test]
    async fn test_notification_page_maps_every_kind() {
        let transport = FakeTransport::new().reply(json!({ "Page": { "notifications": [
            { "id": 1, "type": "AIRING", "createdAt": 100, "episode": 4,
              "contexts": ["Episode ", " of ", " aired."],
              "media": { "id": 154587, "title": { "userPreferred": "Frieren" }, "type": "ANIME" } },
            { "id": 2, "type": "FOLLOWING", "createdAt": 200,
              "context": " started following you.", "user": { "id": 5, "name": "himmel" } },
            { "id": 3, "type": "THREAD_LIKE", "context": " liked your thread", "threadId": 42,
              "user": { "id": 6, "name": "heiter" } },
            { "id": 4, "type": "SOMETHING_NEW", "context": "?" },
            null
        ] } }));
        let repositories = transport.repositories();

        let notifications = repositories
            .notification
            .notifications(NotificationFilter::All, 1, 25, false)
            .await
            .success()
            .unwrap();

        assert_eq!(notifications.len(), 4);
        assert_eq!(notifications[0].text(), "Episode 4 of Frieren aired.");
        assert_eq!(notifications[1].text(), "himmel started following you.");
        match &notifications[2].kind {
            NotificationKind::ThreadLike(event) => assert_eq!(event.thread.id, 42),
            other => panic!("unexpected kind {other:?}"),
        }
        assert_eq!(notifications[3].notification_type(), NotificationType::Unknown);
        assert!(notifications[3].matches(NotificationFilter::All));
        assert!(!notifications[3].matches(NotificationFilter::Media));

        let variables = transport.last_sent().variables;
        assert_eq!(variables, json!({ "page": 1, "perPage": 25 }));
    }

    #[tokio::test]
    async fn test_filter_restricts_requested_types() {
        let transport = FakeTransport::new().reply(json!({ "Page": { "notifications": [] } }));
        let repositories = transport.repositories();

        let outcome = repositories
            .notification
            .notifications(NotificationFilter::Follows, 2, 10, true)
            .await;

        assert_eq!(outcome, Outcome::Success(Vec::new()));
        assert_eq!(
            transport.last_sent().variables,
            json!({
                "page": 2,
                "perPage": 10,
                "typeIn": ["FOLLOWING"],
                "resetNotificationCount": true
            })
        );
    }

    #[tokio::test]
    async fn test_unread_count_comes_from_viewer() {
        let transport = FakeTransport::new().reply(json!({ "Viewer": {
            "id": 5120, "name": "fern", "unreadNotificationCount": 3
        } }));
        let repositories = transport.repositories();

        assert_eq!(repositories.notification.unread_count().await, Outcome::Success(3));
    }
}

#[cfg(test)]
mod list_tests {
    use super::*;
    use shiori::model::{ListSort, MediaType};

    #[tokio::test]
    async fn test_media_list_attaches_entries() {
        let mut node = media_node(154587, "Frieren");
        node["mediaListEntry"] = serde_json::Value::Null;
        let transport = FakeTransport::new().reply(json!({ "Page": { "mediaList": [
            { "id": 9, "mediaId": 154587, "status": "CURRENT", "progress": 7, "media": node },
            { "id": 10, "status": "PLANNING", "media": null }
        ] } }));
        let repositories = transport.repositories();

        let media = repositories
            .user
            .media_list(
                5120,
                MediaType::Anime,
                MediaListStatus::Unknown,
                ListSort::UpdatedDesc,
                1,
                50,
            )
            .await
            .success()
            .unwrap();

        assert_eq!(media.len(), 1);
        let entry = media[0].list_entry.as_ref().expect("entry attached");
        assert_eq!(entry.progress, 7);
        assert_eq!(entry.status, MediaListStatus::Current);
        assert_eq!(
            transport.last_sent().variables,
            json!({
                "userId": 5120,
                "type": "ANIME",
                "sort": ["UPDATED_TIME_DESC"],
                "page": 1,
                "perPage": 50
            })
        );
    }
}
