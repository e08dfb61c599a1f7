use super::enums::known;
use super::{image, list, number, text, timestamp};
use crate::model::{
    ActivityEvent, MediaRef, Notification, NotificationKind, NotificationType, ThreadEvent,
    ThreadRef, UNKNOWN, UserRef, Viewer,
};
use crate::query::dto::{NotificationDto, NotificationMediaDto, ThreadDto, UserDto, ViewerDto};

fn user(dto: Option<UserDto>) -> UserRef {
    dto.map(|user| UserRef {
        id: number(user.id),
        name: text(user.name),
        avatar: image(user.avatar),
    })
    .unwrap_or_default()
}

fn media(dto: Option<NotificationMediaDto>) -> MediaRef {
    dto.map(|media| MediaRef {
        id: number(media.id),
        title: super::media::title(media.title).user_preferred,
        cover_image: image(media.cover_image),
        media_type: known(media.media_type),
    })
    .unwrap_or_default()
}

fn thread(dto: Option<ThreadDto>, fallback_id: Option<i32>) -> ThreadRef {
    match dto {
        Some(thread) => ThreadRef {
            id: thread.id.or(fallback_id).unwrap_or(UNKNOWN),
            title: text(thread.title),
        },
        None => ThreadRef {
            id: number(fallback_id),
            ..ThreadRef::default()
        },
    }
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        let notification_type = dto
            .notification_type
            .map(NotificationType::from)
            .unwrap_or(NotificationType::Unknown);

        // Airing carries a list of fragments; every other kind a single string.
        let contexts = match dto.context {
            Some(context) => vec![context],
            None => list(dto.contexts),
        };

        let activity = || ActivityEvent {
            user: user(dto.user.clone()),
            activity_id: number(dto.activity_id),
        };
        let thread_event = || ThreadEvent {
            user: user(dto.user.clone()),
            thread: thread(dto.thread.clone(), dto.thread_id),
            comment_id: number(dto.comment_id),
        };

        let kind = match notification_type {
            NotificationType::Airing => NotificationKind::Airing {
                media: media(dto.media.clone()),
                episode: number(dto.episode),
            },
            NotificationType::Following => NotificationKind::Following {
                user: user(dto.user.clone()),
            },
            NotificationType::ActivityMessage => NotificationKind::ActivityMessage(activity()),
            NotificationType::ActivityMention => NotificationKind::ActivityMention(activity()),
            NotificationType::ActivityReply => NotificationKind::ActivityReply(activity()),
            NotificationType::ActivityReplySubscribed => {
                NotificationKind::ActivityReplySubscribed(activity())
            }
            NotificationType::ActivityLike => NotificationKind::ActivityLike(activity()),
            NotificationType::ActivityReplyLike => NotificationKind::ActivityReplyLike(activity()),
            NotificationType::ThreadCommentMention => {
                NotificationKind::ThreadCommentMention(thread_event())
            }
            NotificationType::ThreadCommentReply => {
                NotificationKind::ThreadCommentReply(thread_event())
            }
            NotificationType::ThreadCommentSubscribed => {
                NotificationKind::ThreadCommentSubscribed(thread_event())
            }
            NotificationType::ThreadCommentLike => {
                NotificationKind::ThreadCommentLike(thread_event())
            }
            NotificationType::ThreadLike => NotificationKind::ThreadLike(thread_event()),
            NotificationType::RelatedMediaAddition => NotificationKind::RelatedMediaAddition {
                media: media(dto.media.clone()),
            },
            NotificationType::MediaDataChange => NotificationKind::MediaDataChange {
                media: media(dto.media.clone()),
                reason: text(dto.reason.clone()),
            },
            NotificationType::MediaMerge => NotificationKind::MediaMerge {
                media: media(dto.media.clone()),
                deleted_titles: list(dto.deleted_media_titles.clone()),
                reason: text(dto.reason.clone()),
            },
            NotificationType::MediaDeletion => NotificationKind::MediaDeletion {
                deleted_title: text(dto.deleted_media_title.clone()),
                reason: text(dto.reason.clone()),
            },
            NotificationType::Unknown => NotificationKind::Unknown,
        };

        Self {
            id: number(dto.id),
            created_at: timestamp(dto.created_at),
            contexts,
            kind,
        }
    }
}

impl From<ViewerDto> for Viewer {
    fn from(dto: ViewerDto) -> Self {
        Self {
            id: number(dto.id),
            name: text(dto.name),
            avatar: image(dto.avatar),
            unread_notification_count: number(dto.unread_notification_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationFilter;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Notification {
        Notification::from(serde_json::from_value::<NotificationDto>(value).unwrap())
    }

    #[test]
    fn airing_notification_reads_naturally() {
        let notification = decode(json!({
            "__typename": "AiringNotification",
            "id": 11,
            "type": "AIRING",
            "createdAt": 1700000000,
            "episode": 4,
            "contexts": ["Episode ", " of ", " aired."],
            "media": { "id": 3, "title": { "userPreferred": "Frieren" }, "type": "ANIME" }
        }));
        assert!(notification.matches(NotificationFilter::Airing));
        assert_eq!(notification.text(), "Episode 4 of Frieren aired.");
    }

    #[test]
    fn thread_like_uses_thread_id_when_thread_is_missing() {
        let notification = decode(json!({
            "id": 12,
            "type": "THREAD_LIKE",
            "threadId": 99,
            "context": " liked your thread",
            "user": { "id": 2, "name": "ayaka" }
        }));
        match notification.kind {
            NotificationKind::ThreadLike(event) => {
                assert_eq!(event.thread.id, 99);
                assert_eq!(event.comment_id, UNKNOWN);
                assert_eq!(event.user.name, "ayaka");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn unrecognized_type_matches_only_all() {
        let notification = decode(json!({ "id": 13, "type": "BRAND_NEW_KIND" }));
        assert_eq!(notification.kind, NotificationKind::Unknown);
        for filter in NotificationFilter::ALL {
            assert_eq!(notification.matches(filter), filter == NotificationFilter::All);
        }
    }
}
