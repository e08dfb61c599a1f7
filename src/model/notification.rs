//! Notifications and their user-facing filter categories.
//!
//! A [`Notification`] carries one [`NotificationKind`] variant per server
//! notification type, each holding only the fields that type has. Which filter
//! a notification belongs to is decided by a single exhaustive match in
//! [`NotificationType::category`]: adding a type without a category there is
//! a compile error, not a notification that silently vanishes from filters.
//!
//! # Examples
//!
//! ```rust
//! use shiori::model::{NotificationFilter, NotificationType};
//!
//! assert!(NotificationFilter::Airing.matches(NotificationType::Airing));
//! assert!(NotificationFilter::All.matches(NotificationType::MediaMerge));
//! assert!(!NotificationFilter::Forum.matches(NotificationType::Following));
//! assert!(!NotificationFilter::Media.matches(NotificationType::Unknown));
//! ```

use serde::{Deserialize, Serialize};

use super::{MediaType, UNKNOWN};

/// Server notification types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    Airing,
    Following,
    ActivityMessage,
    ActivityMention,
    ActivityReply,
    ActivityReplySubscribed,
    ActivityLike,
    ActivityReplyLike,
    ThreadCommentMention,
    ThreadCommentReply,
    ThreadCommentSubscribed,
    ThreadCommentLike,
    ThreadLike,
    RelatedMediaAddition,
    MediaDataChange,
    MediaMerge,
    MediaDeletion,
    Unknown,
}

impl NotificationType {
    /// Every known type, excluding `Unknown`.
    pub const ALL: [NotificationType; 17] = [
        Self::Airing,
        Self::Following,
        Self::ActivityMessage,
        Self::ActivityMention,
        Self::ActivityReply,
        Self::ActivityReplySubscribed,
        Self::ActivityLike,
        Self::ActivityReplyLike,
        Self::ThreadCommentMention,
        Self::ThreadCommentReply,
        Self::ThreadCommentSubscribed,
        Self::ThreadCommentLike,
        Self::ThreadLike,
        Self::RelatedMediaAddition,
        Self::MediaDataChange,
        Self::MediaMerge,
        Self::MediaDeletion,
    ];

    /// The one specific filter this type belongs to; `None` for `Unknown`.
    pub fn category(self) -> Option<NotificationFilter> {
        match self {
            Self::Airing => Some(NotificationFilter::Airing),
            Self::ActivityMessage
            | Self::ActivityMention
            | Self::ActivityReply
            | Self::ActivityReplySubscribed
            | Self::ActivityLike
            | Self::ActivityReplyLike => Some(NotificationFilter::Activity),
            Self::ThreadCommentMention
            | Self::ThreadCommentReply
            | Self::ThreadCommentSubscribed
            | Self::ThreadCommentLike
            | Self::ThreadLike => Some(NotificationFilter::Forum),
            Self::Following => Some(NotificationFilter::Follows),
            Self::RelatedMediaAddition
            | Self::MediaDataChange
            | Self::MediaMerge
            | Self::MediaDeletion => Some(NotificationFilter::Media),
            Self::Unknown => None,
        }
    }

    pub fn as_graphql(self) -> Option<&'static str> {
        match self {
            Self::Airing => Some("AIRING"),
            Self::Following => Some("FOLLOWING"),
            Self::ActivityMessage => Some("ACTIVITY_MESSAGE"),
            Self::ActivityMention => Some("ACTIVITY_MENTION"),
            Self::ActivityReply => Some("ACTIVITY_REPLY"),
            Self::ActivityReplySubscribed => Some("ACTIVITY_REPLY_SUBSCRIBED"),
            Self::ActivityLike => Some("ACTIVITY_LIKE"),
            Self::ActivityReplyLike => Some("ACTIVITY_REPLY_LIKE"),
            Self::ThreadCommentMention => Some("THREAD_COMMENT_MENTION"),
            Self::ThreadCommentReply => Some("THREAD_COMMENT_REPLY"),
            Self::ThreadCommentSubscribed => Some("THREAD_SUBSCRIBED"),
            Self::ThreadCommentLike => Some("THREAD_COMMENT_LIKE"),
            Self::ThreadLike => Some("THREAD_LIKE"),
            Self::RelatedMediaAddition => Some("RELATED_MEDIA_ADDITION"),
            Self::MediaDataChange => Some("MEDIA_DATA_CHANGE"),
            Self::MediaMerge => Some("MEDIA_MERGE"),
            Self::MediaDeletion => Some("MEDIA_DELETION"),
            Self::Unknown => None,
        }
    }
}

/// User-facing notification filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NotificationFilter {
    #[default]
    All,
    Airing,
    Activity,
    Forum,
    Follows,
    Media,
}

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 6] = [
        Self::All,
        Self::Airing,
        Self::Activity,
        Self::Forum,
        Self::Follows,
        Self::Media,
    ];

    pub fn matches(self, kind: NotificationType) -> bool {
        match self {
            Self::All => true,
            specific => kind.category() == Some(specific),
        }
    }

    /// Server types to request for this filter; `None` means no restriction.
    pub fn types(self) -> Option<Vec<NotificationType>> {
        match self {
            Self::All => None,
            specific => Some(
                NotificationType::ALL
                    .into_iter()
                    .filter(|kind| kind.category() == Some(specific))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i32,
    pub name: String,
    pub avatar: String,
}

impl Default for UserRef {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            name: String::new(),
            avatar: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub id: i32,
    pub title: String,
    pub cover_image: String,
    pub media_type: MediaType,
}

impl Default for MediaRef {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            title: String::new(),
            cover_image: String::new(),
            media_type: MediaType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRef {
    pub id: i32,
    pub title: String,
}

impl Default for ThreadRef {
    fn default() -> Self {
        Self {
            id: UNKNOWN,
            title: String::new(),
        }
    }
}

/// Someone interacted with an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub user: UserRef,
    pub activity_id: i32,
}

/// Someone interacted with a forum thread or one of its comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadEvent {
    pub user: UserRef,
    pub thread: ThreadRef,
    /// [`UNKNOWN`] for thread-level events.
    pub comment_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Airing { media: MediaRef, episode: i32 },
    Following { user: UserRef },
    ActivityMessage(ActivityEvent),
    ActivityMention(ActivityEvent),
    ActivityReply(ActivityEvent),
    ActivityReplySubscribed(ActivityEvent),
    ActivityLike(ActivityEvent),
    ActivityReplyLike(ActivityEvent),
    ThreadCommentMention(ThreadEvent),
    ThreadCommentReply(ThreadEvent),
    ThreadCommentSubscribed(ThreadEvent),
    ThreadCommentLike(ThreadEvent),
    ThreadLike(ThreadEvent),
    RelatedMediaAddition { media: MediaRef },
    MediaDataChange { media: MediaRef, reason: String },
    MediaMerge {
        media: MediaRef,
        deleted_titles: Vec<String>,
        reason: String,
    },
    MediaDeletion { deleted_title: String, reason: String },
    Unknown,
}

impl NotificationKind {
    pub fn notification_type(&self) -> NotificationType {
        match self {
            Self::Airing { .. } => NotificationType::Airing,
            Self::Following { .. } => NotificationType::Following,
            Self::ActivityMessage(_) => NotificationType::ActivityMessage,
            Self::ActivityMention(_) => NotificationType::ActivityMention,
            Self::ActivityReply(_) => NotificationType::ActivityReply,
            Self::ActivityReplySubscribed(_) => NotificationType::ActivityReplySubscribed,
            Self::ActivityLike(_) => NotificationType::ActivityLike,
            Self::ActivityReplyLike(_) => NotificationType::ActivityReplyLike,
            Self::ThreadCommentMention(_) => NotificationType::ThreadCommentMention,
            Self::ThreadCommentReply(_) => NotificationType::ThreadCommentReply,
            Self::ThreadCommentSubscribed(_) => NotificationType::ThreadCommentSubscribed,
            Self::ThreadCommentLike(_) => NotificationType::ThreadCommentLike,
            Self::ThreadLike(_) => NotificationType::ThreadLike,
            Self::RelatedMediaAddition { .. } => NotificationType::RelatedMediaAddition,
            Self::MediaDataChange { .. } => NotificationType::MediaDataChange,
            Self::MediaMerge { .. } => NotificationType::MediaMerge,
            Self::MediaDeletion { .. } => NotificationType::MediaDeletion,
            Self::Unknown => NotificationType::Unknown,
        }
    }

    /// The acting user, for kinds that have one.
    pub fn user(&self) -> Option<&UserRef> {
        match self {
            Self::Following { user } => Some(user),
            Self::ActivityMessage(event)
            | Self::ActivityMention(event)
            | Self::ActivityReply(event)
            | Self::ActivityReplySubscribed(event)
            | Self::ActivityLike(event)
            | Self::ActivityReplyLike(event) => Some(&event.user),
            Self::ThreadCommentMention(event)
            | Self::ThreadCommentReply(event)
            | Self::ThreadCommentSubscribed(event)
            | Self::ThreadCommentLike(event)
            | Self::ThreadLike(event) => Some(&event.user),
            _ => None,
        }
    }

    /// The media concerned, for kinds that reference one.
    pub fn media(&self) -> Option<&MediaRef> {
        match self {
            Self::Airing { media, .. }
            | Self::RelatedMediaAddition { media }
            | Self::MediaDataChange { media, .. }
            | Self::MediaMerge { media, .. } => Some(media),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    /// Unix seconds.
    pub created_at: i64,
    /// Server-supplied text fragments, e.g. `" started following you."`.
    pub contexts: Vec<String>,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn notification_type(&self) -> NotificationType {
        self.kind.notification_type()
    }

    pub fn matches(&self, filter: NotificationFilter) -> bool {
        filter.matches(self.notification_type())
    }

    /// Readable one-line text assembled from the subject and the context.
    ///
    /// Airing notifications have three fragments around the episode number
    /// and the title (`"Episode "`, `" of "`, `" aired."`).
    pub fn text(&self) -> String {
        let context = |index: usize| self.contexts.get(index).map(String::as_str).unwrap_or("");
        match &self.kind {
            NotificationKind::Airing { media, episode } => format!(
                "{}{}{}{}{}",
                context(0),
                episode,
                context(1),
                media.title,
                context(2)
            ),
            NotificationKind::MediaDeletion { deleted_title, .. } => {
                format!("{}{}", deleted_title, context(0))
            }
            NotificationKind::MediaMerge {
                media,
                deleted_titles,
                ..
            } => format!("{} {}{}", deleted_titles.join(", "), context(0), media.title),
            kind => {
                let subject = kind
                    .user()
                    .map(|user| user.name.as_str())
                    .or_else(|| kind.media().map(|media| media.title.as_str()))
                    .unwrap_or("");
                format!("{}{}", subject, self.contexts.concat())
            }
        }
    }
}
