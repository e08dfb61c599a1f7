use crate::model::{
    CharacterRole, MediaFormat, MediaListStatus, MediaRelation, MediaSeason, MediaStatus,
    MediaType, NotificationType,
};
use crate::query::dto::{
    CharacterRoleDto, MediaFormatDto, MediaListStatusDto, MediaRelationDto, MediaSeasonDto,
    MediaStatusDto, MediaTypeDto, NotificationTypeDto,
};

/// Variant-for-variant conversion. No wildcard arm: a new transport variant
/// without a domain counterpart fails to compile.
macro_rules! map_enum {
    ($from:ident => $to:ident { $($a:ident => $b:ident),+ $(,)? }) => {
        impl From<$from> for $to {
            fn from(value: $from) -> Self {
                match value {
                    $($from::$a => $to::$b,)+
                }
            }
        }
    };
}

map_enum!(MediaTypeDto => MediaType {
    Anime => Anime,
    Manga => Manga,
    Unknown => Unknown,
});

map_enum!(MediaFormatDto => MediaFormat {
    Tv => Tv,
    TvShort => TvShort,
    Movie => Movie,
    Special => Special,
    Ova => Ova,
    Ona => Ona,
    Music => Music,
    Manga => Manga,
    Novel => Novel,
    OneShot => OneShot,
    Unknown => Unknown,
});

map_enum!(MediaStatusDto => MediaStatus {
    Finished => Finished,
    Releasing => Releasing,
    NotYetReleased => NotYetReleased,
    Cancelled => Cancelled,
    Hiatus => Hiatus,
    Unknown => Unknown,
});

map_enum!(MediaSeasonDto => MediaSeason {
    Winter => Winter,
    Spring => Spring,
    Summer => Summer,
    Fall => Fall,
    Unknown => Unknown,
});

map_enum!(MediaListStatusDto => MediaListStatus {
    Current => Current,
    Planning => Planning,
    Completed => Completed,
    Dropped => Dropped,
    Paused => Paused,
    Repeating => Repeating,
    Unknown => Unknown,
});

map_enum!(MediaRelationDto => MediaRelation {
    Adaptation => Adaptation,
    Prequel => Prequel,
    Sequel => Sequel,
    Parent => Parent,
    SideStory => SideStory,
    Character => Character,
    Summary => Summary,
    Alternative => Alternative,
    SpinOff => SpinOff,
    Other => Other,
    Source => Source,
    Compilation => Compilation,
    Contains => Contains,
    Unknown => Unknown,
});

map_enum!(CharacterRoleDto => CharacterRole {
    Main => Main,
    Supporting => Supporting,
    Background => Background,
    Unknown => Unknown,
});

map_enum!(NotificationTypeDto => NotificationType {
    Airing => Airing,
    Following => Following,
    ActivityMessage => ActivityMessage,
    ActivityMention => ActivityMention,
    ActivityReply => ActivityReply,
    ActivityReplySubscribed => ActivityReplySubscribed,
    ActivityLike => ActivityLike,
    ActivityReplyLike => ActivityReplyLike,
    ThreadCommentMention => ThreadCommentMention,
    ThreadCommentReply => ThreadCommentReply,
    ThreadSubscribed => ThreadCommentSubscribed,
    ThreadCommentLike => ThreadCommentLike,
    ThreadLike => ThreadLike,
    RelatedMediaAddition => RelatedMediaAddition,
    MediaDataChange => MediaDataChange,
    MediaMerge => MediaMerge,
    MediaDeletion => MediaDeletion,
    Unknown => Unknown,
});

/// Absent enum fields map like unrecognized ones.
pub(crate) fn known<D, T>(value: Option<D>) -> T
where
    T: From<D> + Default,
{
    value.map(T::from).unwrap_or_default()
}
