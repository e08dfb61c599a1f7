//! Response shapes as the server sends them.
//!
//! Everything is optional: the server may null out any field, and a field
//! missing from the selection set is simply absent. Lists are
//! `Option<Vec<Option<T>>>` because GraphQL list items are nullable too.
//! Sentinels are assigned later, in [`crate::mapping`].

use serde::Deserialize;

/// A nullable GraphQL list.
pub type List<T> = Option<Vec<Option<T>>>;

macro_rules! transport_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant,)+
            #[serde(other)]
            Unknown,
        }
    };
}

transport_enum!(MediaTypeDto { Anime, Manga });

transport_enum!(MediaFormatDto {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    Manga,
    Novel,
    OneShot,
});

transport_enum!(MediaStatusDto {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
});

transport_enum!(MediaSeasonDto {
    Winter,
    Spring,
    Summer,
    Fall,
});

transport_enum!(MediaListStatusDto {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
});

transport_enum!(MediaRelationDto {
    Adaptation,
    Prequel,
    Sequel,
    Parent,
    SideStory,
    Character,
    Summary,
    Alternative,
    SpinOff,
    Other,
    Source,
    Compilation,
    Contains,
});

transport_enum!(CharacterRoleDto {
    Main,
    Supporting,
    Background,
});

transport_enum!(NotificationTypeDto {
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
    ThreadSubscribed,
    ThreadCommentLike,
    ThreadLike,
    RelatedMediaAddition,
    MediaDataChange,
    MediaMerge,
    MediaDeletion,
});

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoDto {
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FuzzyDateDto {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTitleDto {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
    pub user_preferred: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageDto {
    pub large: Option<String>,
    pub medium: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaTagDto {
    pub name: Option<String>,
    pub rank: Option<i32>,
    pub is_media_spoiler: Option<bool>,
    pub is_general_spoiler: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedNodeDto {
    pub id: Option<i32>,
    pub title: Option<MediaTitleDto>,
    pub cover_image: Option<ImageDto>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaTypeDto>,
    pub format: Option<MediaFormatDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEdgeDto {
    pub relation_type: Option<MediaRelationDto>,
    pub node: Option<RelatedNodeDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgesDto<E> {
    pub edges: List<E>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodesDto<N> {
    pub nodes: List<N>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalLinkDto {
    pub site: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioNodeDto {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioEdgeDto {
    pub is_main: Option<bool>,
    pub node: Option<StudioNodeDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiringDto {
    pub episode: Option<i32>,
    pub airing_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntryDto {
    pub id: Option<i32>,
    pub media_id: Option<i32>,
    pub status: Option<MediaListStatusDto>,
    pub progress: Option<i32>,
    pub progress_volumes: Option<i32>,
    pub score: Option<f64>,
    pub private: Option<bool>,
    pub notes: Option<String>,
    pub repeat: Option<i32>,
    pub started_at: Option<FuzzyDateDto>,
    pub completed_at: Option<FuzzyDateDto>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDto {
    pub id: Option<i32>,
    pub id_mal: Option<i32>,
    pub title: Option<MediaTitleDto>,
    pub cover_image: Option<ImageDto>,
    pub banner_image: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaTypeDto>,
    pub format: Option<MediaFormatDto>,
    pub status: Option<MediaStatusDto>,
    pub season: Option<MediaSeasonDto>,
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    pub chapters: Option<i32>,
    pub volumes: Option<i32>,
    pub duration: Option<i32>,
    pub average_score: Option<i32>,
    pub mean_score: Option<i32>,
    pub popularity: Option<i32>,
    pub favourites: Option<i32>,
    pub is_favourite: Option<bool>,
    pub genres: List<String>,
    pub tags: List<MediaTagDto>,
    pub relations: Option<EdgesDto<RelationEdgeDto>>,
    pub external_links: List<ExternalLinkDto>,
    pub studios: Option<EdgesDto<StudioEdgeDto>>,
    pub description: Option<String>,
    pub start_date: Option<FuzzyDateDto>,
    pub end_date: Option<FuzzyDateDto>,
    pub next_airing_episode: Option<AiringDto>,
    pub media_list_entry: Option<ListEntryDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPageDto {
    pub page_info: Option<PageInfoDto>,
    pub media: List<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaPageData {
    #[serde(rename = "Page")]
    pub page: Option<MediaPageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreCollectionData {
    #[serde(rename = "GenreCollection")]
    pub genres: List<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDefinitionDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_adult: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagCollectionData {
    #[serde(rename = "MediaTagCollection")]
    pub tags: List<TagDefinitionDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaData {
    #[serde(rename = "Media")]
    pub media: Option<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameDto {
    pub full: Option<String>,
    pub native: Option<String>,
    pub user_preferred: Option<String>,
    pub alternative: List<String>,
    pub alternative_spoiler: List<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonNodeDto {
    pub id: Option<i32>,
    pub name: Option<NameDto>,
    pub image: Option<ImageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEdgeDto {
    pub role: Option<CharacterRoleDto>,
    pub node: Option<PersonNodeDto>,
    pub voice_actors: List<PersonNodeDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffEdgeDto {
    pub role: Option<String>,
    pub node: Option<PersonNodeDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaCharactersDto {
    pub characters: Option<EdgesDto<CharacterEdgeDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaCharactersData {
    #[serde(rename = "Media")]
    pub media: Option<MediaCharactersDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaStaffDto {
    pub staff: Option<EdgesDto<StaffEdgeDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaStaffData {
    #[serde(rename = "Media")]
    pub media: Option<MediaStaffDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: Option<i32>,
    pub name: Option<NameDto>,
    pub image: Option<ImageDto>,
    pub favourites: Option<i32>,
    pub is_favourite: Option<bool>,
    pub date_of_birth: Option<FuzzyDateDto>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterData {
    #[serde(rename = "Character")]
    pub character: Option<CharacterDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMediaEdgeDto {
    pub character_role: Option<CharacterRoleDto>,
    pub node: Option<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterMediaDto {
    pub media: Option<EdgesDto<CharacterMediaEdgeDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterMediaData {
    #[serde(rename = "Character")]
    pub character: Option<CharacterMediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub id: Option<i32>,
    pub name: Option<NameDto>,
    pub image: Option<ImageDto>,
    pub favourites: Option<i32>,
    pub is_favourite: Option<bool>,
    pub date_of_birth: Option<FuzzyDateDto>,
    pub date_of_death: Option<FuzzyDateDto>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub blood_type: Option<String>,
    pub home_town: Option<String>,
    pub years_active: List<i32>,
    pub primary_occupations: List<String>,
    #[serde(rename = "languageV2")]
    pub language: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffData {
    #[serde(rename = "Staff")]
    pub staff: Option<StaffDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMediaEdgeDto {
    pub staff_role: Option<String>,
    pub node: Option<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMediaDto {
    pub staff_media: Option<EdgesDto<StaffMediaEdgeDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffMediaData {
    #[serde(rename = "Staff")]
    pub staff: Option<StaffMediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub is_animation_studio: Option<bool>,
    pub favourites: Option<i32>,
    pub is_favourite: Option<bool>,
    pub site_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioData {
    #[serde(rename = "Studio")]
    pub studio: Option<StudioDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioMediaEdgeDto {
    pub is_main_studio: Option<bool>,
    pub node: Option<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioMediaDto {
    pub media: Option<EdgesDto<StudioMediaEdgeDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioMediaData {
    #[serde(rename = "Studio")]
    pub studio: Option<StudioMediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub avatar: Option<ImageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreadDto {
    pub id: Option<i32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationMediaDto {
    pub id: Option<i32>,
    pub title: Option<MediaTitleDto>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<ImageDto>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaTypeDto>,
}

/// Union of every notification shape. Which fields are present depends on
/// `type`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: Option<i32>,
    #[serde(rename = "type")]
    pub notification_type: Option<NotificationTypeDto>,
    pub created_at: Option<i64>,
    pub context: Option<String>,
    pub contexts: List<String>,
    pub episode: Option<i32>,
    pub media: Option<NotificationMediaDto>,
    pub user: Option<UserDto>,
    pub activity_id: Option<i32>,
    pub comment_id: Option<i32>,
    pub thread_id: Option<i32>,
    pub thread: Option<ThreadDto>,
    pub reason: Option<String>,
    pub deleted_media_title: Option<String>,
    pub deleted_media_titles: List<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPageDto {
    pub page_info: Option<PageInfoDto>,
    pub notifications: List<NotificationDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationPageData {
    #[serde(rename = "Page")]
    pub page: Option<NotificationPageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub avatar: Option<ImageDto>,
    pub unread_notification_count: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerData {
    #[serde(rename = "Viewer")]
    pub viewer: Option<ViewerDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaListItemDto {
    #[serde(flatten)]
    pub entry: ListEntryDto,
    pub media: Option<MediaDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListPageDto {
    pub page_info: Option<PageInfoDto>,
    pub media_list: List<MediaListItemDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaListData {
    #[serde(rename = "Page")]
    pub page: Option<MediaListPageDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdDto {
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavouritesDto {
    pub anime: Option<NodesDto<IdDto>>,
    pub manga: Option<NodesDto<IdDto>>,
    pub characters: Option<NodesDto<IdDto>>,
    pub staff: Option<NodesDto<IdDto>>,
    pub studios: Option<NodesDto<IdDto>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleFavouriteData {
    #[serde(rename = "ToggleFavourite")]
    pub favourites: Option<FavouritesDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveMediaListEntryData {
    #[serde(rename = "SaveMediaListEntry")]
    pub entry: Option<ListEntryDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeletedDto {
    pub deleted: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteMediaListEntryData {
    #[serde(rename = "DeleteMediaListEntry")]
    pub result: Option<DeletedDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unrecognized_enum_values_fall_back_to_unknown() {
        let format: MediaFormatDto = serde_json::from_value(json!("HOLOGRAM")).unwrap();
        assert_eq!(format, MediaFormatDto::Unknown);

        let kind: NotificationTypeDto = serde_json::from_value(json!("THREAD_SUBSCRIBED")).unwrap();
        assert_eq!(kind, NotificationTypeDto::ThreadSubscribed);
    }

    #[test]
    fn null_list_items_are_tolerated() {
        let page: MediaPageDto = serde_json::from_value(json!({
            "pageInfo": { "hasNextPage": true },
            "media": [{ "id": 1 }, null, { "id": 3 }]
        }))
        .unwrap();
        let media = page.media.unwrap();
        assert_eq!(media.len(), 3);
        assert!(media[1].is_none());
    }
}
