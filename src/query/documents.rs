//! GraphQL document text.
//!
//! Shared selections are macros rather than `const`s so they can be spliced
//! into each document with `concat!` at compile time.

macro_rules! date_fields {
    () => {
        "{ year month day }"
    };
}

macro_rules! list_entry_fields {
    () => {
        concat!(
            "fragment ListEntryFields on MediaList {
    id
    mediaId
    status
    progress
    progressVolumes
    score(format: POINT_100)
    private
    notes
    repeat
    startedAt ",
            date_fields!(),
            "
    completedAt ",
            date_fields!(),
            "
    updatedAt
}
"
        )
    };
}

macro_rules! media_fields {
    () => {
        concat!(
            "fragment MediaFields on Media {
    id
    idMal
    title { romaji english native userPreferred }
    coverImage { large }
    bannerImage
    type
    format
    status
    season
    seasonYear
    episodes
    chapters
    volumes
    averageScore
    meanScore
    popularity
    favourites
    isFavourite
    genres
    startDate ",
            date_fields!(),
            "
    nextAiringEpisode { episode airingAt }
    mediaListEntry { ...ListEntryFields }
}
",
            list_entry_fields!()
        )
    };
}

macro_rules! person_name_fields {
    () => {
        "name { full native userPreferred alternative alternativeSpoiler }"
    };
}

pub const MEDIA_PAGE: &str = concat!(
    "query MediaPage(
    $page: Int
    $perPage: Int
    $type: MediaType
    $sort: [MediaSort]
    $search: String
    $formatIn: [MediaFormat]
    $status: MediaStatus
    $season: MediaSeason
    $seasonYear: Int
    $genreIn: [String]
    $genreNotIn: [String]
    $tagIn: [String]
    $tagNotIn: [String]
    $onList: Boolean
    $isAdult: Boolean
) {
    Page(page: $page, perPage: $perPage) {
        pageInfo { hasNextPage }
        media(
            type: $type
            sort: $sort
            search: $search
            format_in: $formatIn
            status: $status
            season: $season
            seasonYear: $seasonYear
            genre_in: $genreIn
            genre_not_in: $genreNotIn
            tag_in: $tagIn
            tag_not_in: $tagNotIn
            onList: $onList
            isAdult: $isAdult
        ) {
            ...MediaFields
        }
    }
}
",
    media_fields!()
);

pub const GENRE_COLLECTION: &str = "query GenreCollection {
    GenreCollection
}
";

pub const TAG_COLLECTION: &str = "query TagCollection {
    MediaTagCollection { id name category description isAdult }
}
";

pub const MEDIA_DETAILS: &str = concat!(
    "query MediaDetails($id: Int) {
    Media(id: $id) {
        ...MediaFields
        duration
        description(asHtml: false)
        endDate ",
    date_fields!(),
    "
        tags { name rank isMediaSpoiler isGeneralSpoiler }
        relations {
            edges {
                relationType(version: 2)
                node { id title { userPreferred } coverImage { large } type format }
            }
        }
        externalLinks { site url }
        studios { edges { isMain node { id name } } }
    }
}
",
    media_fields!()
);

pub const MEDIA_CHARACTERS: &str = "query MediaCharacters($id: Int, $page: Int, $perPage: Int) {
    Media(id: $id) {
        characters(page: $page, perPage: $perPage, sort: [ROLE, RELEVANCE, ID]) {
            edges {
                role
                node { id name { userPreferred } image { large } }
                voiceActors(language: JAPANESE) { id name { userPreferred } image { large } }
            }
        }
    }
}
";

pub const MEDIA_STAFF: &str = "query MediaStaff($id: Int, $page: Int, $perPage: Int) {
    Media(id: $id) {
        staff(page: $page, perPage: $perPage, sort: [RELEVANCE, ID]) {
            edges {
                role
                node { id name { userPreferred } image { large } }
            }
        }
    }
}
";

pub const CHARACTER_DETAILS: &str = concat!(
    "query CharacterDetails($id: Int) {
    Character(id: $id) {
        id
        ",
    person_name_fields!(),
    "
        image { large }
        favourites
        isFavourite
        dateOfBirth ",
    date_fields!(),
    "
        age
        gender
        bloodType
        description(asHtml: false)
    }
}
"
);

pub const CHARACTER_MEDIA: &str = concat!(
    "query CharacterMedia($id: Int, $page: Int, $perPage: Int) {
    Character(id: $id) {
        media(page: $page, perPage: $perPage, sort: [POPULARITY_DESC]) {
            edges {
                characterRole
                node { ...MediaFields }
            }
        }
    }
}
",
    media_fields!()
);

pub const STAFF_DETAILS: &str = concat!(
    "query StaffDetails($id: Int) {
    Staff(id: $id) {
        id
        ",
    person_name_fields!(),
    "
        image { large }
        favourites
        isFavourite
        dateOfBirth ",
    date_fields!(),
    "
        dateOfDeath ",
    date_fields!(),
    "
        age
        gender
        bloodType
        homeTown
        yearsActive
        primaryOccupations
        languageV2
        description(asHtml: false)
    }
}
"
);

pub const STAFF_MEDIA: &str = concat!(
    "query StaffMedia($id: Int, $page: Int, $perPage: Int) {
    Staff(id: $id) {
        staffMedia(page: $page, perPage: $perPage, sort: [POPULARITY_DESC]) {
            edges {
                staffRole
                node { ...MediaFields }
            }
        }
    }
}
",
    media_fields!()
);

pub const STUDIO_DETAILS: &str = "query StudioDetails($id: Int) {
    Studio(id: $id) {
        id
        name
        isAnimationStudio
        favourites
        isFavourite
        siteUrl
    }
}
";

pub const STUDIO_MEDIA: &str = concat!(
    "query StudioMedia($id: Int, $page: Int, $perPage: Int) {
    Studio(id: $id) {
        media(page: $page, perPage: $perPage, sort: [START_DATE_DESC]) {
            edges {
                isMainStudio
                node { ...MediaFields }
            }
        }
    }
}
",
    media_fields!()
);

macro_rules! notification_media {
    () => {
        "media { id title { userPreferred } coverImage { large } type }"
    };
}

macro_rules! notification_user {
    () => {
        "user { id name avatar { medium } }"
    };
}

pub const NOTIFICATIONS: &str = concat!(
    "query Notifications($page: Int, $perPage: Int, $typeIn: [NotificationType], $resetNotificationCount: Boolean) {
    Page(page: $page, perPage: $perPage) {
        pageInfo { hasNextPage }
        notifications(type_in: $typeIn, resetNotificationCount: $resetNotificationCount) {
            __typename
            ... on AiringNotification { id type createdAt episode contexts ",
    notification_media!(),
    " }
            ... on FollowingNotification { id type createdAt context ",
    notification_user!(),
    " }
            ... on ActivityMessageNotification { id type createdAt context activityId ",
    notification_user!(),
    " }
            ... on ActivityMentionNotification { id type createdAt context activityId ",
    notification_user!(),
    " }
            ... on ActivityReplyNotification { id type createdAt context activityId ",
    notification_user!(),
    " }
            ... on ActivityReplySubscribedNotification { id type createdAt context activityId ",
    notification_user!(),
    " }
            ... on ActivityLikeNotification { id type createdAt context activityId ",
    notification_user!(),
    " }
            ... on ActivityReplyLikeNotification { id type createdAt context activityId ",
    notification_user!(),
    " }
            ... on ThreadCommentMentionNotification { id type createdAt context commentId thread { id title } ",
    notification_user!(),
    " }
            ... on ThreadCommentReplyNotification { id type createdAt context commentId thread { id title } ",
    notification_user!(),
    " }
            ... on ThreadCommentSubscribedNotification { id type createdAt context commentId thread { id title } ",
    notification_user!(),
    " }
            ... on ThreadCommentLikeNotification { id type createdAt context commentId thread { id title } ",
    notification_user!(),
    " }
            ... on ThreadLikeNotification { id type createdAt context threadId thread { id title } ",
    notification_user!(),
    " }
            ... on RelatedMediaAdditionNotification { id type createdAt context ",
    notification_media!(),
    " }
            ... on MediaDataChangeNotification { id type createdAt context reason ",
    notification_media!(),
    " }
            ... on MediaMergeNotification { id type createdAt context reason deletedMediaTitles ",
    notification_media!(),
    " }
            ... on MediaDeletionNotification { id type createdAt context reason deletedMediaTitle }
        }
    }
}
"
);

pub const VIEWER: &str = "query Viewer {
    Viewer {
        id
        name
        avatar { large }
        unreadNotificationCount
    }
}
";

pub const MEDIA_LIST: &str = concat!(
    "query MediaList(
    $userId: Int
    $type: MediaType
    $status: MediaListStatus
    $sort: [MediaListSort]
    $page: Int
    $perPage: Int
) {
    Page(page: $page, perPage: $perPage) {
        pageInfo { hasNextPage }
        mediaList(userId: $userId, type: $type, status: $status, sort: $sort) {
            ...ListEntryFields
            media { ...MediaFields }
        }
    }
}
",
    media_fields!()
);

pub const TOGGLE_FAVOURITE: &str = "mutation ToggleFavourite(
    $animeId: Int
    $mangaId: Int
    $characterId: Int
    $staffId: Int
    $studioId: Int
) {
    ToggleFavourite(
        animeId: $animeId
        mangaId: $mangaId
        characterId: $characterId
        staffId: $staffId
        studioId: $studioId
    ) {
        anime { nodes { id } }
        manga { nodes { id } }
        characters { nodes { id } }
        staff { nodes { id } }
        studios { nodes { id } }
    }
}
";

pub const SAVE_MEDIA_LIST_ENTRY: &str = concat!(
    "mutation SaveMediaListEntry(
    $mediaId: Int
    $status: MediaListStatus
    $scoreRaw: Int
    $progress: Int
    $progressVolumes: Int
    $repeat: Int
    $private: Boolean
    $notes: String
    $startedAt: FuzzyDateInput
    $completedAt: FuzzyDateInput
) {
    SaveMediaListEntry(
        mediaId: $mediaId
        status: $status
        scoreRaw: $scoreRaw
        progress: $progress
        progressVolumes: $progressVolumes
        repeat: $repeat
        private: $private
        notes: $notes
        startedAt: $startedAt
        completedAt: $completedAt
    ) {
        ...ListEntryFields
    }
}
",
    list_entry_fields!()
);

pub const DELETE_MEDIA_LIST_ENTRY: &str = "mutation DeleteMediaListEntry($id: Int) {
    DeleteMediaListEntry(id: $id) { deleted }
}
";
