use super::enums::known;
use super::{clean_description, date, image, list, number, text, timestamp};
use crate::model::{
    ExternalLink, Media, MediaListEntry, MediaTag, MediaTitle, NextAiring, RelatedMedia,
    StudioDetail, StudioRef, TagDefinition, UNKNOWN,
};
use crate::query::dto::{
    AiringDto, ListEntryDto, MediaDto, MediaTitleDto, RelationEdgeDto, StudioDto, StudioEdgeDto,
    TagDefinitionDto,
};

impl From<MediaTitleDto> for MediaTitle {
    fn from(dto: MediaTitleDto) -> Self {
        Self {
            romaji: text(dto.romaji),
            english: text(dto.english),
            native: text(dto.native),
            user_preferred: text(dto.user_preferred),
        }
    }
}

pub(crate) fn title(dto: Option<MediaTitleDto>) -> MediaTitle {
    dto.map(MediaTitle::from).unwrap_or_default()
}

impl From<AiringDto> for NextAiring {
    fn from(dto: AiringDto) -> Self {
        Self {
            episode: number(dto.episode),
            airing_at: timestamp(dto.airing_at),
        }
    }
}

impl From<ListEntryDto> for MediaListEntry {
    fn from(dto: ListEntryDto) -> Self {
        Self {
            id: number(dto.id),
            media_id: number(dto.media_id),
            status: known(dto.status),
            progress: number(dto.progress),
            progress_volumes: number(dto.progress_volumes),
            score: dto.score.unwrap_or(UNKNOWN as f64),
            private: dto.private.unwrap_or(false),
            notes: text(dto.notes),
            repeat: number(dto.repeat),
            started_at: date(dto.started_at),
            completed_at: date(dto.completed_at),
            updated_at: timestamp(dto.updated_at),
        }
    }
}

fn related(edge: RelationEdgeDto) -> Option<RelatedMedia> {
    let node = edge.node?;
    Some(RelatedMedia {
        id: number(node.id),
        title: title(node.title).user_preferred,
        cover_image: image(node.cover_image),
        relation: known(edge.relation_type),
        media_type: known(node.media_type),
        format: known(node.format),
    })
}

fn studio(edge: StudioEdgeDto) -> Option<StudioRef> {
    let node = edge.node?;
    Some(StudioRef {
        id: number(node.id),
        name: text(node.name),
        is_main: edge.is_main.unwrap_or(false),
    })
}

impl From<MediaDto> for Media {
    fn from(dto: MediaDto) -> Self {
        let tags = list(dto.tags)
            .into_iter()
            .map(|tag| MediaTag {
                name: text(tag.name),
                rank: number(tag.rank),
                is_spoiler: tag.is_media_spoiler.unwrap_or(false)
                    || tag.is_general_spoiler.unwrap_or(false),
            })
            .collect();
        let relations = dto
            .relations
            .map(|connection| list(connection.edges))
            .unwrap_or_default()
            .into_iter()
            .filter_map(related)
            .collect();
        let studios = dto
            .studios
            .map(|connection| list(connection.edges))
            .unwrap_or_default()
            .into_iter()
            .filter_map(studio)
            .collect();
        let external_links = list(dto.external_links)
            .into_iter()
            .map(|link| ExternalLink {
                site: text(link.site),
                url: text(link.url),
            })
            .collect();

        Self {
            id: number(dto.id),
            id_mal: number(dto.id_mal),
            title: title(dto.title),
            cover_image: image(dto.cover_image),
            banner_image: text(dto.banner_image),
            media_type: known(dto.media_type),
            format: known(dto.format),
            status: known(dto.status),
            season: known(dto.season),
            season_year: number(dto.season_year),
            episodes: number(dto.episodes),
            chapters: number(dto.chapters),
            volumes: number(dto.volumes),
            duration: number(dto.duration),
            average_score: number(dto.average_score),
            mean_score: number(dto.mean_score),
            popularity: number(dto.popularity),
            favourites: number(dto.favourites),
            is_favourite: dto.is_favourite.unwrap_or(false),
            genres: list(dto.genres),
            tags,
            relations,
            external_links,
            studios,
            description: dto
                .description
                .as_deref()
                .map(clean_description)
                .unwrap_or_default(),
            start_date: date(dto.start_date),
            end_date: date(dto.end_date),
            next_airing: dto.next_airing_episode.map(NextAiring::from).unwrap_or_default(),
            list_entry: dto.media_list_entry.map(MediaListEntry::from),
        }
    }
}

impl From<StudioDto> for StudioDetail {
    fn from(dto: StudioDto) -> Self {
        Self {
            id: number(dto.id),
            name: text(dto.name),
            is_animation_studio: dto.is_animation_studio.unwrap_or(false),
            favourites: number(dto.favourites),
            is_favourite: dto.is_favourite.unwrap_or(false),
            site_url: text(dto.site_url),
        }
    }
}

pub fn tag_definition(dto: TagDefinitionDto) -> TagDefinition {
    TagDefinition {
        id: number(dto.id),
        name: text(dto.name),
        category: text(dto.category),
        description: text(dto.description),
        is_adult: dto.is_adult.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FuzzyDate, MediaFormat, MediaListStatus, MediaRelation, MediaType};
    use serde_json::json;

    #[test]
    fn sparse_media_gets_sentinels() {
        let dto: MediaDto = serde_json::from_value(json!({ "id": 7 })).unwrap();
        let media = Media::from(dto);
        assert_eq!(media.id, 7);
        assert_eq!(media.episodes, UNKNOWN);
        assert_eq!(media.average_score, UNKNOWN);
        assert_eq!(media.media_type, MediaType::Unknown);
        assert!(media.title.romaji.is_empty());
        assert!(media.genres.is_empty());
        assert!(media.start_date.is_unknown());
        assert!(media.list_entry.is_none());
    }

    #[test]
    fn nested_connections_are_flattened() {
        let dto: MediaDto = serde_json::from_value(json!({
            "id": 1,
            "type": "ANIME",
            "format": "SOMETHING_NEW",
            "tags": [
                { "name": "Magic", "rank": 90, "isMediaSpoiler": false, "isGeneralSpoiler": false },
                { "name": "Twist", "rank": 60, "isMediaSpoiler": true }
            ],
            "relations": { "edges": [
                { "relationType": "SEQUEL", "node": { "id": 2, "title": { "userPreferred": "Two" }, "type": "ANIME", "format": "TV" } },
                { "relationType": "PREQUEL", "node": null }
            ] },
            "studios": { "edges": [ { "isMain": true, "node": { "id": 9, "name": "Madhouse" } } ] },
            "mediaListEntry": { "id": 5, "status": "CURRENT", "progress": 3, "startedAt": { "year": 2024 } }
        }))
        .unwrap();

        let media = Media::from(dto);
        assert_eq!(media.format, MediaFormat::Unknown);
        assert_eq!(media.visible_tags().count(), 1);
        assert_eq!(media.relations.len(), 1);
        assert_eq!(media.relations[0].relation, MediaRelation::Sequel);
        assert_eq!(media.relations[0].title, "Two");
        assert_eq!(media.studios[0].name, "Madhouse");
        assert!(media.studios[0].is_main);

        let entry = media.list_entry.unwrap();
        assert_eq!(entry.status, MediaListStatus::Current);
        assert_eq!(entry.progress, 3);
        assert_eq!(entry.score, UNKNOWN as f64);
        assert_eq!(entry.started_at, FuzzyDate::new(2024, UNKNOWN, UNKNOWN));
    }
}
