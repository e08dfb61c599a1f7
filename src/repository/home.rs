use chrono::NaiveDate;
use std::sync::Arc;

use super::execute;
use crate::mapping::{list, tag_definition};
use crate::model::{Media, MediaSeason, MediaSort, MediaType, TagDefinition};
use crate::net::Transport;
use crate::outcome::Outcome;
use crate::query::dto::MediaPageData;
use crate::query::{GenreCollectionQuery, MediaPageQuery, TagCollectionQuery};
use crate::season;
use crate::types::SearchFilters;

/// Discovery lists and catalog search.
#[derive(Clone)]
pub struct HomeRepository {
    transport: Arc<dyn Transport>,
}

fn media_page(data: MediaPageData) -> Option<Vec<Media>> {
    data.page
        .map(|page| list(page.media).into_iter().map(Media::from).collect())
}

impl HomeRepository {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn page(&self, query: MediaPageQuery) -> Outcome<Vec<Media>> {
        execute(self.transport.as_ref(), &query, media_page).await
    }

    fn sorted(
        media_type: MediaType,
        sort: &[MediaSort],
        page: u32,
        per_page: u32,
    ) -> MediaPageQuery {
        MediaPageQuery {
            page: Some(page),
            per_page: Some(per_page),
            media_type: media_type.as_graphql(),
            sort: sort.iter().map(|sort| sort.as_graphql()).collect(),
            ..Default::default()
        }
    }

    /// What is trending right now.
    pub async fn trending(
        &self,
        media_type: MediaType,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<Media>> {
        self.page(Self::sorted(
            media_type,
            &[MediaSort::TrendingDesc, MediaSort::PopularityDesc],
            page,
            per_page,
        ))
        .await
    }

    /// Anime airing in `season` of `year`, most popular first.
    pub async fn seasonal(
        &self,
        season: MediaSeason,
        year: i32,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<Media>> {
        let query = MediaPageQuery {
            season: season.as_graphql(),
            season_year: Some(year),
            ..Self::sorted(MediaType::Anime, &[MediaSort::PopularityDesc], page, per_page)
        };
        self.page(query).await
    }

    /// Highest rated of all time.
    pub async fn top_ranked(
        &self,
        media_type: MediaType,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<Media>> {
        self.page(Self::sorted(media_type, &[MediaSort::ScoreDesc], page, per_page))
            .await
    }

    pub async fn popular(
        &self,
        media_type: MediaType,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<Media>> {
        self.page(Self::sorted(media_type, &[MediaSort::PopularityDesc], page, per_page))
            .await
    }

    /// Anime of the season after the one airing on `today`.
    pub async fn upcoming(
        &self,
        page: u32,
        per_page: u32,
        today: NaiveDate,
    ) -> Outcome<Vec<Media>> {
        let next = season::upcoming(today);
        self.seasonal(next.season, next.year, page, per_page).await
    }

    pub async fn search(
        &self,
        filters: &SearchFilters,
        page: u32,
        per_page: u32,
    ) -> Outcome<Vec<Media>> {
        tracing::debug!(query = %filters.query, page, "Searching catalog");
        self.page(filters.to_query(page, per_page)).await
    }

    /// Every genre name, for filter pickers.
    pub async fn genres(&self) -> Outcome<Vec<String>> {
        execute(self.transport.as_ref(), &GenreCollectionQuery {}, |data| {
            data.genres.map(|genres| genres.into_iter().flatten().collect())
        })
        .await
    }

    /// Every tag definition, for filter pickers.
    pub async fn tags(&self) -> Outcome<Vec<TagDefinition>> {
        execute(self.transport.as_ref(), &TagCollectionQuery {}, |data| {
            data.tags
                .map(|tags| tags.into_iter().flatten().map(tag_definition).collect())
        })
        .await
    }
}
