use chrono::NaiveDate;
use shiori::config::ClientConfig;
use shiori::model::{FuzzyDate, MediaListStatus, MediaSeason, MediaType, NotificationType, UNKNOWN};
use shiori::prelude::*;
use shiori::season::{self, SeasonYear};

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_search_filters_builder() {
        let filters = SearchFiltersBuilder::default()
            .query("mushishi")
            .media_type(MediaType::Anime)
            .include_genres(vec!["Mystery".to_string(), "Slice of Life".to_string()])
            .exclude_tags(vec!["Gore".to_string()])
            .season_year(2005)
            .build()
            .unwrap();

        assert_eq!(filters.query, "mushishi");
        assert_eq!(filters.media_type, Some(MediaType::Anime));
        assert_eq!(filters.include_genres.len(), 2);
        assert!(filters.exclude_genres.is_empty());

        let query = filters.to_query(3, 15);
        assert_eq!(query.page, Some(3));
        assert_eq!(query.per_page, Some(15));
        assert_eq!(query.media_type, Some("ANIME"));
        assert_eq!(query.tag_not_in, vec!["Gore"]);
        assert_eq!(query.season_year, Some(2005));
        assert_eq!(query.sort, vec!["SEARCH_MATCH"]);
    }

    #[test]
    fn test_search_filters_from_text() {
        let filters = SearchFilters::from("  ");
        assert_eq!(filters.effective_sort(), MediaSort::PopularityDesc);
        assert!(filters.to_query(1, 10).search.is_none());
    }

    #[test]
    fn test_list_entry_update_builder() {
        let update = ListEntryUpdateBuilder::default()
            .status(MediaListStatus::Paused)
            .notes("on hold until the dub")
            .build()
            .unwrap();

        assert!(!update.is_empty());
        assert!(ListEntryUpdate::default().is_empty());

        let mutation = update.to_mutation(42);
        assert_eq!(mutation.media_id, 42);
        assert_eq!(mutation.status, Some("PAUSED"));
        assert_eq!(mutation.notes.as_deref(), Some("on hold until the dub"));
        assert!(mutation.progress.is_none());
    }

    #[test]
    fn test_completion_rule() {
        let today = date(2024, 3, 9);
        let finish = |status: Option<MediaListStatus>, progress: i32, total: i32| {
            let mut update = ListEntryUpdate {
                progress: Some(progress),
                ..ListEntryUpdate::default()
            };
            update.status = status;
            update.complete_if_finished(total, today)
        };

        let done = finish(None, 12, 12);
        assert_eq!(done.status, Some(MediaListStatus::Completed));
        assert_eq!(done.completed_at, Some(FuzzyDate::new(2024, 3, 9)));

        let rewatching = finish(Some(MediaListStatus::Repeating), 24, 12);
        assert_eq!(rewatching.status, Some(MediaListStatus::Completed));

        let dropped = finish(Some(MediaListStatus::Dropped), 12, 12);
        assert_eq!(dropped.status, Some(MediaListStatus::Dropped));
        assert!(dropped.completed_at.is_none());

        assert!(finish(None, 11, 12).status.is_none());
        assert!(finish(None, 12, UNKNOWN).status.is_none());
        assert!(finish(None, 0, 0).status.is_none());
    }

    #[test]
    fn test_season_arithmetic() {
        assert_eq!(season::from_month(12), MediaSeason::Winter);
        assert_eq!(season::from_month(4), MediaSeason::Spring);
        assert_eq!(season::from_month(13), MediaSeason::Unknown);

        assert_eq!(
            season::current(date(2023, 12, 31)),
            SeasonYear::new(MediaSeason::Winter, 2024)
        );
        assert_eq!(
            season::current(date(2024, 2, 29)),
            SeasonYear::new(MediaSeason::Winter, 2024)
        );
        assert_eq!(
            season::upcoming(date(2024, 10, 1)),
            SeasonYear::new(MediaSeason::Winter, 2025)
        );
        assert_eq!(SeasonYear::new(MediaSeason::Winter, 2024).previous().to_string(), "Fall 2023");
    }

    #[test]
    fn test_notification_filters_cover_every_type() {
        let specific = &NotificationFilter::ALL[1..];
        for kind in NotificationType::ALL {
            let matching = specific.iter().filter(|filter| filter.matches(kind)).count();
            assert_eq!(matching, 1, "{kind:?} should belong to exactly one filter");
            assert!(NotificationFilter::All.matches(kind));
        }
        assert!(specific.iter().all(|filter| !filter.matches(NotificationType::Unknown)));
    }

    #[test]
    fn test_outcome_helpers() {
        let ok: Outcome<i32> = Outcome::Success(2);
        assert_eq!(ok.clone().and_then(|n| Outcome::Success(n + 1)), Outcome::Success(3));
        assert_eq!(ok.into_result(), Ok(2));

        let blank: Outcome<i32> = Outcome::failure("   ");
        assert_eq!(blank.message(), Some("Network error"));
        assert_eq!(blank.map(|n| n * 2).into_result(), Err("Network error".to_string()));
    }

    #[test]
    fn test_client_config_from_toml() {
        let config = ClientConfig::from_toml_str(
            r#"
            endpoint = "http://127.0.0.1:9000/graphql"
            timeout_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.endpoint.port(), Some(9000));
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.is_authenticated());

        assert!(ClientConfig::from_toml_str("endpoint = \"ftp://example.com\"").is_err());
        assert!(ClientConfig::from_toml_str("timeout_secs = 0").is_err());
    }

    #[test]
    fn test_client_config_never_leaks_token() {
        let config = ClientConfig::default().with_access_token(Some("s3cret".to_string()));
        assert!(!format!("{config:?}").contains("s3cret"));
        assert!(!toml::to_string(&config).unwrap().contains("s3cret"));

        let cleared = config.with_access_token(Some("  ".to_string()));
        assert!(!cleared.is_authenticated());
    }

    #[test]
    fn test_session_swaps_client_on_sign_in() {
        let session = Session::new(ClientConfig::default()).unwrap();
        let anonymous = session.client();

        session.sign_in("token").unwrap();
        assert!(session.is_authenticated());
        assert!(!anonymous.config().is_authenticated());

        session.sign_out().unwrap();
        assert!(!session.is_authenticated());
    }
}
