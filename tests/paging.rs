//! Paging adapter tests
//!
//! Key arithmetic, clamping and error propagation of the repository-backed
//! paging source, plus the in-memory pager driving it.

use parking_lot::Mutex;
use std::sync::Arc;

use shiori::model::MediaType;
use shiori::paging::{
    LoadParams, LoadResult, MAX_PAGE_SIZE, Page, Pager, PagingSource, PagingState,
    RepositoryPagingSource,
};
use shiori::prelude::*;

mod common;
use common::{FakeTransport, media_page};

/// A source over `total` numbered items that records every `(page, per_page)` call.
fn numbered(total: u32) -> (RepositoryPagingSource<u32>, Arc<Mutex<Vec<(u32, u32)>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let seen = calls.clone();
    let source = RepositoryPagingSource::new(move |page: u32, per_page: u32| {
        seen.lock().push((page, per_page));
        let start = (page - 1) * per_page;
        let items: Vec<u32> = (start..total.min(start + per_page)).collect();
        async move { Outcome::Success(items) }
    });
    (source, calls)
}

/// Pages of 25 items on page 1 and 10 on page 2, whatever size is asked for.
fn uneven() -> RepositoryPagingSource<u32> {
    RepositoryPagingSource::new(|page: u32, _per_page: u32| async move {
        let items = match page {
            1 => (0..25).collect(),
            2 => (25..35).collect(),
            _ => Vec::new(),
        };
        Outcome::Success(items)
    })
}

fn expect_page<T: std::fmt::Debug>(result: LoadResult<T>) -> Page<T> {
    match result {
        LoadResult::Page(page) => page,
        LoadResult::Error(message) => panic!("expected a page, got error: {message}"),
    }
}

#[cfg(test)]
mod source_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_page_has_no_previous_key() {
        let (source, calls) = numbered(100);

        let page = expect_page(source.load(LoadParams::initial(10)).await);

        assert_eq!(page.data.len(), 10);
        assert_eq!(page.prev_key, None);
        assert_eq!(page.next_key, Some(2));
        assert_eq!(*calls.lock(), vec![(1, 10)]);
    }

    #[tokio::test]
    async fn test_keys_follow_page_number() {
        let (source, _) = numbered(100);

        for key in 2..=5 {
            let page = expect_page(source.load(LoadParams::at(key, 10)).await);
            assert_eq!(page.prev_key, Some(key - 1));
            assert_eq!(page.next_key, Some(key + 1));
        }
    }

    #[tokio::test]
    async fn test_empty_page_ends_the_list() {
        let (source, _) = numbered(20);

        let page = expect_page(source.load(LoadParams::at(3, 10)).await);

        assert!(page.data.is_empty());
        assert_eq!(page.prev_key, Some(2));
        assert_eq!(page.next_key, None);
    }

    #[tokio::test]
    async fn test_last_page_number_has_no_next_key() {
        let source = RepositoryPagingSource::new(|_, _| async { Outcome::Success(vec![1u32]) });

        let page = expect_page(source.load(LoadParams::at(u32::MAX, 10)).await);

        assert_eq!(page.data, vec![1]);
        assert_eq!(page.prev_key, Some(u32::MAX - 1));
        assert_eq!(page.next_key, None);
    }

    #[tokio::test]
    async fn test_refresh_key_at_last_page_number() {
        let source = RepositoryPagingSource::new(|_, _| async { Outcome::Success(vec![1u32]) });
        let pages = vec![Page {
            data: vec![1u32],
            prev_key: Some(u32::MAX),
            next_key: None,
        }];
        let state = PagingState {
            pages: &pages,
            anchor_position: Some(0),
        };

        assert_eq!(source.refresh_key(&state), None);
    }

    #[tokio::test]
    async fn test_load_size_is_clamped() {
        let (source, calls) = numbered(500);

        let page = expect_page(source.load(LoadParams::at(1, 400)).await);

        assert_eq!(page.data.len(), MAX_PAGE_SIZE as usize);
        assert_eq!(*calls.lock(), vec![(1, MAX_PAGE_SIZE)]);
    }

    #[tokio::test]
    async fn test_uneven_pages_are_not_truncated() {
        let source = uneven();

        let first = expect_page(source.load(LoadParams::at(1, 25)).await);
        assert_eq!(first.data.len(), 25);
        assert_eq!(first.prev_key, None);
        assert_eq!(first.next_key, Some(2));

        // A short page still advertises a next key; only an empty page ends the list.
        let second = expect_page(source.load(LoadParams::at(2, 25)).await);
        assert_eq!(second.data.len(), 10);
        assert_eq!(second.prev_key, Some(1));
        assert_eq!(second.next_key, Some(3));

        let third = expect_page(source.load(LoadParams::at(3, 25)).await);
        assert!(third.data.is_empty());
        assert_eq!(third.next_key, None);
    }

    #[tokio::test]
    async fn test_failure_becomes_load_error() {
        let source = RepositoryPagingSource::<u32>::new(|_, _| async {
            Outcome::failure("Not Found.")
        });

        let result = source.load(LoadParams::initial(20)).await;

        assert_eq!(result, LoadResult::Error("Not Found.".to_string()));
    }

    #[tokio::test]
    async fn test_repository_method_as_source() {
        let transport = FakeTransport::new()
            .reply(media_page(1, 20))
            .reply(media_page(21, 0));
        let home = transport.repositories().home;
        let source = RepositoryPagingSource::new(move |page, per_page| {
            let home = home.clone();
            async move { home.popular(MediaType::Manga, page, per_page).await }
        });

        let first = expect_page(source.load(LoadParams::initial(20)).await);
        let second = expect_page(source.load(LoadParams::at(2, 20)).await);

        assert_eq!(first.data.len(), 20);
        assert_eq!(first.data[0].id, 1);
        assert_eq!(second.next_key, None);
        let sent = transport.sent();
        assert_eq!(sent[1].variables["page"], 2);
        assert_eq!(sent[1].variables["type"], "MANGA");
    }
}

#[cfg(test)]
mod pager_tests {
    use super::*;

    #[tokio::test]
    async fn test_pager_appends_until_end() {
        let (source, _) = numbered(25);
        let mut pager = Pager::new(Arc::new(source), 10);

        assert_eq!(pager.refresh().await, Outcome::Success(10));
        assert_eq!(pager.load_next().await, Outcome::Success(10));
        assert_eq!(pager.load_next().await, Outcome::Success(5));
        assert!(!pager.is_end_reached());
        assert_eq!(pager.load_next().await, Outcome::Success(0));
        assert!(pager.is_end_reached());
        assert_eq!(pager.load_next().await, Outcome::Success(0));

        assert_eq!(pager.len(), 25);
        assert_eq!(pager.items().copied().collect::<Vec<_>>(), (0..25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_pager_keeps_pages_after_failed_load() {
        let calls = Arc::new(Mutex::new(0u32));
        let counter = calls.clone();
        let source = RepositoryPagingSource::new(move |page: u32, _| {
            *counter.lock() += 1;
            let outcome = if page == 1 {
                Outcome::Success(vec![1u32, 2, 3])
            } else {
                Outcome::network_error()
            };
            async move { outcome }
        });
        let mut pager = Pager::new(Arc::new(source), 3);

        pager.refresh().await;
        let outcome = pager.load_next().await;

        assert!(outcome.is_failure());
        assert_eq!(pager.len(), 3);
        assert_eq!(pager.error(), Some("Network error"));
        assert_eq!(*calls.lock(), 2);
    }

    #[tokio::test]
    async fn test_refresh_restarts_around_anchor() {
        let (source, calls) = numbered(100);
        let mut pager = Pager::new(Arc::new(source), 10);

        pager.refresh().await;
        pager.load_next().await;
        pager.load_next().await;
        pager.set_anchor(25);
        assert_eq!(pager.refresh().await, Outcome::Success(10));

        assert_eq!(calls.lock().last(), Some(&(3, 10)));
        assert_eq!(pager.items().next(), Some(&20));
        assert_eq!(pager.load_previous().await, Outcome::Success(10));
        assert_eq!(pager.items().next(), Some(&10));
    }
}
