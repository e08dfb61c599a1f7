//! Key-based paging over page-number repository methods.
//!
//! A [`PagingSource`] answers "load the page at key K with about N items". The
//! key is a 1-based page number. [`RepositoryPagingSource`] adapts any
//! repository method of shape `(page, per_page) -> Outcome<Vec<T>>`:
//!
//! - `per_page` is the requested size clamped to [`MAX_PAGE_SIZE`]
//! - a missing key means page 1
//! - `prev_key` is `page - 1`, or `None` on page 1
//! - `next_key` is `page + 1` while pages keep coming back non-empty; the first
//!   empty page ends the list
//! - a failed outcome becomes [`LoadResult::Error`]; retrying is a new `load`
//!
//! [`Pager`] is a small driver that keeps the loaded pages in order. It needs
//! `&mut self` for every load, so two loads on the same list can never race and
//! a refresh cannot be overwritten by an older one finishing late.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shiori::prelude::*;
//! use shiori::paging::{Pager, RepositoryPagingSource};
//!
//! # async fn example(repositories: Repositories) {
//! let home = repositories.home.clone();
//! let source = RepositoryPagingSource::new(move |page, per_page| {
//!     let home = home.clone();
//!     async move { home.trending(MediaType::Anime, page, per_page).await }
//! });
//!
//! let mut pager = Pager::new(Arc::new(source), 25);
//! pager.refresh().await;
//! while pager.load_next().await == Outcome::Success(25) {}
//! println!("{} titles", pager.len());
//! # }
//! ```

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

use crate::outcome::Outcome;

/// Largest page the server accepts.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams {
    /// Page number; `None` for the initial load.
    pub key: Option<u32>,
    pub load_size: u32,
}

impl LoadParams {
    pub fn initial(load_size: u32) -> Self {
        Self {
            key: None,
            load_size,
        }
    }

    pub fn at(key: u32, load_size: u32) -> Self {
        Self {
            key: Some(key),
            load_size,
        }
    }
}

/// A loaded page and the keys of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub prev_key: Option<u32>,
    pub next_key: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult<T> {
    Page(Page<T>),
    Error(String),
}

/// Loaded pages plus the position the user was last looking at.
#[derive(Debug)]
pub struct PagingState<'a, T> {
    pub pages: &'a [Page<T>],
    /// Index into the concatenated items of `pages`.
    pub anchor_position: Option<usize>,
}

impl<'a, T> PagingState<'a, T> {
    /// The page holding `position`, or the last page when it lies beyond them.
    pub fn closest_page_to_position(&self, position: usize) -> Option<&'a Page<T>> {
        let mut start = 0;
        for page in self.pages {
            if position < start + page.data.len() {
                return Some(page);
            }
            start += page.data.len();
        }
        self.pages.last()
    }
}

#[async_trait]
pub trait PagingSource<T: Send>: Send + Sync {
    async fn load(&self, params: LoadParams) -> LoadResult<T>;

    /// Key to restart from after invalidation: the page around the anchor,
    /// found through its previous key, else its next key.
    fn refresh_key(&self, state: &PagingState<'_, T>) -> Option<u32> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;
        page.prev_key
            .and_then(|key| key.checked_add(1))
            .or_else(|| page.next_key.map(|key| key.saturating_sub(1)))
    }
}

type PageLoader<T> = Box<dyn Fn(u32, u32) -> BoxFuture<'static, Outcome<Vec<T>>> + Send + Sync>;

/// Paging over a repository method taking `(page, per_page)`.
pub struct RepositoryPagingSource<T> {
    loader: PageLoader<T>,
}

impl<T: Send + 'static> RepositoryPagingSource<T> {
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn(u32, u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome<Vec<T>>> + Send + 'static,
    {
        Self {
            loader: Box::new(move |page, per_page| Box::pin(loader(page, per_page))),
        }
    }
}

#[async_trait]
impl<T: Send + 'static> PagingSource<T> for RepositoryPagingSource<T> {
    async fn load(&self, params: LoadParams) -> LoadResult<T> {
        let page = params.key.unwrap_or(1).max(1);
        let per_page = params.load_size.clamp(1, MAX_PAGE_SIZE);

        match (self.loader)(page, per_page).await {
            Outcome::Success(data) => LoadResult::Page(Page {
                prev_key: (page > 1).then(|| page - 1),
                next_key: if data.is_empty() { None } else { page.checked_add(1) },
                data,
            }),
            Outcome::Failure(message) => {
                tracing::debug!(page, %message, "Page load failed");
                LoadResult::Error(message)
            }
        }
    }
}

/// Holds the pages of one list and loads more on request.
pub struct Pager<T> {
    source: Arc<dyn PagingSource<T>>,
    page_size: u32,
    pages: Vec<Page<T>>,
    anchor: Option<usize>,
    error: Option<String>,
}

impl<T: Send> Pager<T> {
    pub fn new(source: Arc<dyn PagingSource<T>>, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            pages: Vec::new(),
            anchor: None,
            error: None,
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|page| page.data.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    /// Message of the last failed load, cleared by the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Records the item position currently in view.
    pub fn set_anchor(&mut self, position: usize) {
        self.anchor = Some(position);
    }

    /// Whether the list is known to have no further pages.
    pub fn is_end_reached(&self) -> bool {
        self.pages.last().is_some_and(|page| page.next_key.is_none())
    }

    fn state(&self) -> PagingState<'_, T> {
        PagingState {
            pages: &self.pages,
            anchor_position: self.anchor,
        }
    }

    fn record<R>(
        &mut self,
        result: LoadResult<T>,
        apply: impl FnOnce(&mut Self, Page<T>) -> R,
    ) -> Outcome<R> {
        match result {
            LoadResult::Page(page) => {
                self.error = None;
                Outcome::Success(apply(self, page))
            }
            LoadResult::Error(message) => {
                self.error = Some(message.clone());
                Outcome::failure(message)
            }
        }
    }

    /// Drops everything and reloads around the anchor (page 1 without one).
    /// Returns the number of items now held.
    pub async fn refresh(&mut self) -> Outcome<usize> {
        let key = self.source.refresh_key(&self.state());
        let result = self
            .source
            .load(LoadParams {
                key,
                load_size: self.page_size,
            })
            .await;
        self.record(result, |pager, page| {
            let count = page.data.len();
            pager.pages = vec![page];
            pager.anchor = None;
            count
        })
    }

    /// Appends the next page. Returns the number of items added, `0` at the end.
    pub async fn load_next(&mut self) -> Outcome<usize> {
        let key = match self.pages.last() {
            None => return self.refresh().await,
            Some(page) => match page.next_key {
                Some(key) => key,
                None => return Outcome::Success(0),
            },
        };
        let result = self.source.load(LoadParams::at(key, self.page_size)).await;
        self.record(result, |pager, page| {
            let count = page.data.len();
            pager.pages.push(page);
            count
        })
    }

    /// Prepends the previous page when the list was refreshed mid-way.
    pub async fn load_previous(&mut self) -> Outcome<usize> {
        let Some(key) = self.pages.first().and_then(|page| page.prev_key) else {
            return Outcome::Success(0);
        };
        let result = self.source.load(LoadParams::at(key, self.page_size)).await;
        self.record(result, |pager, page| {
            let count = page.data.len();
            if let Some(anchor) = pager.anchor.as_mut() {
                *anchor += count;
            }
            pager.pages.insert(0, page);
            count
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(data: Vec<u32>, prev_key: Option<u32>, next_key: Option<u32>) -> Page<u32> {
        Page {
            data,
            prev_key,
            next_key,
        }
    }

    struct Fixed;

    #[async_trait]
    impl PagingSource<u32> for Fixed {
        async fn load(&self, _params: LoadParams) -> LoadResult<u32> {
            LoadResult::Error("unused".into())
        }
    }

    #[test]
    fn closest_page_falls_back_to_last() {
        let pages = vec![page(vec![1, 2], None, Some(2)), page(vec![3], Some(1), Some(3))];
        let state = PagingState {
            pages: &pages,
            anchor_position: Some(2),
        };
        assert_eq!(state.closest_page_to_position(0), Some(&pages[0]));
        assert_eq!(state.closest_page_to_position(2), Some(&pages[1]));
        assert_eq!(state.closest_page_to_position(40), Some(&pages[1]));
    }

    #[test]
    fn refresh_key_prefers_previous_key() {
        let pages = vec![page(vec![1, 2], Some(3), Some(5))];
        let state = PagingState {
            pages: &pages,
            anchor_position: Some(1),
        };
        assert_eq!(Fixed.refresh_key(&state), Some(4));

        let first = vec![page(vec![1], None, Some(2))];
        let state = PagingState {
            pages: &first,
            anchor_position: Some(0),
        };
        assert_eq!(Fixed.refresh_key(&state), Some(1));
    }

    #[test]
    fn no_anchor_means_no_refresh_key() {
        let pages = vec![page(vec![1], None, Some(2))];
        let state = PagingState {
            pages: &pages,
            anchor_position: None,
        };
        assert_eq!(Fixed.refresh_key(&state), None);
    }
}
