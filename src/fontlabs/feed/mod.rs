//! # Paged Font Feed
//!
//! [`PagedFeed`] incrementally loads a downloads-sorted window of the catalog into a
//! client-visible list. The rendering side signals "the last item is nearly visible"
//! and the feed fetches the next page, unless one is already in flight or the
//! catalog is exhausted.
//!
//! ## State Machine
//!
//! ```text
//!            begin_next_page()              complete(Ok, full page)
//!   Idle ──────────────────────▶ Loading ─────────────────────────▶ Idle
//!    ▲                              │
//!    │ reset()                      │ complete(Ok, short page)
//!    │                              ▼
//!    └──────────────────────── Exhausted
//! ```
//!
//! `complete(Err)` returns `Loading → Idle` with items, page index and `has_more`
//! untouched. There is no retry; the next proximity signal tries again.
//!
//! ## Two-Phase Fetch
//!
//! A fetch is split into [`PagedFeed::begin_next_page`], which hands out a
//! [`PageRequest`], and [`PagedFeed::complete`], which applies the result. Between
//! the two the caller is free to yield to its event loop. [`PagedFeed::load_next_page`]
//! does both back to back against a [`CatalogStore`] for synchronous callers.
//!
//! ## Stale Results
//!
//! Every request carries the feed's generation. [`PagedFeed::reset`] bumps the
//! generation, so a result that lands after a reset is discarded without touching
//! any state, including `is_loading`, which may belong to the newer fetch.
//!
//! ## Exhaustion
//!
//! A page shorter than `page_size` ends the feed. A catalog holding an exact
//! multiple of `page_size` rows therefore costs one extra, empty fetch.

use crate::error::FontlabsError;
use crate::model::Font;
use crate::store::{CatalogStore, CategoryFilter, FontQuery};
use std::collections::HashSet;
use uuid::Uuid;

pub mod sentinel;
pub mod session;
pub mod stylesheets;

pub use sentinel::{ManualSentinel, ViewportSentinel};
pub use session::{FeedSession, FeedSnapshot};
pub use stylesheets::{StylesheetHead, StylesheetLoader, StylesheetRegistry};

pub const HOME_PAGE_SIZE: usize = 16;
pub const CATEGORY_PAGE_SIZE: usize = 1000;
pub const TRENDING_LIMIT: usize = 50;

/// Preset feed shapes used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView {
    /// Infinite scroll, 16 per page
    Home,
    /// One large page per category
    Category,
    /// The top of the catalog, one page
    Trending,
}

impl FeedView {
    pub fn page_size(&self) -> usize {
        match self {
            FeedView::Home => HOME_PAGE_SIZE,
            FeedView::Category => CATEGORY_PAGE_SIZE,
            FeedView::Trending => TRENDING_LIMIT,
        }
    }

    pub fn max_pages(&self) -> Option<usize> {
        match self {
            FeedView::Home => None,
            FeedView::Category | FeedView::Trending => Some(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Idle,
    Loading,
    Exhausted,
}

/// A page fetch handed out by [`PagedFeed::begin_next_page`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub page_index: usize,
    pub query: FontQuery,
}

#[derive(Debug)]
pub enum PageOutcome {
    Applied { added: usize, has_more: bool },
    Failed(FontlabsError),
    Discarded { generation: u64 },
}

impl PageOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PageOutcome::Applied { .. })
    }
}

pub struct PagedFeed {
    page_size: usize,
    max_pages: Option<usize>,
    filter: CategoryFilter,
    generation: u64,
    items: Vec<Font>,
    seen: HashSet<Uuid>,
    page_index: usize,
    is_loading: bool,
    has_more: bool,
    stylesheets: StylesheetRegistry,
}

impl PagedFeed {
    pub fn new(page_size: usize, stylesheets: StylesheetRegistry) -> Self {
        Self {
            page_size: page_size.max(1),
            max_pages: None,
            filter: CategoryFilter::All,
            generation: 0,
            items: Vec::new(),
            seen: HashSet::new(),
            page_index: 1,
            is_loading: false,
            has_more: true,
            stylesheets,
        }
    }

    pub fn for_view(view: FeedView, stylesheets: StylesheetRegistry) -> Self {
        Self::new(view.page_size(), stylesheets).with_max_pages(view.max_pages())
    }

    /// Caps the number of pages; `Some(1)` gives a single-page view.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn items(&self) -> &[Font] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stylesheets(&self) -> &StylesheetRegistry {
        &self.stylesheets
    }

    pub fn state(&self) -> FeedState {
        if self.is_loading {
            FeedState::Loading
        } else if self.has_more {
            FeedState::Idle
        } else {
            FeedState::Exhausted
        }
    }

    /// Clears the feed for a new filter and starts fetching page 1.
    pub fn reset(&mut self, filter: CategoryFilter) -> Option<PageRequest> {
        self.generation += 1;
        self.filter = filter;
        self.items.clear();
        self.seen.clear();
        self.page_index = 1;
        self.has_more = true;
        self.is_loading = false;
        tracing::debug!(generation = self.generation, %filter, "feed reset");
        self.begin_next_page()
    }

    /// Issues the next page request, or `None` while loading or once exhausted.
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if self.is_loading || !self.has_more {
            tracing::trace!(
                loading = self.is_loading,
                has_more = self.has_more,
                "next page ignored"
            );
            return None;
        }
        self.is_loading = true;
        let offset = (self.page_index - 1) * self.page_size;
        tracing::debug!(
            generation = self.generation,
            page = self.page_index,
            offset,
            "requesting page"
        );
        Some(PageRequest {
            generation: self.generation,
            page_index: self.page_index,
            query: FontQuery::page(self.filter, offset, self.page_size),
        })
    }

    /// Applies the result of a request issued by [`begin_next_page`](Self::begin_next_page).
    pub fn complete(
        &mut self,
        request: PageRequest,
        result: crate::error::Result<Vec<Font>>,
    ) -> PageOutcome {
        if request.generation != self.generation
            || request.page_index != self.page_index
            || !self.is_loading
        {
            tracing::trace!(
                generation = request.generation,
                current = self.generation,
                "discarding stale page"
            );
            return PageOutcome::Discarded {
                generation: request.generation,
            };
        }

        let fonts = match result {
            Ok(fonts) => fonts,
            Err(err) => {
                tracing::warn!(page = request.page_index, error = %err, "page fetch failed");
                self.is_loading = false;
                return PageOutcome::Failed(err);
            }
        };

        let received = fonts.len();
        for font in &fonts {
            if let Some(key) = font.resource_key() {
                self.stylesheets.ensure_loaded(key);
            }
        }

        let before = self.items.len();
        for font in fonts {
            // A sort key moving between reads can resurface a row already shown.
            if self.seen.insert(font.id) {
                self.items.push(font);
            }
        }

        let pages_loaded = self.page_index;
        self.page_index += 1;
        let under_cap = self.max_pages.map_or(true, |max| pages_loaded < max);
        self.has_more = received == self.page_size && under_cap;
        self.is_loading = false;

        let added = self.items.len() - before;
        tracing::debug!(
            page = pages_loaded,
            received,
            added,
            has_more = self.has_more,
            "page applied"
        );
        PageOutcome::Applied {
            added,
            has_more: self.has_more,
        }
    }

    /// Fetches and applies the next page synchronously.
    pub fn load_next_page<S: CatalogStore>(&mut self, store: &S) -> Option<PageOutcome> {
        let request = self.begin_next_page()?;
        let result = store.list_fonts(&request.query);
        Some(self.complete(request, result))
    }

    /// Resets to `filter` and loads its first page synchronously.
    pub fn reset_and_load<S: CatalogStore>(
        &mut self,
        store: &S,
        filter: CategoryFilter,
    ) -> Option<PageOutcome> {
        let request = self.reset(filter)?;
        let result = store.list_fonts(&request.query);
        Some(self.complete(request, result))
    }
}
