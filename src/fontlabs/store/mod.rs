//! # Storage Layer
//!
//! The font catalog lives behind the [`CatalogStore`] trait. The rest of the
//! library only ever talks to the catalog through it, so views and feeds can be
//! tested against [`memory::InMemoryCatalog`] without touching the filesystem.
//!
//! ## Paged Reads
//!
//! [`CatalogStore::list_fonts`] is the single read path. A [`FontQuery`] carries:
//! - a category filter (or "all")
//! - an optional case-insensitive name search
//! - an optional id set (used by the favorites view)
//! - the ordering (downloads descending for every feed)
//! - an `offset`/`limit` window
//!
//! Ordering is stable: rows with equal download counts keep insertion order, so a
//! page window over an unchanged catalog never overlaps or skips rows.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: JSON files in a data directory
//! - [`memory::InMemoryCatalog`]: in-memory, with fault injection for tests
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── fonts.json        # Ordered array of fonts (insertion order)
//! ├── favorites.json    # Array of { user, font_id }
//! └── config.json       # FontlabsConfig
//! ```

use crate::error::{FontlabsError, Result};
use crate::model::{Font, FontCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FontCategory),
}

impl CategoryFilter {
    pub fn matches(&self, font: &Font) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => font.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = FontlabsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontOrder {
    #[default]
    DownloadsDesc,
    Insertion,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontQuery {
    pub category: CategoryFilter,
    pub search: Option<String>,
    pub ids: Option<Vec<Uuid>>,
    pub order: FontOrder,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl FontQuery {
    pub fn page(category: CategoryFilter, offset: usize, limit: usize) -> Self {
        Self {
            category,
            offset,
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.ids = Some(ids);
        self
    }

    fn accepts(&self, font: &Font, term: Option<&str>) -> bool {
        if !self.category.matches(font) {
            return false;
        }
        if let Some(ids) = &self.ids {
            if !ids.contains(&font.id) {
                return false;
            }
        }
        match term {
            Some(term) => font.name.to_lowercase().contains(term),
            None => true,
        }
    }
}

/// Applies filter, order and window to rows given in insertion order.
pub(crate) fn run_query<'a, I>(fonts: I, query: &FontQuery) -> Vec<Font>
where
    I: IntoIterator<Item = &'a Font>,
{
    let term = query.search.as_ref().map(|t| t.trim().to_lowercase());
    let mut matched: Vec<&Font> = fonts
        .into_iter()
        .filter(|font| query.accepts(font, term.as_deref()))
        .collect();

    if query.order == FontOrder::DownloadsDesc {
        // sort_by is stable, ties keep insertion order
        matched.sort_by(|a, b| b.download_count().cmp(&a.download_count()));
    }

    let window = matched.into_iter().skip(query.offset);
    match query.limit {
        Some(limit) => window.take(limit).cloned().collect(),
        None => window.cloned().collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user: String,
    pub font_id: Uuid,
}

/// Abstract interface for the font catalog.
///
/// Reads take `&self`; the feed only ever needs read access.
pub trait CatalogStore {
    /// Read one window of fonts
    fn list_fonts(&self, query: &FontQuery) -> Result<Vec<Font>>;

    /// Get a font by ID
    fn get_font(&self, id: &Uuid) -> Result<Font>;

    /// Get a font by its slug
    fn find_by_slug(&self, slug: &str) -> Result<Font>;

    /// Append fonts, skipping any whose slug already exists. Returns the rows inserted.
    fn insert_fonts(&mut self, fonts: &[Font]) -> Result<Vec<Font>>;

    /// Bump a font's download count by one and return the updated row.
    ///
    /// Downloads are the feed's sort key, so this can reorder pages a feed has
    /// already read.
    fn record_download(&mut self, id: &Uuid) -> Result<Font>;

    /// Font ids a user has favorited, oldest first
    fn list_favorites(&self, user: &str) -> Result<Vec<Uuid>>;

    /// Mark a font as favorite (no-op when already present)
    fn add_favorite(&mut self, user: &str, font_id: &Uuid) -> Result<()>;

    /// Remove a favorite (no-op when absent)
    fn remove_favorite(&mut self, user: &str, font_id: &Uuid) -> Result<()>;
}
