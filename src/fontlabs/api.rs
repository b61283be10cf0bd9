//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! fontlabs operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Resolves views** into feeds sized from the loaded configuration
//! - **Owns the stylesheet registry**, so a family injected by one view is never
//!   injected again by another in the same process
//!
//! It does no printing and holds no business logic.
//!
//! ## Generic Over CatalogStore
//!
//! - Production: `FontlabsApi<FileCatalog>`
//! - Testing: `FontlabsApi<InMemoryCatalog>`
//!
//! API tests check dispatch and argument plumbing; command behaviour is tested
//! in the command modules.

use crate::commands;
use crate::config::FontlabsConfig;
use crate::error::Result;
use crate::feed::{FeedView, PagedFeed, StylesheetRegistry};
use crate::store::{CatalogStore, CategoryFilter};
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct FontlabsApi<S: CatalogStore> {
    store: S,
    config_dir: PathBuf,
    config: FontlabsConfig,
    stylesheets: StylesheetRegistry,
}

impl<S: CatalogStore> FontlabsApi<S> {
    pub fn new(
        store: S,
        config_dir: PathBuf,
        config: FontlabsConfig,
        stylesheets: StylesheetRegistry,
    ) -> Self {
        Self {
            store,
            config_dir,
            config,
            stylesheets,
        }
    }

    /// The home feed: `pages` pages of `config.page_size` fonts.
    pub fn browse(&self, filter: CategoryFilter, pages: usize) -> Result<CmdResult> {
        let feed = PagedFeed::new(self.config.page_size, self.stylesheets.clone());
        let result = commands::browse::run(&self.store, feed, filter, pages.max(1))?;
        self.mark_favorites(result)
    }

    /// One category as a single large page.
    pub fn category(&self, filter: CategoryFilter) -> Result<CmdResult> {
        let feed = PagedFeed::new(self.config.category_page_size, self.stylesheets.clone())
            .with_max_pages(FeedView::Category.max_pages());
        let result = commands::browse::run(&self.store, feed, filter, 1)?;
        self.mark_favorites(result)
    }

    pub fn trending(&self) -> Result<CmdResult> {
        let result =
            commands::trending::run(&self.store, &self.stylesheets, self.config.trending_limit)?;
        self.mark_favorites(result)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        let result = commands::search::run(&self.store, term)?;
        self.mark_favorites(result)
    }

    pub fn show(&self, slug: &str) -> Result<CmdResult> {
        commands::show::run(&self.store, slug, &self.stylesheets)
    }

    /// Counts a download; the font moves up in every downloads-ordered view.
    pub fn download(&mut self, slug: &str) -> Result<CmdResult> {
        commands::download::run(&mut self.store, slug)
    }

    pub fn favorites(&self) -> Result<CmdResult> {
        commands::favorites::list(&self.store, self.config.user.as_deref(), &self.stylesheets)
    }

    pub fn toggle_favorite(&mut self, slug: &str) -> Result<CmdResult> {
        let user = self.config.user.clone();
        commands::favorites::toggle(&mut self.store, user.as_deref(), slug)
    }

    pub fn populate(&mut self, path: &Path, limit: Option<usize>) -> Result<CmdResult> {
        let limit = limit.unwrap_or(self.config.populate_limit);
        commands::populate::run(&mut self.store, path, limit)
    }

    /// Runs a config action and picks up any change for later calls.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    /// Fills `favorite_ids` for the signed-in user so listings can mark them.
    fn mark_favorites(&self, mut result: CmdResult) -> Result<CmdResult> {
        if let Some(user) = self.config.user.as_deref() {
            if !result.listed_fonts.is_empty() {
                result.favorite_ids = self.store.list_favorites(user)?;
            }
        }
        Ok(result)
    }

    pub fn current_config(&self) -> &FontlabsConfig {
        &self.config
    }

    pub fn stylesheets(&self) -> &StylesheetRegistry {
        &self.stylesheets
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
