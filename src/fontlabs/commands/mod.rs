//! # Command Layer
//!
//! Each view of the catalog lives in its own submodule as plain functions over a
//! [`CatalogStore`](crate::store::CatalogStore). Commands never print; they return a
//! [`CmdResult`] and let the UI decide how to render it.
//!
//! ## Command Modules
//!
//! - [`browse`]: Paged feeds (home infinite scroll, per-category page)
//! - [`trending`]: The single trending page
//! - [`search`]: Name search
//! - [`show`]: One font by slug
//! - [`download`]: Count a download of one font
//! - [`favorites`]: List and toggle a user's favorites
//! - [`populate`]: Import a Google Fonts API response
//! - [`config`]: Read and write configuration
//!
//! Tests use `InMemoryCatalog`; that is where most of the coverage lives.

use crate::config::FontlabsConfig;
use crate::model::Font;
use serde::Serialize;
use uuid::Uuid;

pub mod browse;
pub mod config;
pub mod download;
pub mod favorites;
pub mod populate;
pub mod search;
pub mod show;
pub mod trending;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_fonts: Vec<Font>,
    pub listed_fonts: Vec<Font>,
    pub favorite_ids: Vec<Uuid>,
    pub has_more: Option<bool>,
    pub config: Option<FontlabsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_fonts(mut self, fonts: Vec<Font>) -> Self {
        self.affected_fonts = fonts;
        self
    }

    pub fn with_listed_fonts(mut self, fonts: Vec<Font>) -> Self {
        self.listed_fonts = fonts;
        self
    }

    pub fn with_favorite_ids(mut self, ids: Vec<Uuid>) -> Self {
        self.favorite_ids = ids;
        self
    }

    pub fn with_config(mut self, config: FontlabsConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
