//! # Domain Model
//!
//! A [`Font`] is one catalog row. The catalog owns it; feeds and views only hold
//! read-only copies for the lifetime of a session.
//!
//! ## Resource Keys
//!
//! Every font may need a webfont stylesheet before it can be previewed. The
//! stylesheet is identified by its family name, which we call the *resource key*:
//!
//! - `google_font_family` when present and non-empty
//! - otherwise `name` when non-empty
//! - otherwise no stylesheet is loaded for that row
//!
//! Several rows may share a family (e.g. a regular and a condensed listing of the
//! same typeface), which is why stylesheet loading is deduplicated by key rather
//! than by font id. See [`crate::feed::stylesheets`].

use crate::error::FontlabsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    Serif,
    SansSerif,
    Script,
    Display,
    Monospace,
    Handwritten,
    Modern,
    Vintage,
    Rounded,
    Gothic,
}

impl FontCategory {
    pub const ALL: [FontCategory; 10] = [
        FontCategory::Serif,
        FontCategory::SansSerif,
        FontCategory::Script,
        FontCategory::Display,
        FontCategory::Monospace,
        FontCategory::Handwritten,
        FontCategory::Modern,
        FontCategory::Vintage,
        FontCategory::Rounded,
        FontCategory::Gothic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FontCategory::Serif => "serif",
            FontCategory::SansSerif => "sans-serif",
            FontCategory::Script => "script",
            FontCategory::Display => "display",
            FontCategory::Monospace => "monospace",
            FontCategory::Handwritten => "handwritten",
            FontCategory::Modern => "modern",
            FontCategory::Vintage => "vintage",
            FontCategory::Rounded => "rounded",
            FontCategory::Gothic => "gothic",
        }
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontCategory {
    type Err = FontlabsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        FontCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| FontlabsError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontLicense {
    #[default]
    Free,
    Premium,
    Commercial,
    Personal,
}

impl fmt::Display for FontLicense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FontLicense::Free => "free",
            FontLicense::Premium => "premium",
            FontLicense::Commercial => "commercial",
            FontLicense::Personal => "personal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category: FontCategory,
    #[serde(default)]
    pub license: FontLicense,
    #[serde(default)]
    pub designer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub favorites_count: Option<u64>,
    #[serde(default)]
    pub google_font_family: Option<String>,
    #[serde(default)]
    pub font_weights: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub preview_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Font {
    pub fn new(name: impl Into<String>, category: FontCategory) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            category,
            license: FontLicense::default(),
            designer: None,
            description: None,
            downloads: None,
            rating: None,
            favorites_count: None,
            google_font_family: None,
            font_weights: Vec::new(),
            is_new: false,
            is_premium: false,
            preview_text: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = Some(downloads);
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.google_font_family = Some(family.into());
        self
    }

    /// Sort key for the catalog feed. Rows without a count sort last.
    pub fn download_count(&self) -> u64 {
        self.downloads.unwrap_or(0)
    }

    /// The stylesheet family this row needs, if any.
    pub fn resource_key(&self) -> Option<&str> {
        self.google_font_family
            .as_deref()
            .filter(|family| !family.trim().is_empty())
            .or_else(|| Some(self.name.as_str()).filter(|name| !name.trim().is_empty()))
    }
}

/// Lowercases and joins whitespace-separated words with `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
