//! # Google Fonts Import
//!
//! Turns a Google Fonts Developer API `webfonts` response into catalog rows.
//!
//! The response is the JSON returned by
//! `https://www.googleapis.com/webfonts/v1/webfonts?key=...&sort=popularity`:
//!
//! ```text
//! { "kind": "webfonts#webfontList",
//!   "items": [ { "family": "Roboto", "variants": ["100", "regular", "700"],
//!                "subsets": ["latin"], "category": "sans-serif", ... } ] }
//! ```
//!
//! Items arrive in popularity order, so the first rows are flagged new and every
//! tenth is premium. Downloads, rating and favorites are seeded from the family
//! name so a re-import produces the same numbers.

use crate::error::{FontlabsError, Result};
use crate::model::{slugify, Font, FontCategory, FontLicense};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_IMPORT_LIMIT: usize = 500;
pub const NEW_FONT_COUNT: usize = 20;
pub const PREMIUM_EVERY: usize = 10;
pub const INSERT_BATCH: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleFontsResponse {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: Vec<GoogleFont>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleFont {
    pub family: String,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default)]
    pub files: HashMap<String, String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub kind: String,
}

pub fn load_response<P: AsRef<Path>>(path: P) -> Result<GoogleFontsResponse> {
    let content = fs::read_to_string(path.as_ref()).map_err(FontlabsError::Io)?;
    parse_response(&content)
}

pub fn parse_response(json: &str) -> Result<GoogleFontsResponse> {
    serde_json::from_str(json).map_err(FontlabsError::Serialization)
}

/// Maps a Google Fonts category onto ours. Unknown categories become sans-serif.
pub fn categorize(api_category: &str) -> FontCategory {
    match api_category {
        "serif" => FontCategory::Serif,
        "sans-serif" => FontCategory::SansSerif,
        "display" => FontCategory::Display,
        "handwriting" => FontCategory::Script,
        "monospace" => FontCategory::Monospace,
        _ => FontCategory::SansSerif,
    }
}

/// Numeric weights from API variants ("regular" is 400, italics are dropped).
pub fn weights_from_variants(variants: &[String]) -> Vec<String> {
    let mut weights: Vec<String> = variants
        .iter()
        .filter(|v| !v.contains("italic"))
        .map(|v| {
            if v == "regular" {
                "400".to_string()
            } else {
                v.clone()
            }
        })
        .filter(|v| v.chars().all(|c| c.is_ascii_digit()) && !v.is_empty())
        .collect();
    weights.sort();
    weights.dedup();
    weights
}

/// Builds catalog rows for the first `limit` families.
pub fn to_font_rows(items: &[GoogleFont], limit: usize) -> Vec<Font> {
    items
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, item)| to_font_row(index, item))
        .collect()
}

fn to_font_row(index: usize, item: &GoogleFont) -> Font {
    let seed = family_seed(&item.family);
    let is_premium = index % PREMIUM_EVERY == 0;
    let mut font = Font::new(item.family.clone(), categorize(&item.category));
    font.slug = slugify(&item.family);
    font.designer = Some("Google Fonts".to_string());
    font.description = Some(format!(
        "{} is a beautiful {} font from Google Fonts, featuring {} variants and supporting {} character sets.",
        item.family,
        item.category,
        item.variants.len(),
        item.subsets.join(", ")
    ));
    font.downloads = Some(1000 + seed % 50_000);
    font.rating = Some(4.0 + ((seed >> 16) % 1000) as f32 / 1000.0);
    font.favorites_count = Some((seed >> 32) % 1000);
    font.google_font_family = Some(item.family.clone());
    font.font_weights = weights_from_variants(&item.variants);
    font.is_new = index < NEW_FONT_COUNT;
    font.is_premium = is_premium;
    font.license = if is_premium {
        FontLicense::Premium
    } else {
        FontLicense::Free
    };
    font
}

// FNV-1a
fn family_seed(family: &str) -> u64 {
    family.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}
