use crate::catalog::DEFAULT_IMPORT_LIMIT;
use crate::error::{FontlabsError, Result};
use crate::feed::{CATEGORY_PAGE_SIZE, HOME_PAGE_SIZE, TRENDING_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";

pub const KEYS: &[&str] = &[
    "page-size",
    "trending-limit",
    "category-page-size",
    "populate-limit",
    "user",
    "preview-text",
];

/// Configuration for fontlabs, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontlabsConfig {
    /// Fonts per page in the home feed
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Size of the single trending page
    #[serde(default = "default_trending_limit")]
    pub trending_limit: usize,

    /// Size of the single page shown per category
    #[serde(default = "default_category_page_size")]
    pub category_page_size: usize,

    /// How many families `populate` imports
    #[serde(default = "default_populate_limit")]
    pub populate_limit: usize,

    /// Signed-in user id, required for favorites
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default = "default_preview_text")]
    pub preview_text: String,
}

fn default_page_size() -> usize {
    HOME_PAGE_SIZE
}

fn default_trending_limit() -> usize {
    TRENDING_LIMIT
}

fn default_category_page_size() -> usize {
    CATEGORY_PAGE_SIZE
}

fn default_populate_limit() -> usize {
    DEFAULT_IMPORT_LIMIT
}

fn default_preview_text() -> String {
    DEFAULT_PREVIEW_TEXT.to_string()
}

impl Default for FontlabsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            trending_limit: default_trending_limit(),
            category_page_size: default_category_page_size(),
            populate_limit: default_populate_limit(),
            user: None,
            preview_text: default_preview_text(),
        }
    }
}

impl FontlabsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FontlabsError::Io)?;
        let config: FontlabsConfig =
            serde_json::from_str(&content).map_err(FontlabsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FontlabsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FontlabsError::Serialization)?;
        fs::write(config_path, content).map_err(FontlabsError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "trending-limit" => Some(self.trending_limit.to_string()),
            "category-page-size" => Some(self.category_page_size.to_string()),
            "populate-limit" => Some(self.populate_limit.to_string()),
            "user" => Some(self.user.clone().unwrap_or_default()),
            "preview-text" => Some(self.preview_text.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => self.page_size = parse_count(key, value)?,
            "trending-limit" => self.trending_limit = parse_count(key, value)?,
            "category-page-size" => self.category_page_size = parse_count(key, value)?,
            "populate-limit" => self.populate_limit = parse_count(key, value)?,
            "user" => {
                let value = value.trim();
                self.user = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "preview-text" => self.preview_text = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> std::result::Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} must be a positive number, got '{}'", key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FontlabsConfig::default();
        assert_eq!(config.page_size, 16);
        assert_eq!(config.trending_limit, 50);
        assert_eq!(config.category_page_size, 1000);
        assert!(config.user.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FontlabsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FontlabsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = FontlabsConfig::default();
        config.set("page-size", "24").unwrap();
        config.set("user", "ada").unwrap();
        config.save(&dir).unwrap();

        let loaded = FontlabsConfig::load(&dir).unwrap();
        assert_eq!(loaded.page_size, 24);
        assert_eq!(loaded.user.as_deref(), Some("ada"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"user":"grace"}"#).unwrap();
        let loaded = FontlabsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.user.as_deref(), Some("grace"));
        assert_eq!(loaded.page_size, 16);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = FontlabsConfig::default();
        assert!(config.set("page-size", "0").is_err());
        assert!(config.set("page-size", "many").is_err());
        assert!(config.set("font-size", "12").is_err());
        assert_eq!(config.page_size, 16);
    }

    #[test]
    fn test_empty_user_signs_out() {
        let mut config = FontlabsConfig::default();
        config.set("user", "ada").unwrap();
        config.set("user", "").unwrap();
        assert!(config.user.is_none());
        assert_eq!(config.get("user").as_deref(), Some(""));
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = FontlabsConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
    }
}
