use super::{run_query, CatalogStore, Favorite, FontQuery};
use crate::error::{FontlabsError, Result};
use crate::model::Font;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const FONTS_FILE: &str = "fonts.json";
const FAVORITES_FILE: &str = "favorites.json";

/// Catalog stored as JSON files in a single data directory.
///
/// Every call reads the files fresh; nothing is cached between calls.
pub struct FileCatalog {
    root: PathBuf,
}

impl FileCatalog {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FontlabsError::Io)?;
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(FontlabsError::Io)?;
        let rows = serde_json::from_str(&content).map_err(FontlabsError::Serialization)?;
        Ok(rows)
    }

    fn save<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(rows).map_err(FontlabsError::Serialization)?;
        fs::write(self.root.join(file), content).map_err(FontlabsError::Io)?;
        Ok(())
    }

    fn load_fonts(&self) -> Result<Vec<Font>> {
        self.load(FONTS_FILE)
    }

    fn load_favorites(&self) -> Result<Vec<Favorite>> {
        self.load(FAVORITES_FILE)
    }
}

impl CatalogStore for FileCatalog {
    fn list_fonts(&self, query: &FontQuery) -> Result<Vec<Font>> {
        let fonts = self.load_fonts()?;
        Ok(run_query(&fonts, query))
    }

    fn get_font(&self, id: &Uuid) -> Result<Font> {
        self.load_fonts()?
            .into_iter()
            .find(|f| f.id == *id)
            .ok_or(FontlabsError::FontNotFound(*id))
    }

    fn find_by_slug(&self, slug: &str) -> Result<Font> {
        self.load_fonts()?
            .into_iter()
            .find(|f| f.slug == slug)
            .ok_or_else(|| FontlabsError::SlugNotFound(slug.to_string()))
    }

    fn insert_fonts(&mut self, fonts: &[Font]) -> Result<Vec<Font>> {
        let mut existing = self.load_fonts()?;
        let mut inserted = Vec::new();
        for font in fonts {
            if existing.iter().any(|f| f.slug == font.slug) {
                continue;
            }
            existing.push(font.clone());
            inserted.push(font.clone());
        }
        if !inserted.is_empty() {
            self.save(FONTS_FILE, &existing)?;
        }
        Ok(inserted)
    }

    fn record_download(&mut self, id: &Uuid) -> Result<Font> {
        let mut fonts = self.load_fonts()?;
        let font = fonts
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or(FontlabsError::FontNotFound(*id))?;
        font.downloads = Some(font.download_count() + 1);
        let updated = font.clone();
        self.save(FONTS_FILE, &fonts)?;
        Ok(updated)
    }

    fn list_favorites(&self, user: &str) -> Result<Vec<Uuid>> {
        Ok(self
            .load_favorites()?
            .into_iter()
            .filter(|fav| fav.user == user)
            .map(|fav| fav.font_id)
            .collect())
    }

    fn add_favorite(&mut self, user: &str, font_id: &Uuid) -> Result<()> {
        let mut favorites = self.load_favorites()?;
        if favorites
            .iter()
            .any(|fav| fav.user == user && fav.font_id == *font_id)
        {
            return Ok(());
        }
        favorites.push(Favorite {
            user: user.to_string(),
            font_id: *font_id,
        });
        self.save(FAVORITES_FILE, &favorites)
    }

    fn remove_favorite(&mut self, user: &str, font_id: &Uuid) -> Result<()> {
        let mut favorites = self.load_favorites()?;
        let before = favorites.len();
        favorites.retain(|fav| !(fav.user == user && fav.font_id == *font_id));
        if favorites.len() == before {
            return Ok(());
        }
        self.save(FAVORITES_FILE, &favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontCategory;
    use crate::store::CategoryFilter;
    use tempfile::TempDir;

    fn catalog() -> (TempDir, FileCatalog) {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let catalog = FileCatalog::new(temp_dir.path().join("data"));
        (temp_dir, catalog)
    }

    #[test]
    fn missing_files_read_as_empty() {
        let (_tmp, catalog) = catalog();
        assert!(catalog.list_fonts(&FontQuery::default()).unwrap().is_empty());
        assert!(catalog.list_favorites("ada").unwrap().is_empty());
    }

    #[test]
    fn persists_fonts_in_insertion_order() {
        let (_tmp, mut catalog) = catalog();
        let fonts = vec![
            Font::new("Lora", FontCategory::Serif).with_downloads(5),
            Font::new("Inter", FontCategory::SansSerif).with_downloads(5),
        ];
        assert_eq!(catalog.insert_fonts(&fonts).unwrap().len(), 2);

        let reopened = FileCatalog::new(catalog.root().to_path_buf());
        let listed = reopened
            .list_fonts(&FontQuery::page(CategoryFilter::All, 0, 10))
            .unwrap();
        let names: Vec<_> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Lora", "Inter"]);
        assert_eq!(reopened.find_by_slug("inter").unwrap().id, fonts[1].id);
    }

    #[test]
    fn favorites_round_trip_through_disk() {
        let (_tmp, mut catalog) = catalog();
        let font = Font::new("Lora", FontCategory::Serif);
        catalog.insert_fonts(&[font.clone()]).unwrap();

        catalog.add_favorite("ada", &font.id).unwrap();
        catalog.add_favorite("ada", &font.id).unwrap();
        assert_eq!(catalog.list_favorites("ada").unwrap(), vec![font.id]);

        catalog.remove_favorite("ada", &font.id).unwrap();
        assert!(catalog.list_favorites("ada").unwrap().is_empty());
    }

    #[test]
    fn record_download_persists() {
        let (_tmp, mut catalog) = catalog();
        let font = Font::new("Lora", FontCategory::Serif).with_downloads(41);
        catalog.insert_fonts(&[font.clone()]).unwrap();

        let updated = catalog.record_download(&font.id).unwrap();
        assert_eq!(updated.downloads, Some(42));

        let reopened = FileCatalog::new(catalog.root().to_path_buf());
        assert_eq!(reopened.get_font(&font.id).unwrap().downloads, Some(42));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let (_tmp, catalog) = catalog();
        fs::create_dir_all(catalog.root()).unwrap();
        fs::write(catalog.root().join(FONTS_FILE), "not json").unwrap();
        let result = catalog.list_fonts(&FontQuery::default());
        assert!(matches!(result, Err(FontlabsError::Serialization(_))));
    }
}
