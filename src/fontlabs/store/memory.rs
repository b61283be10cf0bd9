use super::{run_query, CatalogStore, Favorite, FontQuery};
use crate::error::{FontlabsError, Result};
use crate::model::Font;
use std::cell::Cell;
use uuid::Uuid;

/// In-memory catalog for testing.
///
/// Uses `Cell` for the read counter and fault switches so they can be flipped
/// through a shared reference while a feed holds `&self`.
#[derive(Default)]
pub struct InMemoryCatalog {
    fonts: Vec<Font>,
    favorites: Vec<Favorite>,
    list_calls: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `list_fonts` calls served (including failed ones).
    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    /// Make every read fail with a fetch error until switched off.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Make every write fail with a store error until switched off.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Test helper to change a sort key in place, as a concurrent writer would.
    pub fn set_downloads(&mut self, id: &Uuid, downloads: u64) -> bool {
        match self.fonts.iter_mut().find(|f| f.id == *id) {
            Some(font) => {
                font.downloads = Some(downloads);
                true
            }
            None => false,
        }
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(FontlabsError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_fonts(&self, query: &FontQuery) -> Result<Vec<Font>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if self.simulate_read_error.get() {
            return Err(FontlabsError::Fetch("Simulated read error".to_string()));
        }
        Ok(run_query(&self.fonts, query))
    }

    fn get_font(&self, id: &Uuid) -> Result<Font> {
        self.fonts
            .iter()
            .find(|f| f.id == *id)
            .cloned()
            .ok_or(FontlabsError::FontNotFound(*id))
    }

    fn find_by_slug(&self, slug: &str) -> Result<Font> {
        self.fonts
            .iter()
            .find(|f| f.slug == slug)
            .cloned()
            .ok_or_else(|| FontlabsError::SlugNotFound(slug.to_string()))
    }

    fn insert_fonts(&mut self, fonts: &[Font]) -> Result<Vec<Font>> {
        self.check_write()?;
        let mut inserted = Vec::new();
        for font in fonts {
            if self.fonts.iter().any(|f| f.slug == font.slug) {
                continue;
            }
            self.fonts.push(font.clone());
            inserted.push(font.clone());
        }
        Ok(inserted)
    }

    fn record_download(&mut self, id: &Uuid) -> Result<Font> {
        self.check_write()?;
        let font = self
            .fonts
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or(FontlabsError::FontNotFound(*id))?;
        font.downloads = Some(font.download_count() + 1);
        Ok(font.clone())
    }

    fn list_favorites(&self, user: &str) -> Result<Vec<Uuid>> {
        Ok(self
            .favorites
            .iter()
            .filter(|fav| fav.user == user)
            .map(|fav| fav.font_id)
            .collect())
    }

    fn add_favorite(&mut self, user: &str, font_id: &Uuid) -> Result<()> {
        self.check_write()?;
        let exists = self
            .favorites
            .iter()
            .any(|fav| fav.user == user && fav.font_id == *font_id);
        if !exists {
            self.favorites.push(Favorite {
                user: user.to_string(),
                font_id: *font_id,
            });
        }
        Ok(())
    }

    fn remove_favorite(&mut self, user: &str, font_id: &Uuid) -> Result<()> {
        self.check_write()?;
        self.favorites
            .retain(|fav| !(fav.user == user && fav.font_id == *font_id));
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::FontCategory;

    pub struct CatalogFixture {
        pub store: InMemoryCatalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryCatalog::new(),
            }
        }

        /// Adds `count` sans-serif fonts named "Font 1".."Font N" with strictly
        /// descending downloads, so catalog order equals name order.
        pub fn with_fonts(self, count: usize) -> Self {
            self.with_category_fonts(count, FontCategory::SansSerif)
        }

        pub fn with_category_fonts(mut self, count: usize, category: FontCategory) -> Self {
            let base = self.store.fonts.len();
            let fonts: Vec<Font> = (0..count)
                .map(|i| {
                    let n = base + i + 1;
                    Font::new(format!("{} {}", category, n), category)
                        .with_downloads(((100_000 - n) * 10) as u64)
                })
                .collect();
            self.store.insert_fonts(&fonts).unwrap();
            self
        }

        pub fn with_font(mut self, font: Font) -> Self {
            self.store.insert_fonts(&[font]).unwrap();
            self
        }
    }
}
