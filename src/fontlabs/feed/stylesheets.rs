//! Webfont stylesheet loading, deduplicated by resource key.
//!
//! A [`StylesheetRegistry`] is a cheap, cloneable handle. All clones share the same
//! loaded-key set and the same loader, so one registry created at startup and handed
//! to every feed gives process-wide "inject each family at most once" semantics
//! without a global.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

pub const GOOGLE_FONTS_CSS_URL: &str = "https://fonts.googleapis.com/css2";
pub const DEFAULT_WEIGHTS: &[&str] = &["400"];

/// Side-effecting stylesheet injector.
///
/// Fire-and-forget. Implementations use interior mutability since the registry
/// shares them behind an `Rc`.
pub trait StylesheetLoader {
    fn inject(&self, family: &str);
}

/// Builds the css2 URL for a family, e.g.
/// `https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;700&display=swap`.
pub fn google_fonts_css_url<S: AsRef<str>>(family: &str, weights: &[S]) -> String {
    let family = family.trim().replace(' ', "+");
    let weights = if weights.is_empty() {
        DEFAULT_WEIGHTS.join(";")
    } else {
        weights
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(";")
    };
    format!(
        "{}?family={}:wght@{}&display=swap",
        GOOGLE_FONTS_CSS_URL, family, weights
    )
}

/// Loader that records the `<link rel="stylesheet">` hrefs a document head would get.
#[derive(Debug, Default)]
pub struct StylesheetHead {
    hrefs: RefCell<Vec<String>>,
}

impl StylesheetHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hrefs(&self) -> Vec<String> {
        self.hrefs.borrow().clone()
    }

    /// The head as HTML `<link>` tags, one per line.
    pub fn to_html(&self) -> String {
        self.hrefs
            .borrow()
            .iter()
            .map(|href| format!("<link rel=\"stylesheet\" href=\"{}\">", href))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl StylesheetLoader for StylesheetHead {
    fn inject(&self, family: &str) {
        self.hrefs
            .borrow_mut()
            .push(google_fonts_css_url(family, DEFAULT_WEIGHTS));
    }
}

#[derive(Clone)]
pub struct StylesheetRegistry {
    loaded: Rc<RefCell<HashSet<String>>>,
    loader: Rc<dyn StylesheetLoader>,
}

impl StylesheetRegistry {
    pub fn new(loader: Rc<dyn StylesheetLoader>) -> Self {
        Self {
            loaded: Rc::new(RefCell::new(HashSet::new())),
            loader,
        }
    }

    /// Invokes the loader the first time `key` is seen. Returns whether it did.
    pub fn ensure_loaded(&self, key: &str) -> bool {
        let inserted = self.loaded.borrow_mut().insert(key.to_string());
        if inserted {
            tracing::trace!(family = key, "injecting stylesheet");
            self.loader.inject(key);
        }
        inserted
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        self.loaded.borrow().contains(key)
    }

    pub fn len(&self) -> usize {
        self.loaded.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.borrow().is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::recording_registry;
    use super::*;

    #[test]
    fn injects_each_key_once() {
        let (loader, registry) = recording_registry();
        assert!(registry.ensure_loaded("Lora"));
        assert!(!registry.ensure_loaded("Lora"));
        assert!(registry.ensure_loaded("Inter"));
        assert_eq!(loader.calls(), vec!["Lora", "Inter"]);
    }

    #[test]
    fn clones_share_the_loaded_set() {
        let (loader, registry) = recording_registry();
        let other = registry.clone();
        registry.ensure_loaded("Lora");
        assert!(!other.ensure_loaded("Lora"));
        assert!(other.is_loaded("Lora"));
        assert_eq!(other.len(), 1);
        assert_eq!(loader.count("Lora"), 1);
    }

    #[test]
    fn builds_css2_urls() {
        assert_eq!(
            google_fonts_css_url("Open Sans", DEFAULT_WEIGHTS),
            "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400&display=swap"
        );
        assert_eq!(
            google_fonts_css_url("Lora", &["400", "700"]),
            "https://fonts.googleapis.com/css2?family=Lora:wght@400;700&display=swap"
        );
        let none: [&str; 0] = [];
        assert!(google_fonts_css_url("Lora", &none).contains("wght@400&"));
    }

    #[test]
    fn head_renders_link_tags() {
        let head = Rc::new(StylesheetHead::new());
        let registry = StylesheetRegistry::new(head.clone());
        registry.ensure_loaded("Bebas Neue");
        registry.ensure_loaded("Bebas Neue");
        assert_eq!(head.hrefs().len(), 1);
        assert_eq!(
            head.to_html(),
            "<link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/css2?family=Bebas+Neue:wght@400&display=swap\">"
        );
    }
}
