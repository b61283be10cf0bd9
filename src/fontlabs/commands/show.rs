use crate::commands::CmdResult;
use crate::error::Result;
use crate::feed::StylesheetRegistry;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(
    store: &S,
    slug: &str,
    stylesheets: &StylesheetRegistry,
) -> Result<CmdResult> {
    let font = store.find_by_slug(slug.trim())?;
    if let Some(key) = font.resource_key() {
        stylesheets.ensure_loaded(key);
    }
    Ok(CmdResult::default().with_listed_fonts(vec![font]))
}
