use crate::commands::browse::scroll;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::feed::{PagedFeed, StylesheetRegistry};
use crate::store::{CatalogStore, CategoryFilter};

/// The most downloaded fonts, as one page of `limit`.
pub fn run<S: CatalogStore>(
    store: &S,
    stylesheets: &StylesheetRegistry,
    limit: usize,
) -> Result<CmdResult> {
    let feed = PagedFeed::new(limit, stylesheets.clone()).with_max_pages(Some(1));
    let (snapshot, failure) = scroll(store, feed, CategoryFilter::All, 1);

    let mut result = CmdResult::default();
    if let Some(err) = failure {
        result.add_message(CmdMessage::warning(format!(
            "Could not load trending fonts: {}",
            err
        )));
    } else if snapshot.items.is_empty() {
        result.add_message(CmdMessage::info("No trending fonts yet."));
    }

    result.has_more = Some(snapshot.has_more);
    Ok(result.with_listed_fonts(snapshot.items))
}
