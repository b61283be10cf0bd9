use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FontlabsError, Result};
use crate::feed::{FeedSession, FeedSnapshot, ManualSentinel, PageOutcome, PagedFeed};
use crate::store::{CatalogStore, CategoryFilter};

/// Loads up to `pages` pages of `filter` through a feed session.
///
/// The first page comes from the reset; each further page is one sentinel
/// signal. A failed fetch stops the scroll and is reported as a warning; the
/// fonts loaded so far are still listed.
pub fn run<S: CatalogStore>(
    store: &S,
    feed: PagedFeed,
    filter: CategoryFilter,
    pages: usize,
) -> Result<CmdResult> {
    let (snapshot, failure) = scroll(store, feed, filter, pages);
    let mut result = CmdResult::default();

    if let Some(err) = failure {
        result.add_message(CmdMessage::warning(format!(
            "Could not load fonts: {}",
            err
        )));
    } else if snapshot.items.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No fonts found in {}.",
            describe(filter)
        )));
    } else if snapshot.has_more {
        result.add_message(CmdMessage::info(format!(
            "Showing {} fonts, more available.",
            snapshot.items.len()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "End of list ({} fonts).",
            snapshot.items.len()
        )));
    }

    result.has_more = Some(snapshot.has_more);
    Ok(result.with_listed_fonts(snapshot.items))
}

/// Drives a session through a reset and up to `pages - 1` sentinel signals.
///
/// Returns the final snapshot and the first fetch failure, if any.
pub(crate) fn scroll<S: CatalogStore>(
    store: &S,
    feed: PagedFeed,
    filter: CategoryFilter,
    pages: usize,
) -> (FeedSnapshot, Option<FontlabsError>) {
    let session = FeedSession::new(feed);
    let mut sentinel = ManualSentinel::new();
    session.attach(&mut sentinel);

    session.reset(filter);
    let mut failure = first_failure(session.pump(store));

    let mut signalled = 1;
    while failure.is_none() && signalled < pages && session.snapshot().has_more {
        sentinel.fire();
        failure = first_failure(session.pump(store));
        signalled += 1;
    }

    (session.snapshot(), failure)
}

fn first_failure(outcomes: Vec<PageOutcome>) -> Option<FontlabsError> {
    outcomes.into_iter().find_map(|outcome| match outcome {
        PageOutcome::Failed(err) => Some(err),
        _ => None,
    })
}

fn describe(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "the catalog".to_string(),
        CategoryFilter::Only(category) => format!("category '{}'", category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::feed::stylesheets::testing::recording_registry;
    use crate::feed::{FeedView, HOME_PAGE_SIZE};
    use crate::model::FontCategory;
    use crate::store::memory::fixtures::CatalogFixture;

    fn home_feed() -> PagedFeed {
        let (_, registry) = recording_registry();
        PagedFeed::new(HOME_PAGE_SIZE, registry)
    }

    #[test]
    fn first_page_only_by_default() {
        let store = CatalogFixture::new().with_fonts(40).store;
        let result = run(&store, home_feed(), CategoryFilter::All, 1).unwrap();
        assert_eq!(result.listed_fonts.len(), 16);
        assert_eq!(result.has_more, Some(true));
        assert!(result.messages[0].content.contains("more available"));
    }

    #[test]
    fn stops_at_exhaustion() {
        let store = CatalogFixture::new().with_fonts(20).store;
        let result = run(&store, home_feed(), CategoryFilter::All, 10).unwrap();
        assert_eq!(result.listed_fonts.len(), 20);
        assert_eq!(result.has_more, Some(false));
        assert_eq!(store.list_calls(), 2);
        assert!(result.messages[0].content.contains("End of list"));
    }

    #[test]
    fn empty_category_reports_empty_state() {
        let store = CatalogFixture::new().with_fonts(5).store;
        let filter = CategoryFilter::Only(FontCategory::Gothic);
        let result = run(&store, home_feed(), filter, 3).unwrap();
        assert!(result.listed_fonts.is_empty());
        assert!(result.messages[0].content.contains("category 'gothic'"));
    }

    #[test]
    fn failure_is_a_warning_not_an_error() {
        let store = CatalogFixture::new().with_fonts(20).store;
        store.set_simulate_read_error(true);
        let result = run(&store, home_feed(), CategoryFilter::All, 3).unwrap();
        assert!(result.listed_fonts.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(result.has_more, Some(true));
        assert_eq!(store.list_calls(), 1);
    }

    #[test]
    fn category_view_is_a_single_page() {
        let (_, registry) = recording_registry();
        let store = CatalogFixture::new()
            .with_category_fonts(30, FontCategory::Serif)
            .with_category_fonts(10, FontCategory::Display)
            .store;
        let feed = PagedFeed::for_view(FeedView::Category, registry);
        let filter = CategoryFilter::Only(FontCategory::Serif);
        let result = run(&store, feed, filter, 5).unwrap();
        assert_eq!(result.listed_fonts.len(), 30);
        assert_eq!(store.list_calls(), 1);
    }
}
