use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Counts a download of the font with `slug`.
pub fn run<S: CatalogStore>(store: &mut S, slug: &str) -> Result<CmdResult> {
    let font = store.find_by_slug(slug.trim())?;
    let updated = store.record_download(&font.id)?;
    tracing::debug!(slug = %updated.slug, downloads = updated.download_count(), "download recorded");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Download started: {} ({} downloads)",
        updated.name,
        updated.download_count()
    )));
    Ok(result.with_affected_fonts(vec![updated]))
}
