use crate::catalog::{load_response, to_font_rows, INSERT_BATCH};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FontlabsError, Result};
use crate::store::CatalogStore;
use std::path::Path;

/// Imports the first `limit` families of a Google Fonts API response.
///
/// Rows are written in batches; a failed batch aborts the import but keeps the
/// batches already written. Families whose slug is already in the catalog are
/// skipped.
pub fn run<S: CatalogStore>(store: &mut S, path: &Path, limit: usize) -> Result<CmdResult> {
    if limit == 0 {
        return Err(FontlabsError::Api("Import limit must be positive".to_string()));
    }

    let response = load_response(path)?;
    let rows = to_font_rows(&response.items, limit);
    let total = rows.len();
    tracing::debug!(total, path = %path.display(), "importing fonts");

    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No fonts found in {}",
            path.display()
        )));
        return Ok(result);
    }

    let mut processed = 0;
    let mut added = Vec::new();
    for batch in rows.chunks(INSERT_BATCH) {
        added.extend(store.insert_fonts(batch)?);
        processed += batch.len();
        result.add_message(CmdMessage::info(format!(
            "Inserted {} of {} fonts...",
            processed, total
        )));
    }

    let inserted = added.len();
    result.add_message(CmdMessage::success(format!(
        "Successfully populated {} fonts from Google Fonts",
        inserted
    )));
    let skipped = total - inserted;
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} fonts already in the catalog",
            skipped
        )));
    }
    Ok(result.with_affected_fonts(added))
}
