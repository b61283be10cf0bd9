use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FontlabsError, Result};
use crate::store::{CatalogStore, FontQuery};

/// Case-insensitive name search, most downloaded first.
pub fn run<S: CatalogStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Err(FontlabsError::Api("Search term cannot be empty".into()));
    }

    let fonts = store.list_fonts(&FontQuery::default().with_search(term))?;
    let mut result = CmdResult::default();
    if fonts.is_empty() {
        result.add_message(CmdMessage::info(format!("No fonts match '{}'.", term)));
    }
    Ok(result.with_listed_fonts(fonts))
}
