use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FontlabsError, Result};
use crate::feed::StylesheetRegistry;
use crate::store::{CatalogStore, FontQuery};

fn require_user(user: Option<&str>) -> Result<&str> {
    match user.map(str::trim) {
        Some(user) if !user.is_empty() => Ok(user),
        _ => Err(FontlabsError::AuthRequired(
            "Please sign in to save favorites".to_string(),
        )),
    }
}

/// Lists a user's favorite fonts, most downloaded first.
pub fn list<S: CatalogStore>(
    store: &S,
    user: Option<&str>,
    stylesheets: &StylesheetRegistry,
) -> Result<CmdResult> {
    let user = require_user(user)?;
    let ids = store.list_favorites(user)?;
    let mut result = CmdResult::default();

    if ids.is_empty() {
        result.add_message(CmdMessage::info("No favorites yet."));
        return Ok(result);
    }

    let fonts = store.list_fonts(&FontQuery::default().with_ids(ids.clone()))?;
    for font in &fonts {
        if let Some(key) = font.resource_key() {
            stylesheets.ensure_loaded(key);
        }
    }
    Ok(result.with_listed_fonts(fonts).with_favorite_ids(ids))
}

/// Adds the font to the user's favorites, or removes it when already there.
pub fn toggle<S: CatalogStore>(store: &mut S, user: Option<&str>, slug: &str) -> Result<CmdResult> {
    let user = require_user(user)?;
    let font = store.find_by_slug(slug.trim())?;
    let is_favorite = store.list_favorites(user)?.contains(&font.id);

    let mut result = CmdResult::default();
    if is_favorite {
        store.remove_favorite(user, &font.id)?;
        result.add_message(CmdMessage::success(format!(
            "Removed from favorites: {}",
            font.name
        )));
    } else {
        store.add_favorite(user, &font.id)?;
        result.add_message(CmdMessage::success(format!(
            "Added to favorites: {}",
            font.name
        )));
    }

    let ids = store.list_favorites(user)?;
    Ok(result.with_affected_fonts(vec![font]).with_favorite_ids(ids))
}
