//! `pdfmark edit <url> <id>` – partial update of one bookmark.

use anyhow::{bail, Result};
use pdfmark_core::classifier::canonical_key;
use pdfmark_core::store::{coerce_page, resolve_color, BookmarkDb, BookmarkPatch};

pub async fn run_edit(
    db: &mut BookmarkDb,
    url: &str,
    id: &str,
    name: Option<String>,
    page: Option<&str>,
    color: Option<&str>,
) -> Result<()> {
    let key = canonical_key(url);
    let Some(current) = db.find(&key, id) else {
        bail!("no bookmark with id {id} for this document");
    };

    // Unparsable page input keeps the current page.
    let page = page.map(|raw| coerce_page(raw, current.page));
    let color = match color {
        Some(raw) => match resolve_color(raw) {
            Some(hex) => Some(hex.to_string()),
            None => bail!("unknown color: {raw}"),
        },
        None => None,
    };

    let patch = BookmarkPatch { name, page, color };
    if db.edit(&key, id, patch).await? {
        println!("Updated bookmark {id}");
    } else {
        bail!("no bookmark with id {id} for this document");
    }
    Ok(())
}
