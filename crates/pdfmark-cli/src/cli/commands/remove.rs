//! `pdfmark remove <url> <id>` – delete one bookmark.

use anyhow::{bail, Result};
use pdfmark_core::classifier::canonical_key;
use pdfmark_core::store::BookmarkDb;

pub async fn run_remove(db: &mut BookmarkDb, url: &str, id: &str) -> Result<()> {
    let key = canonical_key(url);
    if !db.remove(&key, id).await? {
        bail!("no bookmark with id {id} for this document");
    }
    println!("Removed bookmark {id}");
    Ok(())
}
