//! `pdfmark list <url>` – show a document's bookmarks sorted by page.

use anyhow::Result;
use pdfmark_core::classifier::{canonical_key, display_name};
use pdfmark_core::store::BookmarkDb;

pub fn run_list(db: &BookmarkDb, url: &str) -> Result<()> {
    let key = canonical_key(url);
    let bookmarks = db.bookmarks(&key);
    println!("{}: {} bookmark(s)", display_name(url), bookmarks.len());
    if bookmarks.is_empty() {
        return Ok(());
    }
    println!("{:<38} {:<6} {:<9} {}", "ID", "PAGE", "COLOR", "NAME");
    for b in bookmarks {
        println!("{:<38} {:<6} {:<9} {}", b.id, b.page, b.color, b.name);
    }
    Ok(())
}
