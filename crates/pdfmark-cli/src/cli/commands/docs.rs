//! `pdfmark docs` – list every known document with its bookmark count.

use anyhow::Result;
use pdfmark_core::classifier::display_name;
use pdfmark_core::store::BookmarkDb;

pub fn run_docs(db: &BookmarkDb) -> Result<()> {
    let docs: Vec<_> = db.documents().collect();
    if docs.is_empty() {
        println!("No bookmarks stored.");
        return Ok(());
    }
    println!("{:<6} {:<32} {}", "COUNT", "NAME", "DOCUMENT");
    for (key, count) in docs {
        println!("{:<6} {:<32} {}", count, display_name(key), key);
    }
    Ok(())
}
