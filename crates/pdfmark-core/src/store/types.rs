//! Bookmark record types and input coercion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from canonical document key to that document's bookmarks, in
/// insertion order. This is exactly the persisted shape.
pub type BookmarkMap = BTreeMap<String, Vec<Bookmark>>;

/// One saved position inside one document.
///
/// Field names are part of the persisted format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Opaque identifier, unique within one document's collection.
    pub id: String,
    /// Display label. Blank input is replaced with `"Page {page}"`.
    pub name: String,
    /// 1-based page number. No upper bound; duplicates are allowed.
    pub page: u32,
    /// Palette hex color, visual tagging only.
    pub color: String,
    /// Epoch milliseconds at creation. Never displayed or sorted on.
    pub created_at: i64,
}

/// Partial update applied by [`crate::store::BookmarkDb::edit`].
#[derive(Debug, Clone, Default)]
pub struct BookmarkPatch {
    /// New label. Blank resets to the derived `"Page {page}"` default.
    pub name: Option<String>,
    pub page: Option<u32>,
    pub color: Option<String>,
}

/// Default label for a bookmark on a given page.
pub fn default_name(page: u32) -> String {
    format!("Page {page}")
}

/// Coerces raw page input to a positive integer, falling back when it does
/// not parse or is zero. Add uses fallback 1; edit falls back to the prior
/// page value.
pub fn coerce_page(input: &str, fallback: u32) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(p) if p >= 1 => p,
        _ => fallback,
    }
}
