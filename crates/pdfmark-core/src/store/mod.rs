//! Bookmark storage.
//!
//! An in-memory mapping from canonical document key to that document's
//! bookmarks, backed by a JSON file that is rewritten wholesale after every
//! mutation. No deltas, no versioning, no merge: last writer wins.

pub mod db;
pub mod palette;
pub mod types;

pub use db::{BookmarkDb, StoreError};
pub use palette::{resolve_color, DEFAULT_COLOR, PALETTE};
pub use types::{coerce_page, default_name, Bookmark, BookmarkMap, BookmarkPatch};
