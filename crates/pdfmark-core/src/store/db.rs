//! JSON-file-backed bookmark store.
//!
//! The whole mapping is loaded at open and rewritten after every mutating
//! operation. Loading is fail-open (missing or corrupt files start empty);
//! write failures are surfaced to the caller instead of being swallowed, so
//! the presentation layer can decide whether to warn or bail.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use super::types::{default_name, Bookmark, BookmarkMap, BookmarkPatch};

/// Persistence failure. The in-memory mapping has already been updated when
/// this is returned; memory and disk diverge until the next successful flush.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("write bookmarks file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize bookmarks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to one bookmark file plus its in-memory mapping.
///
/// The default file lives under the XDG state directory:
/// `~/.local/state/pdfmark/bookmarks.json`.
#[derive(Debug)]
pub struct BookmarkDb {
    path: PathBuf,
    map: BookmarkMap,
}

impl BookmarkDb {
    /// Default path for the bookmark file.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfmark")?;
        Ok(xdg_dirs
            .get_state_home()
            .join("pdfmark")
            .join("bookmarks.json"))
    }

    /// Open (or create on first flush) the default bookmark store.
    pub async fn open_default() -> anyhow::Result<Self> {
        Ok(Self::open_at(Self::default_path()?).await)
    }

    /// Open a store at a specific path. Intended for tests and overrides.
    ///
    /// A missing, unreadable, or corrupt file yields an empty mapping; the
    /// next successful flush rewrites it.
    pub async fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "bookmarks file corrupt, starting empty: {}", e);
                    BookmarkMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BookmarkMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "bookmarks file unreadable, starting empty: {}", e);
                BookmarkMap::new()
            }
        };
        Self { path, map }
    }

    /// Adds a bookmark under `key`, creating the collection if absent, and
    /// persists. Blank names become `"Page {page}"`.
    pub async fn add(
        &mut self,
        key: &str,
        name: &str,
        page: u32,
        color: &str,
    ) -> Result<Bookmark, StoreError> {
        let name = name.trim();
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            name: if name.is_empty() {
                default_name(page)
            } else {
                name.to_string()
            },
            page,
            color: color.to_string(),
            created_at: epoch_millis(),
        };
        self.map
            .entry(key.to_string())
            .or_default()
            .push(bookmark.clone());
        self.flush().await?;
        Ok(bookmark)
    }

    /// Applies a partial update to the bookmark with `id` under `key` and
    /// persists. Returns false without touching disk when the id is unknown.
    ///
    /// A blank name in the patch resets to the derived default, computed from
    /// the page value before the patch is applied.
    pub async fn edit(
        &mut self,
        key: &str,
        id: &str,
        patch: BookmarkPatch,
    ) -> Result<bool, StoreError> {
        let Some(bookmark) = self
            .map
            .get_mut(key)
            .and_then(|list| list.iter_mut().find(|b| b.id == id))
        else {
            return Ok(false);
        };
        if let Some(name) = patch.name {
            let name = name.trim();
            bookmark.name = if name.is_empty() {
                default_name(bookmark.page)
            } else {
                name.to_string()
            };
        }
        if let Some(page) = patch.page {
            bookmark.page = page;
        }
        if let Some(color) = patch.color {
            bookmark.color = color;
        }
        self.flush().await?;
        Ok(true)
    }

    /// Removes the bookmark with `id` under `key` and persists. Returns
    /// whether a removal occurred; a missing id is a no-op.
    pub async fn remove(&mut self, key: &str, id: &str) -> Result<bool, StoreError> {
        let Some(list) = self.map.get_mut(key) else {
            return Ok(false);
        };
        let before = list.len();
        list.retain(|b| b.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.flush().await?;
        Ok(true)
    }

    /// Looks up one bookmark by id within `key`'s collection.
    pub fn find(&self, key: &str, id: &str) -> Option<&Bookmark> {
        self.map.get(key)?.iter().find(|b| b.id == id)
    }

    /// Bookmarks for one document, sorted ascending by page. Ties keep
    /// insertion order (the sort is stable). Empty for unknown keys.
    pub fn bookmarks(&self, key: &str) -> Vec<Bookmark> {
        let mut list = self.map.get(key).cloned().unwrap_or_default();
        list.sort_by_key(|b| b.page);
        list
    }

    /// Every known document key with its bookmark count.
    pub fn documents(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.len()))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the whole mapping to disk, creating parent dirs if needed.
    pub async fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        let json = serde_json::to_vec_pretty(&self.map)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}

/// Current time as epoch milliseconds (for `createdAt`).
fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
