//! End-to-end store behavior against a real file in a temp dir: mutations are
//! persisted wholesale and survive reopening.

use pdfmark_core::classifier::canonical_key;
use pdfmark_core::store::{BookmarkDb, BookmarkPatch};

#[tokio::test]
async fn mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");

    let key = canonical_key("https://x.com/report.pdf#page=3");
    assert_eq!(key, "https://x.com/report.pdf");

    let id = {
        let mut db = BookmarkDb::open_at(&path).await;
        db.add(&key, "", 5, "#FF4D4D").await.unwrap();
        let intro = db.add(&key, "Intro", 1, "#00AEEF").await.unwrap();
        intro.id
    };

    // Fresh handle reads what the first one wrote.
    let mut db = BookmarkDb::open_at(&path).await;
    let list = db.bookmarks(&key);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "Intro");
    assert_eq!(list[1].name, "Page 5");

    let patch = BookmarkPatch {
        name: Some("Overview".into()),
        page: Some(2),
        ..Default::default()
    };
    assert!(db.edit(&key, &id, patch).await.unwrap());
    assert!(db.remove(&key, &id).await.unwrap());
    drop(db);

    let db = BookmarkDb::open_at(&path).await;
    let list = db.bookmarks(&key);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Page 5");
}

#[tokio::test]
async fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let db = BookmarkDb::open_at(dir.path().join("nope.json")).await;
    assert_eq!(db.documents().count(), 0);
}

#[tokio::test]
async fn corrupt_file_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");
    tokio::fs::write(&path, b"{not json").await.unwrap();

    let mut db = BookmarkDb::open_at(&path).await;
    assert_eq!(db.documents().count(), 0);

    db.add("doc1", "Intro", 1, "#FF4D4D").await.unwrap();
    let db = BookmarkDb::open_at(&path).await;
    assert_eq!(db.bookmarks("doc1").len(), 1);
}

#[tokio::test]
async fn persisted_shape_uses_camel_case() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");

    let mut db = BookmarkDb::open_at(&path).await;
    db.add("https://x.com/a.pdf", "Intro", 1, "#FF4D4D")
        .await
        .unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value["https://x.com/a.pdf"][0];
    assert!(record["id"].is_string());
    assert_eq!(record["name"], "Intro");
    assert_eq!(record["page"], 1);
    assert_eq!(record["color"], "#FF4D4D");
    assert!(record["createdAt"].is_i64());
}
