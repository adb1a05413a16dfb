//! `pdfmark add <url>` – add a bookmark for a PDF document.

use anyhow::{bail, Result};
use pdfmark_core::classifier::{canonical_key, display_name, is_pdf_view, page_from_fragment};
use pdfmark_core::config::PdfmarkConfig;
use pdfmark_core::store::{coerce_page, resolve_color, BookmarkDb, PALETTE};

pub async fn run_add(
    db: &mut BookmarkDb,
    cfg: &PdfmarkConfig,
    url: &str,
    name: Option<&str>,
    page: Option<&str>,
    color: Option<&str>,
) -> Result<()> {
    if !is_pdf_view(url) {
        bail!("not a PDF document URL: {url}");
    }

    let fallback = page_from_fragment(url).unwrap_or(1);
    let page = match page {
        Some(raw) => coerce_page(raw, fallback),
        None => fallback,
    };
    let color = match color {
        Some(raw) => match resolve_color(raw) {
            Some(hex) => hex.to_string(),
            None => {
                let names: Vec<_> = PALETTE.iter().map(|(name, _)| *name).collect();
                bail!("unknown color {raw:?}; palette: {}", names.join(", "));
            }
        },
        None => cfg.default_color.clone(),
    };

    let key = canonical_key(url);
    let bookmark = db.add(&key, name.unwrap_or(""), page, &color).await?;
    tracing::debug!(id = %bookmark.id, key = %key, "bookmark added");
    println!(
        "Added \"{}\" (page {}) to {}",
        bookmark.name,
        bookmark.page,
        display_name(url)
    );
    Ok(())
}
