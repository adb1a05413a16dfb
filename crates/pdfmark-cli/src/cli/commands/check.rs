//! `pdfmark check <url>` – show how a URL is classified.

use anyhow::Result;
use pdfmark_core::classifier::{
    canonical_key, display_name, is_pdf_document, is_pdf_view, page_from_fragment,
};

pub fn run_check(url: &str) -> Result<()> {
    if is_pdf_document(url) {
        println!("PDF document");
    } else if is_pdf_view(url) {
        println!("PDF viewer page");
    } else {
        println!("Not a PDF: {url}");
        return Ok(());
    }
    println!("canonical key: {}", canonical_key(url));
    println!("display name:  {}", display_name(url));
    if let Some(page) = page_from_fragment(url) {
        println!("fragment page: {page}");
    }
    Ok(())
}
