//! URL classification and canonicalization for PDF documents.
//!
//! Decides whether an address refers to a PDF resource (purely lexical, no
//! content sniffing), derives the canonical storage key, and produces a
//! human-readable document name.

mod canonical;
mod detect;
mod display;

pub use canonical::{canonical_key, page_from_fragment};
pub use detect::{is_pdf_document, is_pdf_view};
pub use display::display_name;
