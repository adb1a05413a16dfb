//! Lexical PDF detection.

/// Browser-extension schemes whose viewer pages count as PDF views when the
/// URL mentions `pdf` anywhere.
const EXTENSION_SCHEMES: &[&str] = &["chrome-extension://", "moz-extension://"];

/// Returns true when `url` refers to a PDF resource.
///
/// Rules, in order, any match wins:
/// 1. path ends with `.pdf` (case-insensitive);
/// 2. URL contains `.pdf?` or `.pdf#`;
/// 3. URL uses a browser-extension scheme and contains `pdf`.
///
/// Empty URLs are never PDFs. Classification is purely lexical; there is no
/// HEAD probe or MIME check.
pub fn is_pdf_document(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lower = url.to_lowercase();
    if lower.ends_with(".pdf") {
        return true;
    }
    if lower.contains(".pdf?") || lower.contains(".pdf#") {
        return true;
    }
    EXTENSION_SCHEMES.iter().any(|s| lower.starts_with(s)) && lower.contains("pdf")
}

/// Wider variant used by the presentation layer: accepts everything
/// [`is_pdf_document`] accepts, plus in-browser viewer pages (`viewer.html`)
/// and cloud-drive previews that mention `pdf`.
pub fn is_pdf_view(url: &str) -> bool {
    if is_pdf_document(url) {
        return true;
    }
    let lower = url.to_lowercase();
    (lower.contains("viewer.html") && lower.contains("pdf"))
        || (lower.contains("drive.google.com") && lower.contains("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_suffix_any_case() {
        assert!(is_pdf_document("https://example.com/report.pdf"));
        assert!(is_pdf_document("https://example.com/REPORT.PDF"));
        assert!(is_pdf_document("https://example.com/a/b/paper.Pdf"));
    }

    #[test]
    fn pdf_with_query_or_fragment() {
        assert!(is_pdf_document("https://example.com/report.pdf?token=abc"));
        assert!(is_pdf_document("https://example.com/report.pdf#page=3"));
    }

    #[test]
    fn extension_viewer_scheme() {
        assert!(is_pdf_document(
            "chrome-extension://abcdef/pdf/viewer?file=x"
        ));
        assert!(!is_pdf_document("chrome-extension://abcdef/options.html"));
    }

    #[test]
    fn non_pdf_urls() {
        assert!(!is_pdf_document(""));
        assert!(!is_pdf_document("https://example.com/"));
        assert!(!is_pdf_document("https://example.com/report.pdfx"));
        assert!(!is_pdf_document("https://example.com/pdf-guide.html"));
    }

    #[test]
    fn view_variant_accepts_viewer_pages() {
        assert!(is_pdf_view(
            "https://example.com/viewer.html?file=report.pdf"
        ));
        assert!(is_pdf_view("https://drive.google.com/file/d/xyz/pdf-view"));
        assert!(!is_pdf_view("https://drive.google.com/file/d/xyz/view"));
        assert!(!is_pdf_view("https://example.com/viewer.html?file=a.png"));
    }

    #[test]
    fn view_variant_is_superset() {
        assert!(is_pdf_view("https://example.com/report.pdf"));
    }
}
