//! Canonical storage keys for documents.

/// Derives the storage key for a document URL by stripping everything from
/// the first `#` onward.
///
/// Navigation fragments (such as a `#page=N` anchor) never influence the key,
/// so bookmarks persist regardless of which page was open at save time.
pub fn canonical_key(url: &str) -> String {
    match url.find('#') {
        Some(i) => url[..i].to_string(),
        None => url.to_string(),
    }
}

/// Extracts the page number from a `#page=N` fragment, case-insensitive.
///
/// Returns `None` when the URL has no such fragment or the number does not
/// parse.
pub fn page_from_fragment(url: &str) -> Option<u32> {
    // ASCII lowercasing keeps byte offsets identical to the input.
    let lower = url.to_ascii_lowercase();
    let start = lower.find("#page=")? + "#page=".len();
    let digits: &str = &lower[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fragment() {
        assert_eq!(
            canonical_key("https://x.com/a.pdf#page=3"),
            "https://x.com/a.pdf"
        );
        assert_eq!(
            canonical_key("https://x.com/a.pdf#zoom=150#page=2"),
            "https://x.com/a.pdf"
        );
    }

    #[test]
    fn no_fragment_unchanged() {
        assert_eq!(
            canonical_key("https://x.com/a.pdf?token=1"),
            "https://x.com/a.pdf?token=1"
        );
    }

    #[test]
    fn fragment_variants_share_a_key() {
        let base = "https://x.com/a.pdf";
        for n in [1, 7, 42, 9999] {
            assert_eq!(canonical_key(&format!("{base}#page={n}")), base);
        }
    }

    #[test]
    fn page_fragment_parsing() {
        assert_eq!(page_from_fragment("https://x.com/a.pdf#page=3"), Some(3));
        assert_eq!(page_from_fragment("https://x.com/a.pdf#PAGE=12"), Some(12));
        assert_eq!(page_from_fragment("https://x.com/a.pdf#page=3&zoom=2"), Some(3));
        assert_eq!(page_from_fragment("https://x.com/a.pdf"), None);
        assert_eq!(page_from_fragment("https://x.com/a.pdf#page="), None);
        assert_eq!(page_from_fragment("https://x.com/a.pdf#page=abc"), None);
    }
}
