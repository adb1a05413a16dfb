//! Human-readable document names derived from URLs.

/// Shown when a URL cannot be parsed or has no usable path segment.
const PLACEHOLDER: &str = "PDF Document";

/// Names longer than this are truncated.
const MAX_LEN: usize = 30;
const TRUNCATED_LEN: usize = 27;

/// Derives a short display name for a document URL.
///
/// Takes the final path segment, percent-decodes it, strips a trailing `.pdf`
/// case-insensitively, and truncates to 27 characters plus `...` when the
/// decoded name exceeds 30. Falls back to a fixed placeholder on malformed
/// URLs or empty paths.
pub fn display_name(url: &str) -> String {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return PLACEHOLDER.to_string(),
    };
    let segment = match parsed.path().split('/').filter(|s| !s.is_empty()).last() {
        Some(s) => s,
        None => return PLACEHOLDER.to_string(),
    };
    let decoded = match urlencoding::decode(segment) {
        Ok(d) => d.into_owned(),
        Err(_) => return PLACEHOLDER.to_string(),
    };
    let stripped = if decoded.to_ascii_lowercase().ends_with(".pdf") {
        decoded[..decoded.len() - 4].to_string()
    } else {
        decoded
    };
    if stripped.chars().count() > MAX_LEN {
        let head: String = stripped.chars().take(TRUNCATED_LEN).collect();
        format!("{head}...")
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_without_suffix() {
        assert_eq!(display_name("https://x.com/a/b/report.pdf"), "report");
        assert_eq!(display_name("https://x.com/Report.PDF"), "Report");
    }

    #[test]
    fn percent_decoded() {
        assert_eq!(
            display_name("https://x.com/My%20Report.pdf"),
            "My Report"
        );
    }

    #[test]
    fn long_names_truncated_with_ellipsis() {
        let name = display_name("https://x.com/My%20Long%20Report%20Title%20Here%20Extended.pdf");
        assert!(name.chars().count() <= MAX_LEN);
        assert!(name.ends_with("..."));
        assert!(name.starts_with("My Long Report"));
    }

    #[test]
    fn exactly_thirty_chars_not_truncated() {
        // "123456789012345678901234567890.pdf" decodes to a 30-char name.
        let url = "https://x.com/123456789012345678901234567890.pdf";
        assert_eq!(display_name(url), "123456789012345678901234567890");
    }

    #[test]
    fn placeholder_on_bad_input() {
        assert_eq!(display_name("not a url"), PLACEHOLDER);
        assert_eq!(display_name("https://x.com/"), PLACEHOLDER);
        assert_eq!(display_name("https://x.com"), PLACEHOLDER);
    }
}
