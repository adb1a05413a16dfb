//! Fixed bookmark color palette.

/// Palette entries as (name, hex). The hex values are what gets persisted.
pub const PALETTE: &[(&str, &str)] = &[
    ("red", "#FF4D4D"),
    ("orange", "#FFB020"),
    ("green", "#2ECC71"),
    ("blue", "#00AEEF"),
    ("purple", "#9B59B6"),
    ("pink", "#FF7AB8"),
];

/// Color used when none is selected.
pub const DEFAULT_COLOR: &str = "#FF4D4D";

/// Resolves user color input to a palette hex value.
///
/// Accepts a palette name or one of the palette hex codes, both
/// case-insensitive. Returns `None` for anything outside the palette.
pub fn resolve_color(input: &str) -> Option<&'static str> {
    let needle = input.trim();
    PALETTE
        .iter()
        .find(|(name, hex)| needle.eq_ignore_ascii_case(name) || needle.eq_ignore_ascii_case(hex))
        .map(|(_, hex)| *hex)
}
