//! Text normalization helpers
//!
//! Accent folding, whitespace normalization and slugging. Pure functions,
//! no state; everything downstream that compares text goes through here.

use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_SLUG: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Fold accented characters to their ASCII counterparts.
pub fn fold(s: &str) -> String {
    deunicode(s)
}

/// Fold and lowercase, the comparison form used by the prefilter.
pub fn fold_lower(s: &str) -> String {
    deunicode(s).to_lowercase()
}

/// Collapse whitespace runs to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    WS_RUN.replace_all(s, " ").trim().to_string()
}

/// Deterministic slug: folded, lowercased, non-alphanumeric runs become `-`.
///
/// An input with no usable characters slugs to `"n-a"` so callers always
/// get a non-empty file-name-safe string.
pub fn slugify(s: &str) -> String {
    let folded = fold_lower(s);
    let slug = NON_SLUG
        .replace_all(&folded, "-")
        .trim_matches('-')
        .to_string();
    if slug.is_empty() {
        "n-a".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_lower_accents() {
        assert_eq!(fold_lower("Jurisprudência"), "jurisprudencia");
        assert_eq!(fold_lower("Conclusões"), "conclusoes");
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Teses centrais"), "teses-centrais");
        assert_eq!(slugify("Jurisprudência relevante!"), "jurisprudencia-relevante");
        assert_eq!(slugify("***"), "n-a");
        assert_eq!(slugify(""), "n-a");
    }
}
