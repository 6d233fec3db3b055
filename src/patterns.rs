//! Compiled regex patterns shared by the default classifiers.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Visibility
// =============================================================================

/// Inline style declarations that remove an element from rendering.
/// Tolerates whitespace around the colon and `!important`.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*(?:display\s*:\s*none|visibility\s*:\s*hidden)\s*(?:!important)?\s*(?:;|$)")
        .expect("HIDDEN_STYLE regex")
});

// =============================================================================
// Boilerplate Detection
// =============================================================================

/// Class/id names of navigation, ads, share bars and other page chrome.
/// Matches whole dash/underscore separated tokens so `article-header-image`
/// does not trip on `header`.
pub static BOILERPLATE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s_-])(?:nav|navbar|navigation|menu|breadcrumbs?|sidebar|widget|footer|masthead|banner|ads?|advert|advertisement|sponsored|promo|share|social|related|comments?|cookie|newsletter|subscribe|popup|modal)(?:$|[\s_-])",
    )
    .expect("BOILERPLATE_NAME regex")
});

// =============================================================================
// Text Normalization
// =============================================================================

/// Runs of any whitespace.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style_variants() {
        assert!(HIDDEN_STYLE.is_match("display:none"));
        assert!(HIDDEN_STYLE.is_match("display: none;"));
        assert!(HIDDEN_STYLE.is_match("color: red; DISPLAY : NONE"));
        assert!(HIDDEN_STYLE.is_match("visibility:hidden !important"));
        assert!(!HIDDEN_STYLE.is_match("display:block"));
        assert!(!HIDDEN_STYLE.is_match("display: none-ish"));
        assert!(!HIDDEN_STYLE.is_match("overflow: hidden"));
    }

    #[test]
    fn test_boilerplate_names() {
        assert!(BOILERPLATE_NAME.is_match("nav"));
        assert!(BOILERPLATE_NAME.is_match("site-footer"));
        assert!(BOILERPLATE_NAME.is_match("main menu"));
        assert!(BOILERPLATE_NAME.is_match("share_buttons"));
        assert!(!BOILERPLATE_NAME.is_match("article-body"));
        assert!(!BOILERPLATE_NAME.is_match("canvas"));
        assert!(!BOILERPLATE_NAME.is_match("shared-content"));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
