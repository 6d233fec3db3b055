//! Document title lookup.

use crate::dom::{self, Document};
use crate::patterns::collapse_whitespace;

/// Best available title: `<title>`, then `og:title`, then the first `<h1>`.
///
/// Returns an empty string when none of them has text.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    let candidates = [
        dom::select_first(doc, "title").map(|n| n.text()),
        dom::select_first(doc, r#"meta[property="og:title"]"#).and_then(|n| n.attr("content")),
        dom::select_first(doc, "h1").map(|n| n.text()),
    ];

    candidates
        .into_iter()
        .flatten()
        .map(|t| collapse_whitespace(&t))
        .find(|t| !t.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_element() {
        let doc = dom::parse("<html><head><title>  My\n  Article </title></head><body><h1>H</h1></body></html>");
        assert_eq!(extract_title(&doc), "My Article");
    }

    #[test]
    fn test_og_title_fallback() {
        let doc = dom::parse(
            r#"<html><head><title> </title><meta property="og:title" content="Open Graph"></head></html>"#,
        );
        assert_eq!(extract_title(&doc), "Open Graph");
    }

    #[test]
    fn test_h1_fallback() {
        let doc = dom::parse("<body><h1>Heading <em>one</em></h1><h1>two</h1></body>");
        assert_eq!(extract_title(&doc), "Heading one");
    }

    #[test]
    fn test_missing_title() {
        let doc = dom::parse("<p>no title</p>");
        assert_eq!(extract_title(&doc), "");
    }
}
