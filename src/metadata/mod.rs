//! Page-level facts read from declarative markup.
//!
//! OpenGraph `<meta>` tags take precedence; schema.org JSON-LD fills in
//! whatever they leave out. Pagination comes from `rel="next"` and
//! `rel="prev"` links.

mod json_ld;
mod meta_tags;
mod pagination;

pub use json_ld::extract_schema_org;
pub use meta_tags::extract_open_graph;
pub use pagination::extract_pagination;

use crate::dom::Document;
use crate::result::MarkupInfo;

/// OpenGraph values, completed from schema.org JSON-LD.
#[must_use]
pub fn extract_markup_info(doc: &Document) -> MarkupInfo {
    extract_open_graph(doc).or(extract_schema_org(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn test_open_graph_wins_over_json_ld() {
        let doc = dom::parse(
            r#"<html><head>
            <meta property="og:title" content="From OpenGraph">
            <script type="application/ld+json">
                {"@type": "NewsArticle", "headline": "From JSON-LD", "url": "https://example.com/a"}
            </script>
            </head><body></body></html>"#,
        );

        let info = extract_markup_info(&doc);

        assert_eq!(info.title.as_deref(), Some("From OpenGraph"));
        assert_eq!(info.page_type.as_deref(), Some("NewsArticle"));
        assert_eq!(info.url.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_no_markup() {
        let doc = dom::parse("<p>nothing declared</p>");
        assert_eq!(extract_markup_info(&doc), MarkupInfo::default());
    }
}
