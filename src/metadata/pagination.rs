//! Next and previous page links declared with `rel`.

use crate::dom::Document;
use crate::result::PaginationInfo;

fn usable_href(href: &str) -> bool {
    !href.is_empty() && href != "#" && !href.to_ascii_lowercase().starts_with("javascript:")
}

/// First `rel="next"` and `rel="prev"` (or `previous`) targets among
/// `<link>` and `<a>` elements, in document order.
#[must_use]
pub fn extract_pagination(doc: &Document) -> PaginationInfo {
    let mut info = PaginationInfo::default();

    for node in doc.select("link[rel][href], a[rel][href]").nodes() {
        let Some(href) = node.attr("href") else {
            continue;
        };
        let href = href.trim();
        if !usable_href(href) {
            continue;
        }

        let rel = node.attr("rel").map(|r| r.to_ascii_lowercase()).unwrap_or_default();
        for token in rel.split_whitespace() {
            let slot = match token {
                "next" => &mut info.next_page,
                "prev" | "previous" => &mut info.prev_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(href.to_string());
            }
        }
    }

    tracing::debug!(next = ?info.next_page, prev = ?info.prev_page, "pagination links");
    info
}
