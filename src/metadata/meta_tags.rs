//! OpenGraph `<meta property="og:*">` tags.

use crate::dom::Document;
use crate::result::MarkupInfo;

/// Read OpenGraph properties; the first non-empty value of each wins.
#[must_use]
pub fn extract_open_graph(doc: &Document) -> MarkupInfo {
    let mut info = MarkupInfo::default();

    for node in doc.select("meta[property^='og:']").nodes() {
        let (Some(property), Some(content)) = (node.attr("property"), node.attr("content")) else {
            continue;
        };
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        let slot = match property.to_ascii_lowercase().as_str() {
            "og:title" => &mut info.title,
            "og:type" => &mut info.page_type,
            "og:url" => &mut info.url,
            "og:description" => &mut info.description,
            "og:image" | "og:image:url" | "og:image:secure_url" => &mut info.image,
            "og:site_name" => &mut info.site_name,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(content.to_string());
        }
    }

    info
}
