//! schema.org JSON-LD blocks.
//!
//! Every typed object in every `application/ld+json` script is a candidate,
//! including those nested in `@graph` arrays. The most article-like one
//! provides the values.

use serde_json::{Map, Value};

use crate::dom::Document;
use crate::result::MarkupInfo;

/// Types describing the page's main article.
const ARTICLE_TYPES: &[&str] = &[
    "article",
    "newsarticle",
    "blogposting",
    "reportagenewsarticle",
    "scholarlyarticle",
    "techarticle",
    "report",
    "recipe",
    "review",
];

/// Types describing the site or its parts rather than the page.
const PERIPHERAL_TYPES: &[&str] = &[
    "person",
    "organization",
    "newsmediaorganization",
    "website",
    "breadcrumblist",
    "listitem",
    "imageobject",
    "searchaction",
];

fn schema_types(object: &Map<String, Value>) -> Vec<&str> {
    match object.get("@type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn importance(types: &[&str]) -> u8 {
    let lower: Vec<String> = types.iter().map(|t| t.to_ascii_lowercase()).collect();
    if lower.iter().any(|t| ARTICLE_TYPES.contains(&t.as_str())) {
        2
    } else if lower.iter().all(|t| PERIPHERAL_TYPES.contains(&t.as_str())) {
        0
    } else {
        1
    }
}

/// Gather typed objects, depth first, in source order.
fn collect_typed<'v>(value: &'v Value, out: &mut Vec<&'v Map<String, Value>>) {
    match value {
        Value::Object(object) => {
            if !schema_types(object).is_empty() {
                out.push(object);
            }
            for child in object.values() {
                collect_typed(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_typed(item, out);
            }
        }
        _ => {}
    }
}

fn string_value(object: &Map<String, Value>, key: &str) -> Option<String> {
    let value = match object.get(key)? {
        Value::Array(items) => items.first()?,
        other => other,
    };
    let text = value.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// `image` may be a URL, an `ImageObject`, or a list of either.
fn image_url(object: &Map<String, Value>) -> Option<String> {
    let image = match object.get("image")? {
        Value::Array(items) => items.first()?,
        other => other,
    };
    match image {
        Value::String(url) => Some(url.trim().to_string()).filter(|u| !u.is_empty()),
        Value::Object(inner) => string_value(inner, "url"),
        _ => None,
    }
}

fn publisher_name(object: &Map<String, Value>) -> Option<String> {
    match object.get("publisher")? {
        Value::Object(publisher) => string_value(publisher, "name"),
        Value::String(name) => Some(name.trim().to_string()).filter(|n| !n.is_empty()),
        _ => None,
    }
}

fn markup_from(object: &Map<String, Value>) -> MarkupInfo {
    MarkupInfo {
        title: string_value(object, "headline").or_else(|| string_value(object, "name")),
        page_type: schema_types(object).first().map(|t| (*t).to_string()),
        url: string_value(object, "url"),
        description: string_value(object, "description"),
        image: image_url(object),
        site_name: publisher_name(object),
    }
}

/// Values from the most relevant schema.org object on the page.
///
/// Malformed scripts are skipped. Objects that only describe the site
/// (organization, breadcrumbs, search box) are never used.
#[must_use]
pub fn extract_schema_org(doc: &Document) -> MarkupInfo {
    let documents: Vec<Value> = doc
        .select(r#"script[type="application/ld+json"]"#)
        .nodes()
        .iter()
        .filter_map(|script| match serde_json::from_str::<Value>(script.text().trim()) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(%err, "skipping malformed JSON-LD block");
                None
            }
        })
        .collect();

    let mut candidates = Vec::new();
    for value in &documents {
        collect_typed(value, &mut candidates);
    }

    // max_by_key keeps the last maximum; reverse so the first one wins.
    candidates
        .into_iter()
        .map(|object| (importance(&schema_types(object)), object))
        .filter(|(rank, _)| *rank > 0)
        .rev()
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, object)| markup_from(object))
        .unwrap_or_default()
}
