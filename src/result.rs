//! Result types for distillation output.

use serde::{Deserialize, Serialize};

/// Base writing direction of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
    /// No explicit direction was declared.
    #[default]
    Auto,
}

impl TextDirection {
    /// Parse a `dir` attribute value; unknown values yield `None`.
    #[must_use]
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

/// Serialized main content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistilledContent {
    /// HTML markup, or plain text when `extract_text_only` is set.
    pub html: String,
}

/// Wall-clock time spent per phase, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingInfo {
    /// Parsing the HTML into a tree.
    pub markup_parsing_time: f64,
    /// Title, visibility and table classification.
    pub document_construction_time: f64,
    /// Content classification and relevant-element merging.
    pub article_processing_time: f64,
    /// Serialization of the final node list.
    pub formatting_time: f64,
    pub total_time: f64,
}

/// Counts about the distilled content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsInfo {
    /// Words in the distilled text.
    pub word_count: usize,
}

/// Diagnostic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugInfo {
    /// Accumulated log text; empty unless a debug level was requested.
    pub log: String,
}

/// Links to the neighbouring pages of a paginated article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub next_page: Option<String>,
    pub prev_page: Option<String>,
}

/// Page facts declared through OpenGraph or schema.org markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupInfo {
    pub title: Option<String>,
    /// `og:type`, or the schema.org `@type`.
    pub page_type: Option<String>,
    /// Canonical URL.
    pub url: Option<String>,
    pub description: Option<String>,
    /// Lead image URL.
    pub image: Option<String>,
    pub site_name: Option<String>,
}

impl MarkupInfo {
    /// Fill every field still missing from `other`.
    #[must_use]
    pub fn or(self, other: MarkupInfo) -> Self {
        Self {
            title: self.title.or(other.title),
            page_type: self.page_type.or(other.page_type),
            url: self.url.or(other.url),
            description: self.description.or(other.description),
            image: self.image.or(other.image),
            site_name: self.site_name.or(other.site_name),
        }
    }
}

/// Result of distilling an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistillerResult {
    /// Document title, empty if none was found.
    pub title: String,

    pub distilled_content: DistilledContent,

    pub text_direction: TextDirection,

    pub pagination_info: PaginationInfo,

    pub markup_info: MarkupInfo,

    pub timing_info: TimingInfo,

    pub statistics_info: StatisticsInfo,

    pub debug_info: DebugInfo,
}
