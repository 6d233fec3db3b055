//! # dom-distiller
//!
//! Extracts the readable main content of a web page from its document tree,
//! for reading-mode rendering, summarization and feed pipelines.
//!
//! ## Quick Start
//!
//! ```rust
//! use dom_distiller::distill;
//!
//! let html = r#"<html><head><title>My Article</title></head><body>
//! <nav><a href="/">Home</a></nav>
//! <article><p>Main content here, long enough to count as a real paragraph of text.</p></article>
//! </body></html>"#;
//!
//! let result = distill(html)?;
//! assert_eq!(result.title, "My Article");
//! assert!(result.distilled_content.html.contains("Main content"));
//! # Ok::<(), dom_distiller::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Metadata**: OpenGraph and schema.org values plus `rel` next/prev
//!   pagination links are read from the markup
//! - **Classification**: text nodes are labelled content or boilerplate,
//!   hidden elements are found, tables are split into data and layout
//! - **Relevant elements**: [`finder::find_and_add_elements`] merges images
//!   that directly follow content and whole data tables into the content
//!   list, in document order, skipping hidden subtrees
//! - **Serialization**: the merged list is rendered as HTML or plain text
//!
//! The finder works on any tree implementing [`dom::DomNode`].

mod distill;
mod error;
mod options;
mod patterns;
mod result;

/// DOM capability interface and `dom_query` adapter.
pub mod dom;

/// Relevant-element finder: visibility, content runs, data-table expansion.
pub mod finder;

/// Default content, visibility and table classifiers.
pub mod classify;

/// Per-run diagnostic log.
pub mod debug_log;

/// Rendering of the final node list as HTML or text.
pub mod serialize;

/// Document title lookup.
pub mod title;

/// OpenGraph, schema.org and pagination markup.
pub mod metadata;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use distill::{text_direction, Distiller};
pub use error::{Error, Result};
pub use options::{DebugLevel, DistillerOptions};
pub use result::{
    DebugInfo, DistilledContent, DistillerResult, MarkupInfo, PaginationInfo, StatisticsInfo,
    TextDirection, TimingInfo,
};

/// Distills an HTML document using default options.
///
/// # Errors
///
/// Returns an `Error` if distillation fails.
pub fn distill(html: &str) -> Result<DistillerResult> {
    distill_with_options(html, &DistillerOptions::default())
}

/// Distills an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use dom_distiller::{distill_with_options, DistillerOptions};
///
/// let html = "<body><p>Plain text output skips all of the markup in this short paragraph.</p></body>";
/// let options = DistillerOptions {
///     extract_text_only: true,
///     ..DistillerOptions::default()
/// };
/// let result = distill_with_options(html, &options)?;
/// assert!(!result.distilled_content.html.contains('<'));
/// # Ok::<(), dom_distiller::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] when `options` fail validation.
pub fn distill_with_options(html: &str, options: &DistillerOptions) -> Result<DistillerResult> {
    distill::distill_content(html, options)
}

/// Distills HTML bytes, detecting the character encoding from meta tags.
///
/// Invalid byte sequences are replaced with U+FFFD rather than failing.
///
/// # Errors
///
/// Returns an `Error` if distillation fails.
pub fn distill_bytes(html: &[u8]) -> Result<DistillerResult> {
    distill_bytes_with_options(html, &DistillerOptions::default())
}

/// Distills HTML bytes with custom options and encoding detection.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] when `options` fail validation.
pub fn distill_bytes_with_options(html: &[u8], options: &DistillerOptions) -> Result<DistillerResult> {
    let html_str = encoding::decode_html(html);
    distill_with_options(&html_str, options)
}
