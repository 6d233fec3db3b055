//! Distillation pipeline.
//!
//! Parses the page, reads its declared metadata, runs the three classifiers,
//! merges their outputs with the relevant-element finder and serializes the
//! result. Every phase is timed and reported to the debug log.

use std::time::Instant;

use crate::classify::{
    BlockDensityClassifier, ContentClassifier, InlineStyleVisibility, StructuralTableClassifier,
    TableClassifier, VisibilityOracle,
};
use crate::debug_log::DebugLog;
use crate::dom::{self, Document, DomNode, NodeRef};
use crate::error::Result;
use crate::finder::find_and_add_elements;
use crate::metadata;
use crate::options::{DebugLevel, DistillerOptions};
use crate::result::{
    DebugInfo, DistilledContent, DistillerResult, StatisticsInfo, TextDirection, TimingInfo,
};
use crate::serialize;
use crate::title::extract_title;

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

/// Collaborators that produce the finder's inputs.
pub struct Distiller<C, V, T> {
    content: C,
    visibility: V,
    tables: T,
}

impl Distiller<BlockDensityClassifier, InlineStyleVisibility, StructuralTableClassifier> {
    /// Markup-only defaults, with classifier thresholds from `options`.
    #[must_use]
    pub fn from_options(options: &DistillerOptions) -> Self {
        Self {
            content: BlockDensityClassifier::from_options(options),
            visibility: InlineStyleVisibility::new(),
            tables: StructuralTableClassifier::new(),
        }
    }
}

impl<C, V, T> Distiller<C, V, T>
where
    C: ContentClassifier,
    V: VisibilityOracle,
    T: TableClassifier,
{
    pub fn new(content: C, visibility: V, tables: T) -> Self {
        Self {
            content,
            visibility,
            tables,
        }
    }

    /// Distill an HTML string.
    ///
    /// # Errors
    ///
    /// Returns an error when `options` fail validation.
    pub fn distill(&self, html: &str, options: &DistillerOptions) -> Result<DistillerResult> {
        options.validate()?;
        let start = Instant::now();
        let mut log = DebugLog::new(options.debug_level);
        log.log(
            DebugLevel::Phases,
            format!("DomDistiller debug level: {:?}", options.debug_level),
        );

        let phase = Instant::now();
        let doc = dom::parse(html);
        let markup_parsing_time = elapsed_ms(phase);
        log.log(DebugLevel::Phases, format!("parsed {} bytes of markup", html.len()));

        let phase = Instant::now();
        let title = extract_title(&doc);
        let markup_info = metadata::extract_markup_info(&doc);
        let pagination_info = metadata::extract_pagination(&doc);
        let root = dom::body_or_root(&doc);
        let hidden = self.visibility.hidden_elements(doc.root());
        let data_tables = self.tables.data_tables(root);
        let document_construction_time = elapsed_ms(phase);
        log.log(
            DebugLevel::Phases,
            format!(
                "pagination: next={:?} prev={:?}",
                pagination_info.next_page, pagination_info.prev_page
            ),
        );
        log.log(
            DebugLevel::Visibility,
            format!("hidden elements: {}, data tables: {}", hidden.len(), data_tables.len()),
        );

        let phase = Instant::now();
        let content_nodes = self.content.classify(root, &hidden);
        log.log(DebugLevel::Phases, format!("content text nodes: {}", content_nodes.len()));
        let relevant = find_and_add_elements(&content_nodes, &hidden, &data_tables, &root)?;
        let article_processing_time = elapsed_ms(phase);
        log.log(DebugLevel::Phases, format!("relevant nodes: {}", relevant.len()));

        let phase = Instant::now();
        let text = serialize::to_text(&relevant);
        let html_out = if options.extract_text_only {
            text.clone()
        } else {
            serialize::to_html(&relevant, &root)
        };
        let formatting_time = elapsed_ms(phase);

        let timing_info = TimingInfo {
            markup_parsing_time,
            document_construction_time,
            article_processing_time,
            formatting_time,
            total_time: elapsed_ms(start),
        };
        log.log(DebugLevel::Timing, format!("timing: {timing_info:?}"));

        Ok(DistillerResult {
            title,
            distilled_content: DistilledContent { html: html_out },
            text_direction: text_direction(&doc),
            pagination_info,
            markup_info,
            timing_info,
            statistics_info: StatisticsInfo {
                word_count: text.split_whitespace().count(),
            },
            debug_info: DebugInfo {
                log: log.into_text(),
            },
        })
    }
}

/// `dir` of `<body>`, then `<html>`; `Auto` when neither declares one.
#[must_use]
pub fn text_direction(doc: &Document) -> TextDirection {
    ["body", "html"]
        .iter()
        .filter_map(|sel| dom::select_first(doc, sel))
        .filter_map(|n: NodeRef| n.attribute("dir"))
        .find_map(|d| TextDirection::from_attr(&d))
        .unwrap_or_default()
}

/// Main entry point used by the crate-level functions.
pub(crate) fn distill_content(html: &str, options: &DistillerOptions) -> Result<DistillerResult> {
    Distiller::from_options(options).distill(html, options)
}
