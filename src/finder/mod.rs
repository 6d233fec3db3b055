//! Relevant-element finder.
//!
//! Given the text nodes a classifier marked as content, decides which
//! non-text elements belong with them: images that directly follow content
//! and whole data tables. The output is the merged list in document order.
//!
//! # Rules
//!
//! The walk is a single preorder traversal of `root`. At each node:
//!
//! 1. hidden nodes are skipped together with their subtree;
//! 2. content nodes are emitted and restart the content run;
//! 3. `<table>` elements in the data-table set are emitted wholesale and
//!    restart the content run;
//! 4. `<img>` elements are emitted only while the content run is unbroken;
//! 5. any other non-blank text breaks the run;
//! 6. everything else is transparent.

mod table;
mod tracker;
mod visibility;

pub use table::DataTableExpander;
pub use tracker::{ContentRunTracker, RunState};
pub use visibility::VisibilityCheck;

use crate::dom::{DomNode, NodeSet};
use crate::error::{Error, Result};

/// Merge images and data tables into the content node list.
///
/// `content_nodes` must all lie inside `root`; the input order and any
/// duplicates do not matter, the walk defines the output order. Nothing is
/// mutated and no state survives the call.
///
/// # Errors
///
/// Returns [`Error::ContentOutsideRoot`] when a content node is not part of
/// `root`'s subtree.
pub fn find_and_add_elements<N: DomNode>(
    content_nodes: &[N],
    hidden_elements: &NodeSet<N::Id>,
    data_tables: &NodeSet<N::Id>,
    root: &N,
) -> Result<Vec<N>> {
    if let Some(pos) = content_nodes.iter().position(|n| !n.is_descendant_of(root)) {
        tracing::warn!(index = pos, "content node outside traversal root");
        return Err(Error::ContentOutsideRoot);
    }

    let content: NodeSet<N::Id> = content_nodes.iter().map(DomNode::node_id).collect();
    let visibility = VisibilityCheck::new(hidden_elements);
    let expander = DataTableExpander::new(&visibility);
    let mut tracker = ContentRunTracker::new();

    let mut out = Vec::with_capacity(content.len());
    let mut images = 0usize;
    let mut tables = 0usize;

    // Children are pushed in reverse so they pop in document order.
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if visibility.is_self_hidden(&node) {
            continue;
        }

        if content.contains(&node.node_id()) {
            tracker.on_content();
            stack.extend(node.child_nodes().into_iter().rev());
            out.push(node);
            continue;
        }

        if node.is_tag("table") && data_tables.contains(&node.node_id()) {
            expander.expand(&node, &mut out);
            tracker.on_table();
            tables += 1;
            continue;
        }

        if node.is_tag("img") {
            if tracker.allows_image() {
                out.push(node);
                images += 1;
            }
            continue;
        }

        if let Some(text) = node.text_value() {
            tracker.on_text(&text);
            continue;
        }

        stack.extend(node.child_nodes().into_iter().rev());
    }

    tracing::trace!(
        content = content.len(),
        images,
        tables,
        total = out.len(),
        "relevant elements found"
    );

    Ok(out)
}
