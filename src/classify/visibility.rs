//! Markup-only visibility oracle.
//!
//! Without a renderer the best available signals are inline styles, the
//! `hidden` and `aria-hidden` attributes, and tags that never render.

use super::VisibilityOracle;
use crate::dom::{NodeId, NodeRef, NodeSet};
use crate::patterns::HIDDEN_STYLE;

const NEVER_RENDERED: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Flags elements hidden by inline style or attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleVisibility;

impl InlineStyleVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check a single element, ignoring its ancestors.
    #[must_use]
    pub fn is_hidden_element(node: &NodeRef) -> bool {
        if !node.is_element() {
            return false;
        }

        if let Some(tag) = node.node_name() {
            if NEVER_RENDERED.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
                return true;
            }
            if tag.eq_ignore_ascii_case("input")
                && node.attr("type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
            {
                return true;
            }
        }

        if node.has_attr("hidden") {
            return true;
        }

        if node
            .attr("aria-hidden")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
        {
            return true;
        }

        node.attr("style").is_some_and(|s| HIDDEN_STYLE.is_match(&s))
    }
}

impl VisibilityOracle for InlineStyleVisibility {
    fn hidden_elements(&self, root: NodeRef<'_>) -> NodeSet<NodeId> {
        let mut hidden = NodeSet::new();
        if Self::is_hidden_element(&root) {
            hidden.insert(root.id);
        }
        for node in root.descendants() {
            if Self::is_hidden_element(&node) {
                hidden.insert(node.id);
            }
        }
        tracing::debug!(count = hidden.len(), "hidden elements");
        hidden
    }
}
