//! DOM capability interface.
//!
//! The distiller core only needs five things from a tree: node kind, tag,
//! text value, ordered children and a parent lookup. [`DomNode`] captures
//! exactly that, so the same traversal runs against the `dom_query` tree used
//! by the pipeline or against any other tree a caller owns.

use std::collections::HashSet;
use std::hash::Hash;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};
pub use tendril::StrTendril;

/// Coarse node classification used by the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element such as `<div>` or `<img>`.
    Element,
    /// A text leaf.
    Text,
    /// Comments, doctypes, processing instructions and the document node.
    Other,
}

/// Identity-keyed node set. Membership is by identity, never by content.
pub type NodeSet<Id> = HashSet<Id>;

/// Minimal read-only view of a tree node.
///
/// `node_id` must be stable for the node's lifetime and unique within the
/// tree: two text nodes holding the same string are different nodes.
pub trait DomNode: Clone {
    /// Identity token.
    type Id: Copy + Eq + Hash;

    fn node_id(&self) -> Self::Id;

    fn kind(&self) -> NodeKind;

    /// Lower-case tag name for elements, `None` otherwise.
    fn tag_name(&self) -> Option<StrTendril>;

    /// String value for text nodes, `None` otherwise.
    fn text_value(&self) -> Option<StrTendril>;

    /// Children in document order.
    fn child_nodes(&self) -> Vec<Self>;

    /// Non-owning parent lookup.
    fn parent_node(&self) -> Option<Self>;

    /// Attribute value for elements.
    fn attribute(&self, name: &str) -> Option<StrTendril>;

    #[inline]
    fn is_element(&self) -> bool {
        self.kind() == NodeKind::Element
    }

    #[inline]
    fn is_text(&self) -> bool {
        self.kind() == NodeKind::Text
    }

    /// Check the tag name, ignoring ASCII case.
    fn is_tag(&self, name: &str) -> bool {
        self.tag_name().is_some_and(|t| t.eq_ignore_ascii_case(name))
    }

    /// True when `self` is `root` or lies somewhere below it.
    fn is_descendant_of(&self, root: &Self) -> bool {
        let root_id = root.node_id();
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.node_id() == root_id {
                return true;
            }
            current = node.parent_node();
        }
        false
    }
}

impl<'a> DomNode for NodeRef<'a> {
    type Id = NodeId;

    #[inline]
    fn node_id(&self) -> NodeId {
        self.id
    }

    fn kind(&self) -> NodeKind {
        if NodeRef::is_element(self) {
            NodeKind::Element
        } else if NodeRef::is_text(self) {
            NodeKind::Text
        } else {
            NodeKind::Other
        }
    }

    fn tag_name(&self) -> Option<StrTendril> {
        if NodeRef::is_element(self) {
            self.node_name()
        } else {
            None
        }
    }

    fn text_value(&self) -> Option<StrTendril> {
        if NodeRef::is_text(self) {
            Some(self.text())
        } else {
            None
        }
    }

    #[inline]
    fn child_nodes(&self) -> Vec<Self> {
        self.children()
    }

    #[inline]
    fn parent_node(&self) -> Option<Self> {
        self.parent()
    }

    #[inline]
    fn attribute(&self, name: &str) -> Option<StrTendril> {
        self.attr(name)
    }
}

/// Build an identity set from any node collection.
pub fn node_set<N, I>(nodes: I) -> NodeSet<N::Id>
where
    N: DomNode,
    I: IntoIterator<Item = N>,
{
    nodes.into_iter().map(|n| n.node_id()).collect()
}

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First node matching a CSS selector, if any.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().copied()
}

/// The `<body>` element, falling back to the document root.
#[must_use]
pub fn body_or_root(doc: &Document) -> NodeRef<'_> {
    select_first(doc, "body").unwrap_or_else(|| doc.root())
}

/// Check if a tag is a void element (no children, no closing tag).
#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    const VOID_ELEMENTS: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input",
        "link", "meta", "param", "source", "track", "wbr",
    ];

    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Check if a tag starts a new block of text.
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    const BLOCK_ELEMENTS: &[&str] = &[
        "address", "article", "aside", "blockquote", "body", "caption", "dd", "details",
        "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1",
        "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p",
        "pre", "section", "summary", "table", "td", "th", "tr", "ul",
    ];

    BLOCK_ELEMENTS.iter().any(|b| b.eq_ignore_ascii_case(tag))
}

/// Nearest ancestor (or self) that starts a text block.
pub fn block_ancestor<N: DomNode>(node: &N) -> Option<N> {
    let mut current = Some(node.clone());
    while let Some(n) = current {
        if n.tag_name().is_some_and(|t| is_block_tag(&t)) {
            return Some(n);
        }
        current = n.parent_node();
    }
    None
}
