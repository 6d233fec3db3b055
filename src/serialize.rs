//! Serialization of the finder's node list.
//!
//! The node list is flat, so HTML output rebuilds the smallest tree that
//! connects the selected nodes: every selected node plus its ancestors below
//! the traversal root.

use crate::dom::{self, DomNode, NodeSet, StrTendril};
use crate::patterns::collapse_whitespace;

/// Attributes carried over to the output markup.
const KEPT_ATTRIBUTES: &[&str] = &["src", "alt", "href", "colspan", "rowspan", "dir", "title"];

fn escape_html(input: &str, quote: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quote => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the selected nodes as HTML, keeping their nesting below `root`.
pub fn to_html<N: DomNode>(nodes: &[N], root: &N) -> String {
    let selected: NodeSet<N::Id> = nodes.iter().map(DomNode::node_id).collect();
    let root_id = root.node_id();

    let mut keep = selected.clone();
    for node in nodes {
        let mut current = node.parent_node();
        while let Some(parent) = current {
            if parent.node_id() == root_id || !keep.insert(parent.node_id()) {
                break;
            }
            current = parent.parent_node();
        }
    }

    let mut stack: Vec<Frame<N>> = if selected.contains(&root_id) {
        vec![Frame::Enter(root.clone())]
    } else {
        root.child_nodes().into_iter().rev().map(Frame::Enter).collect()
    };

    let mut out = String::new();
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(node) => {
                if keep.contains(&node.node_id()) {
                    open_node(&node, &selected, &mut stack, &mut out);
                }
            }
            Frame::Exit(tag) => {
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
        }
    }
    out
}

/// Pending work for the HTML writer; a close tag is queued below the
/// children of the element it belongs to.
enum Frame<N> {
    Enter(N),
    Exit(StrTendril),
}

fn open_node<N: DomNode>(node: &N, selected: &NodeSet<N::Id>, stack: &mut Vec<Frame<N>>, out: &mut String) {
    if let Some(text) = node.text_value() {
        if selected.contains(&node.node_id()) {
            out.push_str(&escape_html(&text, false));
        }
        return;
    }

    let Some(tag) = node.tag_name() else {
        return;
    };

    out.push('<');
    out.push_str(&tag);
    for name in KEPT_ATTRIBUTES {
        if let Some(value) = node.attribute(name) {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(&value, true));
            out.push('"');
        }
    }
    out.push('>');

    if dom::is_void_tag(&tag) {
        return;
    }

    stack.push(Frame::Exit(tag));
    stack.extend(node.child_nodes().into_iter().rev().map(Frame::Enter));
}

/// Render the selected text nodes as plain text.
///
/// Text from different blocks is separated by a newline, text within the
/// same block by a space.
pub fn to_text<N: DomNode>(nodes: &[N]) -> String {
    let mut out = String::new();
    let mut last_block: Option<Option<N::Id>> = None;

    for node in nodes {
        let Some(raw) = node.text_value() else {
            continue;
        };
        let text = collapse_whitespace(&raw);
        if text.is_empty() {
            continue;
        }

        let block = dom::block_ancestor(node).map(|b| b.node_id());
        match last_block {
            Some(prev) if prev == block => out.push(' '),
            Some(_) => out.push('\n'),
            None => {}
        }
        out.push_str(&text);
        last_block = Some(block);
    }

    out
}
