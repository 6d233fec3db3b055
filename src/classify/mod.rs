//! Producers of the finder's inputs.
//!
//! The finder consumes three node sets: content text nodes, hidden elements
//! and data tables. Each comes from a classifier behind a trait so a caller
//! with better signals (a live renderer's computed style, a trained model)
//! can swap it in. The defaults here work from markup alone.

pub mod content;
pub mod tables;
pub mod visibility;

pub use content::BlockDensityClassifier;
pub use tables::{StructuralTableClassifier, TableType};
pub use visibility::InlineStyleVisibility;

use crate::dom::{NodeId, NodeRef, NodeSet};

/// Marks text nodes that belong to the main content.
pub trait ContentClassifier {
    /// Content text nodes under `root`, in document order.
    ///
    /// Nodes inside `hidden` subtrees are never returned.
    fn classify<'a>(&self, root: NodeRef<'a>, hidden: &NodeSet<NodeId>) -> Vec<NodeRef<'a>>;
}

/// Decides which elements the reader cannot see.
pub trait VisibilityOracle {
    fn hidden_elements(&self, root: NodeRef<'_>) -> NodeSet<NodeId>;
}

/// Separates tabular data from layout tables.
pub trait TableClassifier {
    fn classify_table(&self, table: NodeRef<'_>) -> TableType;

    /// Every `<table>` under `root` judged to hold data.
    fn data_tables(&self, root: NodeRef<'_>) -> NodeSet<NodeId> {
        root.descendants()
            .into_iter()
            .filter(|n| n.is_element() && n.node_name().is_some_and(|t| t.eq_ignore_ascii_case("table")))
            .filter(|t| self.classify_table(*t) == TableType::Data)
            .map(|t| t.id)
            .collect()
    }
}
