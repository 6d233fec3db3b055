//! Data-table versus layout-table heuristic.

use super::TableClassifier;
use crate::dom::NodeRef;

/// Outcome of table classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    /// Genuine tabular data; kept wholesale by the finder.
    Data,
    /// Visual arrangement only; transparent to the finder.
    Layout,
}

/// Tags whose presence marks a table as data.
const DATA_MARKERS: &[&str] = &["caption", "thead", "tfoot", "colgroup", "col", "th"];

/// Row count at which a table counts as data on size alone.
const MIN_DATA_ROWS: usize = 20;

/// Classifies tables from their own markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralTableClassifier;

impl StructuralTableClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn tag_is(node: &NodeRef, name: &str) -> bool {
    node.is_element() && node.node_name().is_some_and(|t| t.eq_ignore_ascii_case(name))
}

impl TableClassifier for StructuralTableClassifier {
    fn classify_table(&self, table: NodeRef<'_>) -> TableType {
        if table
            .attr("role")
            .is_some_and(|r| r.trim().eq_ignore_ascii_case("presentation"))
            || table.attr("datatable").is_some_and(|d| d.trim() == "0")
        {
            return TableType::Layout;
        }

        let descendants: Vec<NodeRef> = table.descendants().into_iter().collect();

        if descendants.iter().any(|n| tag_is(n, "table")) {
            return TableType::Layout;
        }

        if table.has_attr("summary")
            || descendants
                .iter()
                .any(|n| DATA_MARKERS.iter().any(|m| tag_is(n, m)))
        {
            return TableType::Data;
        }

        let rows: Vec<&NodeRef> = descendants.iter().filter(|n| tag_is(n, "tr")).collect();
        let max_cols = rows
            .iter()
            .map(|row| {
                row.children()
                    .iter()
                    .filter(|c| tag_is(c, "td") || tag_is(c, "th"))
                    .count()
            })
            .max()
            .unwrap_or(0);

        if rows.len() <= 1 || max_cols <= 1 {
            return TableType::Layout;
        }

        if rows.len() >= MIN_DATA_ROWS {
            return TableType::Data;
        }

        TableType::Layout
    }
}
