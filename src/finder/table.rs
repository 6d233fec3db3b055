//! Wholesale expansion of recognized data tables.

use super::visibility::VisibilityCheck;
use crate::dom::DomNode;

/// Flattens a data table into its visible nodes in document order.
///
/// No content checks happen inside: once a table counts as data, every
/// visible node below it is kept, nested tables included.
pub struct DataTableExpander<'a, 'v, Id> {
    visibility: &'a VisibilityCheck<'v, Id>,
}

impl<'a, 'v, Id> DataTableExpander<'a, 'v, Id>
where
    Id: Copy + Eq + std::hash::Hash,
{
    #[must_use]
    pub fn new(visibility: &'a VisibilityCheck<'v, Id>) -> Self {
        Self { visibility }
    }

    /// Append the table and its visible descendants to `out`.
    ///
    /// Returns the number of nodes appended.
    pub fn expand<N: DomNode<Id = Id>>(&self, table: &N, out: &mut Vec<N>) -> usize {
        let start = out.len();
        let mut stack = vec![table.clone()];

        while let Some(node) = stack.pop() {
            if self.visibility.is_self_hidden(&node) {
                continue;
            }
            let children = node.child_nodes();
            out.push(node);
            stack.extend(children.into_iter().rev());
        }

        out.len() - start
    }

    #[cfg(test)]
    fn expand_to_vec<N: DomNode<Id = Id>>(&self, table: &N) -> Vec<N> {
        let mut out = Vec::new();
        self.expand(table, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{self, node_set, NodeRef, NodeSet};

    fn names(nodes: &[NodeRef]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| match n.tag_name() {
                Some(tag) => tag.to_string(),
                None => format!("#{}", n.text_value().unwrap_or_default()),
            })
            .collect()
    }

    #[test]
    fn test_expands_whole_table_in_order() {
        let doc = dom::parse(
            "<table><caption>Cap</caption><tbody><tr><td>a</td><td><img></td></tr></tbody></table>",
        );
        let table = dom::select_first(&doc, "table").expect("table");
        let hidden = NodeSet::new();
        let check = VisibilityCheck::new(&hidden);
        let nodes = DataTableExpander::new(&check).expand_to_vec(&table);

        assert_eq!(
            names(&nodes),
            vec!["table", "caption", "#Cap", "tbody", "tr", "td", "#a", "td", "img"]
        );
    }

    #[test]
    fn test_prunes_hidden_cells() {
        let doc = dom::parse(
            r#"<table><tbody><tr><td id="h">a</td><td>b</td></tr></tbody></table>"#,
        );
        let table = dom::select_first(&doc, "table").expect("table");
        let td = dom::select_first(&doc, "#h").expect("td");
        let hidden = node_set([td]);
        let check = VisibilityCheck::new(&hidden);
        let mut out = Vec::new();
        let added = DataTableExpander::new(&check).expand(&table, &mut out);

        assert_eq!(added, 5);
        assert_eq!(names(&out), vec!["table", "tbody", "tr", "td", "#b"]);
    }

    #[test]
    fn test_nested_table_is_swept_up() {
        let doc = dom::parse(
            "<table id=\"outer\"><tbody><tr><td><table><tbody><tr><td>in</td></tr></tbody></table></td></tr></tbody></table>",
        );
        let table = dom::select_first(&doc, "#outer").expect("table");
        let hidden = NodeSet::new();
        let check = VisibilityCheck::new(&hidden);
        let nodes = DataTableExpander::new(&check).expand_to_vec(&table);

        assert_eq!(nodes.iter().filter(|n| n.is_tag("table")).count(), 2);
        assert_eq!(names(&nodes).last().map(String::as_str), Some("#in"));
    }

    #[test]
    fn test_hidden_table_yields_nothing() {
        let doc = dom::parse("<table><tbody><tr><td>a</td></tr></tbody></table>");
        let table = dom::select_first(&doc, "table").expect("table");
        let hidden = node_set([table]);
        let check = VisibilityCheck::new(&hidden);

        assert!(DataTableExpander::new(&check).expand_to_vec(&table).is_empty());
    }
}
