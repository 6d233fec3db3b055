//! Hidden-element checks against an externally computed hidden set.

use crate::dom::{DomNode, NodeSet};

/// Answers "is this node hidden?" from a set of hidden element ids.
///
/// Hidden status propagates to every descendant. The check never evaluates
/// style itself; that is the visibility oracle's job.
pub struct VisibilityCheck<'a, Id> {
    hidden: &'a NodeSet<Id>,
}

impl<'a, Id> VisibilityCheck<'a, Id>
where
    Id: Copy + Eq + std::hash::Hash,
{
    #[must_use]
    pub fn new(hidden: &'a NodeSet<Id>) -> Self {
        Self { hidden }
    }

    /// Node itself is in the hidden set.
    ///
    /// Only sufficient during a walk that already pruned hidden ancestors.
    #[inline]
    pub fn is_self_hidden<N: DomNode<Id = Id>>(&self, node: &N) -> bool {
        self.hidden.contains(&node.node_id())
    }

    /// Node or any ancestor up to and including `root` is hidden.
    pub fn is_hidden<N: DomNode<Id = Id>>(&self, node: &N, root: &N) -> bool {
        if self.hidden.is_empty() {
            return false;
        }

        let root_id = root.node_id();
        let mut current = Some(node.clone());
        while let Some(n) = current {
            if self.hidden.contains(&n.node_id()) {
                return true;
            }
            if n.node_id() == root_id {
                break;
            }
            current = n.parent_node();
        }
        false
    }
}
