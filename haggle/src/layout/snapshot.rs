//! Layout snapshot - every node's proposal, reported size and placement.
//!
//! Built once per `layout` call, used by painters and by tests. Nodes are
//! stored in pre-order, so a node's descendants follow it directly and the
//! root is always index 0.

use serde::Serialize;

use crate::primitives::{Rect, Size};

use super::context::LayoutWarning;
use super::proposal::ProposedSize;

/// One node's layout result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    /// Position in pre-order.
    pub index: usize,
    pub parent: Option<usize>,
    pub depth: u32,
    pub kind: &'static str,
    pub label: Option<String>,
    /// What the parent proposed.
    pub proposal: ProposedSize,
    /// Reported size, positioned in root coordinates.
    pub rect: Rect,
}

impl PlacedNode {
    /// The size this node reported.
    #[inline]
    pub fn size(&self) -> Size {
        self.rect.size()
    }
}

/// The result of a full layout pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LayoutSnapshot {
    nodes: Vec<PlacedNode>,
    warnings: Vec<LayoutWarning>,
}

impl LayoutSnapshot {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, node: PlacedNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        index
    }

    pub(crate) fn set_warnings(&mut self, warnings: Vec<LayoutWarning>) {
        self.warnings = warnings;
    }

    pub fn root(&self) -> Option<&PlacedNode> {
        self.nodes.first()
    }

    pub fn get(&self, index: usize) -> Option<&PlacedNode> {
        self.nodes.get(index)
    }

    /// First node (in pre-order) carrying `label`.
    pub fn find(&self, label: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.label.as_deref() == Some(label))
    }

    /// Direct children of the node at `index`, in declaration order.
    pub fn children_of(&self, index: usize) -> impl Iterator<Item = &PlacedNode> + '_ {
        self.nodes.iter().filter(move |n| n.parent == Some(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedNode> + '_ {
        self.nodes.iter()
    }

    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes that reported more than they were proposed.
    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Serialize for an external painter.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::negotiator::layout;
    use crate::layout::node::LayoutNode;

    fn sample() -> LayoutSnapshot {
        let tree = LayoutNode::vstack(vec![
            LayoutNode::shape().label("top"),
            LayoutNode::hstack(vec![LayoutNode::shape().label("left"), LayoutNode::shape()]).label("row"),
        ])
        .label("root");
        layout(&tree, ProposedSize::fixed(100.0, 100.0)).unwrap()
    }

    #[test]
    fn test_pre_order_with_parents() {
        let snapshot = sample();
        assert_eq!(snapshot.len(), 5);
        let kinds: Vec<&str> = snapshot.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec!["VStack", "IntrinsicLeaf", "HStack", "IntrinsicLeaf", "IntrinsicLeaf"]);
        assert_eq!(snapshot.get(3).unwrap().parent, Some(2));
        assert_eq!(snapshot.get(3).unwrap().depth, 2);
    }

    #[test]
    fn test_find_and_children() {
        let snapshot = sample();
        let row = snapshot.find("row").unwrap();
        assert_eq!(row.rect, Rect::new(0.0, 50.0, 100.0, 50.0));
        assert_eq!(snapshot.children_of(row.index).count(), 2);
        assert_eq!(snapshot.find("left").unwrap().rect, Rect::new(0.0, 50.0, 50.0, 50.0));
        assert!(snapshot.find("missing").is_none());
    }

    #[test]
    fn test_json_export() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"kind\":\"HStack\""));
        assert!(json.contains("\"label\":\"left\""));
    }
}
