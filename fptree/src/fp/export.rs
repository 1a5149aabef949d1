//! Depth-first edge stream for renderers.
//!
//! Nodes are identified by their [`NodeId`], the construction-order
//! serial, so two exports of equal trees compare equal and survive
//! serialization.

use serde::Serialize;

use super::tree::{FPTree, NodeId};

/// Display label of a node. The root has a reserved label that no item
/// can collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum NodeLabel<'a> {
    Root,
    Item(&'a str),
}

impl NodeLabel<'_> {
    pub const ROOT_DISPLAY: &'static str = "Null";

    pub fn as_item(&self) -> Option<&str> {
        match self {
            NodeLabel::Root => None,
            NodeLabel::Item(label) => Some(*label),
        }
    }
}

impl std::fmt::Display for NodeLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeLabel::Root => f.write_str(Self::ROOT_DISPLAY),
            NodeLabel::Item(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'a> {
    pub parent: NodeId,
    pub parent_label: NodeLabel<'a>,
    pub parent_count: usize,
    pub child: NodeId,
    pub child_label: &'a str,
    pub child_count: usize,
}

/// Lazy pre-order traversal. Each edge is yielded right before its child
/// subtree, so siblings come after the whole subtree of the previous one.
pub struct Edges<'a> {
    tree: &'a FPTree,
    // (node, index of the next child to visit)
    stack: Vec<(NodeId, usize)>,
}

pub fn export(tree: &FPTree) -> Edges<'_> {
    Edges {
        tree,
        stack: vec![(tree.root(), 0)],
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = Edge<'a>;

    fn next(&mut self) -> Option<Edge<'a>> {
        let tree: &'a FPTree = self.tree;

        loop {
            let (parent, next_child) = self.stack.last_mut()?;
            let parent = *parent;

            let Some(&child) = tree.node(parent).children.get(*next_child) else {
                self.stack.pop();
                continue;
            };
            *next_child += 1;
            self.stack.push((child, 0));

            return Some(Edge {
                parent,
                parent_label: tree.label(parent).map_or(NodeLabel::Root, NodeLabel::Item),
                parent_count: tree.node(parent).count,
                child,
                child_label: tree.label(child).unwrap_or(NodeLabel::ROOT_DISPLAY),
                child_count: tree.node(child).count,
            });
        }
    }
}

impl std::iter::FusedIterator for Edges<'_> {}
