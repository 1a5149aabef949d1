use std::collections::HashMap;

use crate::fp::header::HeaderTable;

/// Position of an item in the header table order.
pub type ItemId = usize;

/// Arena index of a node. Indices are handed out in construction order,
/// so they double as stable serial numbers for export.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FPNode {
    /// `None` marks the root.
    pub item: Option<ItemId>,
    pub count: usize,
    pub parent: Option<NodeId>,
    /// Children in the order they were first created.
    pub children: Vec<NodeId>,
    /// Next node carrying the same item, if any.
    pub node_link: Option<NodeId>,
    child_lookup: HashMap<ItemId, NodeId>,
}

/// A frequent-pattern tree together with the header table it was built from.
///
/// Nodes live in a single arena; parent, children and node links are all
/// plain indices into it. The tree is read-only once construction returns.
#[derive(Debug, Clone)]
pub struct FPTree {
    pub(crate) nodes: Vec<FPNode>,
    pub(crate) header: HeaderTable,
    pub(crate) root_index: NodeId,
}

impl FPNode {
    pub(crate) fn new_root() -> Self {
        Self {
            item: None,
            count: 1,
            parent: None,
            children: Vec::new(),
            node_link: None,
            child_lookup: HashMap::new(),
        }
    }

    pub(crate) fn new_item(item: ItemId, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 1,
            parent: Some(parent),
            children: Vec::new(),
            node_link: None,
            child_lookup: HashMap::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }

    pub fn child(&self, item: ItemId) -> Option<NodeId> {
        self.child_lookup.get(&item).copied()
    }

    pub(crate) fn attach_child(&mut self, item: ItemId, child: NodeId) {
        self.children.push(child);
        self.child_lookup.insert(item, child);
    }
}

impl FPTree {
    pub(crate) fn with_header(header: HeaderTable) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header,
            root_index: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root_index
    }

    /// Panics if `id` does not belong to this tree; see [`get_node`](Self::get_node).
    pub fn node(&self, id: NodeId) -> &FPNode {
        &self.nodes[id]
    }

    pub fn get_node(&self, id: NodeId) -> Option<&FPNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[FPNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is part of every tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn header_table(&self) -> &HeaderTable {
        &self.header
    }

    /// Label of a node's item, `None` for the root. Panics on a foreign `id`.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes[id].item.map(|item| self.header.label(item))
    }

    /// A tree whose root has no children. Valid, but has nothing to draw.
    pub fn is_degenerate(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }
}
