use super::tree::{FPNode, FPTree, ItemId, NodeId};

/// Walks one item's node-link chain from the header table head.
pub struct NodeLinks<'a> {
    tree: &'a FPTree,
    next: Option<NodeId>,
}

impl Iterator for NodeLinks<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.nodes[current].node_link;
        Some(current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Nodes excluding the root.
    pub nodes: usize,
    pub leaves: usize,
    /// Longest root-to-leaf path, in edges.
    pub depth: usize,
    pub items: usize,
}

impl FPTree {
    /// Inserts one path of header-ordered items starting at the root.
    pub(crate) fn insert_transaction(&mut self, path: &[ItemId]) {
        let mut current_index = self.root_index;

        for &item in path {
            if let Some(child_index) = self.nodes[current_index].child(item) {
                self.nodes[child_index].count += 1;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, current_index));
                self.nodes[current_index].attach_child(item, new_index);

                if let Some(tail) = self.header.append_link(item, new_index) {
                    self.nodes[tail].node_link = Some(new_index);
                }
                current_index = new_index;
            }
        }
    }

    /// Panics if `item` is not in the header table.
    pub fn node_links(&self, item: ItemId) -> NodeLinks<'_> {
        NodeLinks {
            tree: self,
            next: self.header.entry(item).head,
        }
    }

    /// Sum of counts along the item's chain. Equals the header count.
    /// Panics if `item` is not in the header table.
    pub fn item_support(&self, item: ItemId) -> usize {
        self.node_links(item).map(|idx| self.nodes[idx].count).sum()
    }

    /// Items from the root (exclusive) down to `node` (inclusive).
    pub fn path_to(&self, node: NodeId) -> Vec<ItemId> {
        let mut path = Vec::new();
        let mut current = Some(node);

        while let Some(i) = current {
            if let Some(item) = self.nodes[i].item {
                path.push(item);
            }
            current = self.nodes[i].parent;
        }

        path.reverse();
        path
    }

    /// Conditional pattern base of `item`: for every node in its chain,
    /// the path above it paired with the node's count.
    pub fn prefix_paths(&self, item: ItemId) -> Vec<(Vec<ItemId>, usize)> {
        self.node_links(item)
            .filter_map(|idx| {
                let node = &self.nodes[idx];
                let path = node.parent.map(|p| self.path_to(p)).unwrap_or_default();
                (!path.is_empty()).then_some((path, node.count))
            })
            .collect()
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            items: self.header.len(),
            ..TreeStats::default()
        };
        let mut stack = vec![(self.root_index, 0usize)];

        while let Some((idx, depth)) = stack.pop() {
            let node = &self.nodes[idx];
            if !node.is_root() {
                stats.nodes += 1;
                if node.children.is_empty() {
                    stats.leaves += 1;
                }
            }
            stats.depth = stats.depth.max(depth);
            stack.extend(node.children.iter().map(|&c| (c, depth + 1)));
        }

        stats
    }
}
