// Tree module - FP-Tree arena and operations

mod tree;
mod tree_ops;

pub use tree::{FPNode, FPTree, ItemId, NodeId};
pub use tree_ops::{NodeLinks, TreeStats};
