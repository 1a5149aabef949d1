/// Why no tree was built. Not a failure: callers should treat this as
/// "no frequent pattern" and skip rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyTree {
    /// The dataset has no transactions, or none with any item.
    EmptyInput,
    /// The universe is empty, or no item reaches the minimum support count.
    NoFrequentItems,
}

impl EmptyTree {
    /// Stable machine-readable code, for callers outside Rust.
    pub fn code(&self) -> &'static str {
        match self {
            EmptyTree::EmptyInput => "empty_input",
            EmptyTree::NoFrequentItems => "no_frequent_items",
        }
    }
}

impl std::fmt::Display for EmptyTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyTree::EmptyInput => write!(f, "No transactions to build a tree from"),
            EmptyTree::NoFrequentItems => {
                write!(f, "No frequent items meet the minimum support count")
            }
        }
    }
}

impl std::error::Error for EmptyTree {}
