use std::collections::HashSet;

/// Items the external mining step found frequent. Only these are counted
/// when building the header table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUniverse {
    items: HashSet<String>,
}

impl ItemUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens mined frequent itemsets into the set of items they mention.
    pub fn from_itemsets<I, T, S>(itemsets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        itemsets.into_iter().flatten().collect()
    }

    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        self.items.insert(item.into())
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ItemUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
