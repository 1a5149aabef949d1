use std::collections::HashMap;

use super::config::TieBreak;
use super::error::EmptyTree;
use super::tree::{ItemId, NodeId};
use super::universe::ItemUniverse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub label: String,
    /// Occurrences of the item across the whole dataset.
    pub count: usize,
    /// First node of the item's node-link chain.
    pub head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
}

/// Retained items in global order (count descending, then tie-break).
///
/// An item's position in this table is its [`ItemId`], so sorting a
/// transaction by `ItemId` puts it in tree insertion order.
#[derive(Debug, Clone, Default)]
pub struct HeaderTable {
    entries: Vec<HeaderEntry>,
    index: HashMap<String, ItemId>,
    min_support_count: usize,
}

impl HeaderTable {
    /// Counts universe items over `dataset` and keeps those reaching
    /// `min_support_count`.
    pub fn build<T, S>(
        dataset: &[T],
        universe: &ItemUniverse,
        min_support_count: usize,
        tie_break: TieBreak,
    ) -> Result<Self, EmptyTree>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut counter = ItemCounter::default();
        for transaction in dataset {
            counter.add_transaction(transaction.as_ref(), universe);
        }

        if counter.is_blank() {
            return Err(EmptyTree::EmptyInput);
        }
        if universe.is_empty() {
            return Err(EmptyTree::NoFrequentItems);
        }
        counter.header(min_support_count, tie_break)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn min_support_count(&self) -> usize {
        self.min_support_count
    }

    pub fn id_of(&self, label: &str) -> Option<ItemId> {
        self.index.get(label).copied()
    }

    pub fn get(&self, label: &str) -> Option<&HeaderEntry> {
        self.id_of(label).map(|id| &self.entries[id])
    }

    /// Panics if `item` is not an id of this table; see [`get_entry`](Self::get_entry).
    pub fn entry(&self, item: ItemId) -> &HeaderEntry {
        &self.entries[item]
    }

    pub fn get_entry(&self, item: ItemId) -> Option<&HeaderEntry> {
        self.entries.get(item)
    }

    /// Panics if `item` is not an id of this table.
    pub fn label(&self, item: ItemId) -> &str {
        &self.entries[item].label
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderEntry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Maps a raw transaction to its insertion path: retained items only,
    /// in header order. Duplicates are kept.
    pub fn sorted_path<S: AsRef<str>>(&self, transaction: &[S]) -> Vec<ItemId> {
        let mut path: Vec<ItemId> = transaction
            .iter()
            .filter_map(|item| self.id_of(item.as_ref()))
            .collect();
        path.sort_unstable();
        path
    }

    /// Appends `node` to the end of `item`'s node-link chain and returns
    /// the previous tail, whose `node_link` the caller must point at `node`.
    pub(crate) fn append_link(&mut self, item: ItemId, node: NodeId) -> Option<NodeId> {
        let entry = &mut self.entries[item];
        let previous = entry.tail.replace(node);
        if entry.head.is_none() {
            entry.head = Some(node);
        }
        previous
    }
}

/// Occurrence counts in first-seen order. Shared by the batch builder
/// and the streaming count pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemCounter {
    counts: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
    pub(crate) num_transactions: usize,
    non_empty_transactions: usize,
}

impl ItemCounter {
    pub(crate) fn add_transaction<S: AsRef<str>>(&mut self, transaction: &[S], universe: &ItemUniverse) {
        self.num_transactions += 1;
        if !transaction.is_empty() {
            self.non_empty_transactions += 1;
        }
        for item in transaction {
            let item = item.as_ref();
            if !universe.contains(item) {
                continue;
            }
            match self.positions.get(item) {
                Some(&pos) => self.counts[pos].1 += 1,
                None => {
                    self.positions.insert(item.to_string(), self.counts.len());
                    self.counts.push((item.to_string(), 1));
                }
            }
        }
    }

    /// No transactions, or only empty ones.
    pub(crate) fn is_blank(&self) -> bool {
        self.non_empty_transactions == 0
    }

    /// Leaves the counts in place, so a failed threshold can be retried.
    pub(crate) fn header(
        &self,
        min_support_count: usize,
        tie_break: TieBreak,
    ) -> Result<HeaderTable, EmptyTree> {
        let mut retained: Vec<(String, usize)> = self
            .counts
            .iter()
            .filter(|&&(_, count)| count >= min_support_count)
            .cloned()
            .collect();

        if retained.is_empty() {
            return Err(EmptyTree::NoFrequentItems);
        }

        // Stable sorts keep first-seen order among equal counts.
        match tie_break {
            TieBreak::FirstSeen => retained.sort_by(|a, b| b.1.cmp(&a.1)),
            TieBreak::Lexicographic => {
                retained.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            }
        }

        let index = retained
            .iter()
            .enumerate()
            .map(|(id, (label, _))| (label.clone(), id))
            .collect();
        let entries = retained
            .into_iter()
            .map(|(label, count)| HeaderEntry {
                label,
                count,
                head: None,
                tail: None,
            })
            .collect();

        Ok(HeaderTable {
            entries,
            index,
            min_support_count,
        })
    }
}
