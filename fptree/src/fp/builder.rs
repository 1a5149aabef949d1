use super::config::{BuildConfig, MinSupport, TieBreak};
use super::error::EmptyTree;
use super::header::HeaderTable;
use super::tree::FPTree;
use super::universe::ItemUniverse;

/// Builds the FP-tree of `dataset` keeping universe items that occur at
/// least `min_support_count` times. Equal counts are ordered first-seen.
pub fn build<T, S>(
    dataset: &[T],
    universe: &ItemUniverse,
    min_support_count: usize,
) -> Result<FPTree, EmptyTree>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    build_fp_tree(dataset, universe, min_support_count, TieBreak::FirstSeen)
}

pub fn build_with_config<T, S>(
    dataset: &[T],
    universe: &ItemUniverse,
    config: &BuildConfig,
) -> Result<FPTree, EmptyTree>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let min_count = config.min_support.resolve(dataset.len());
    build_fp_tree(dataset, universe, min_count, config.tie_break)
}

/// Convenience for the common "support ratio" call site.
pub fn build_with_ratio<T, S>(
    dataset: &[T],
    universe: &ItemUniverse,
    min_support: MinSupport,
) -> Result<FPTree, EmptyTree>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    build_with_config(dataset, universe, &BuildConfig::new(min_support))
}

fn build_fp_tree<T, S>(
    dataset: &[T],
    universe: &ItemUniverse,
    min_count: usize,
    tie_break: TieBreak,
) -> Result<FPTree, EmptyTree>
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let header = HeaderTable::build(dataset, universe, min_count, tie_break)?;
    let mut fp_tree = FPTree::with_header(header);

    for transaction in dataset {
        let path = fp_tree.header.sorted_path(transaction.as_ref());
        if !path.is_empty() {
            fp_tree.insert_transaction(&path);
        }
    }

    Ok(fp_tree)
}
