use rayon::prelude::*;

use super::builder::build;
use super::error::EmptyTree;
use super::tree::FPTree;
use super::universe::ItemUniverse;

/// Builds one fresh tree per minimum support count, in parallel. Results
/// come back in the order of `thresholds`.
pub fn build_sweep<T, S>(
    dataset: &[T],
    universe: &ItemUniverse,
    thresholds: &[usize],
) -> Vec<Result<FPTree, EmptyTree>>
where
    T: AsRef<[S]> + Sync,
    S: AsRef<str>,
{
    thresholds
        .par_iter()
        .map(|&min_count| build(dataset, universe, min_count))
        .collect()
}
