//! Frequent-pattern tree construction for market-basket analysis.
//!
//! [`fp::build`] turns transactions plus an externally mined universe of
//! frequent items into an [`fp::FPTree`]; [`fp::export`] walks it as a lazy
//! stream of labelled edges for a renderer.

pub mod fp;

pub use fp::{build, export, EmptyTree, FPTree, HeaderTable, ItemUniverse};

#[cfg(feature = "python")]
mod python {
    use numpy::PyReadonlyArray2;
    use once_cell::sync::Lazy;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::prelude::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::fp::{self, FPTree, ItemUniverse};

    type EdgeTuple = (usize, Option<String>, usize, usize, String, usize);
    // (handle, reason): exactly one side is set.
    type BuildOutcome = (Option<usize>, Option<&'static str>);

    // Built trees, kept alive between calls and addressed by handle.
    static TREES: Lazy<Mutex<HashMap<usize, FPTree>>> = Lazy::new(|| Mutex::new(HashMap::new()));
    static NEXT_HANDLE: Lazy<Mutex<usize>> = Lazy::new(|| Mutex::new(0));

    fn lock_error<E: std::fmt::Display>(e: E) -> PyErr {
        PyRuntimeError::new_err(format!("Lock error: {}", e))
    }

    fn register(tree: FPTree) -> PyResult<usize> {
        let mut handle_lock = NEXT_HANDLE.lock().map_err(lock_error)?;
        let handle = *handle_lock;
        *handle_lock += 1;
        drop(handle_lock);

        TREES.lock().map_err(lock_error)?.insert(handle, tree);
        Ok(handle)
    }

    fn with_tree<R>(handle: usize, f: impl FnOnce(&FPTree) -> R) -> PyResult<R> {
        let trees = TREES.lock().map_err(lock_error)?;
        let tree = trees
            .get(&handle)
            .ok_or_else(|| PyValueError::new_err("Invalid tree handle"))?;
        Ok(f(tree))
    }

    /// Returns `(handle, None)`, or `(None, reason)` when no tree was built,
    /// with reason `"empty_input"` or `"no_frequent_items"`.
    #[pyfunction]
    fn build_tree(
        transactions: Vec<Vec<String>>,
        frequent_itemsets: Vec<Vec<String>>,
        min_support_count: usize,
    ) -> PyResult<BuildOutcome> {
        let universe = ItemUniverse::from_itemsets(frequent_itemsets);
        match fp::build(&transactions, &universe, min_support_count) {
            Ok(tree) => Ok((Some(register(tree)?), None)),
            Err(reason) => Ok((None, Some(reason.code()))),
        }
    }

    #[pyfunction]
    fn build_tree_from_matrix(
        transactions: PyReadonlyArray2<'_, i32>,
        labels: Vec<String>,
        frequent_itemsets: Vec<Vec<String>>,
        min_support_count: usize,
    ) -> PyResult<BuildOutcome> {
        let transactions = fp::transactions_from_matrix(transactions.as_array(), &labels)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        build_tree(transactions, frequent_itemsets, min_support_count)
    }

    #[pyfunction]
    fn export_edges(handle: usize) -> PyResult<Vec<EdgeTuple>> {
        with_tree(handle, |tree| {
            fp::export(tree)
                .map(|edge| {
                    (
                        edge.parent,
                        edge.parent_label.as_item().map(str::to_string),
                        edge.parent_count,
                        edge.child,
                        edge.child_label.to_string(),
                        edge.child_count,
                    )
                })
                .collect()
        })
    }

    #[pyfunction]
    fn header_table(handle: usize) -> PyResult<Vec<(String, usize)>> {
        with_tree(handle, |tree| {
            tree.header_table()
                .iter()
                .map(|entry| (entry.label.clone(), entry.count))
                .collect()
        })
    }

    #[pyfunction]
    fn release_tree(handle: usize) -> PyResult<()> {
        TREES
            .lock()
            .map_err(lock_error)?
            .remove(&handle)
            .ok_or_else(|| PyValueError::new_err("Invalid tree handle"))?;
        Ok(())
    }

    #[pymodule]
    fn fptree(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(build_tree, m)?)?;
        m.add_function(wrap_pyfunction!(build_tree_from_matrix, m)?)?;
        m.add_function(wrap_pyfunction!(export_edges, m)?)?;
        m.add_function(wrap_pyfunction!(header_table, m)?)?;
        m.add_function(wrap_pyfunction!(release_tree, m)?)?;
        Ok(())
    }
}
