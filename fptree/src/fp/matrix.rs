use ndarray::ArrayView2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    LabelCountMismatch { columns: usize, labels: usize },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::LabelCountMismatch { columns, labels } => write!(
                f,
                "Matrix has {} item columns but {} labels were given",
                columns, labels
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Convert a one-hot transaction matrix (rows are transactions, columns
/// are items) into labelled transactions. Any non-zero cell is a hit.
pub fn transactions_from_matrix<S: AsRef<str>>(
    transactions: ArrayView2<i32>,
    labels: &[S],
) -> Result<Vec<Vec<String>>, MatrixError> {
    let num_items = transactions.shape()[1];
    if labels.len() != num_items {
        return Err(MatrixError::LabelCountMismatch {
            columns: num_items,
            labels: labels.len(),
        });
    }

    Ok(transactions
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .zip(labels)
                .filter(|&(&cell, _)| cell != 0)
                .map(|(_, label)| label.as_ref().to_string())
                .collect()
        })
        .collect())
}
