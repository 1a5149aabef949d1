use super::config::BuildConfig;
use super::error::EmptyTree;
use super::header::ItemCounter;
use super::tree::FPTree;
use super::universe::ItemUniverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingPhase {
    Counting,
    Building,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    WrongPhase {
        expected: ProcessingPhase,
        actual: ProcessingPhase,
    },
    Empty(EmptyTree),
    /// The build pass saw a different number of transactions than the
    /// count pass.
    TransactionCountMismatch { counted: usize, built: usize },
}

impl std::fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?}, currently in {:?}", expected, actual)
            }
            ProcessingError::Empty(reason) => write!(f, "{}", reason),
            ProcessingError::TransactionCountMismatch { counted, built } => write!(
                f,
                "Counted {} transactions but built from {}",
                counted, built
            ),
        }
    }
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Empty(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<EmptyTree> for ProcessingError {
    fn from(reason: EmptyTree) -> Self {
        ProcessingError::Empty(reason)
    }
}

/// Two-pass builder for datasets that arrive in chunks.
///
/// Feed every chunk to [`count_pass`](Self::count_pass), call
/// [`finalize_counts`](Self::finalize_counts), then feed the same chunks in
/// the same order to [`build_pass`](Self::build_pass) and
/// [`finish`](Self::finish). The result equals a batch build over the
/// concatenated chunks.
#[derive(Debug)]
pub struct StreamingBuilder {
    universe: ItemUniverse,
    config: BuildConfig,
    counter: ItemCounter,
    fp_tree: Option<FPTree>,
    built_transactions: usize,
    phase: ProcessingPhase,
}

impl StreamingBuilder {
    pub fn new(universe: ItemUniverse, config: BuildConfig) -> Self {
        Self {
            universe,
            config,
            counter: ItemCounter::default(),
            fp_tree: None,
            built_transactions: 0,
            phase: ProcessingPhase::Counting,
        }
    }

    pub fn phase(&self) -> ProcessingPhase {
        self.phase
    }

    pub fn num_transactions(&self) -> usize {
        self.counter.num_transactions
    }

    fn expect_phase(&self, expected: ProcessingPhase) -> Result<(), ProcessingError> {
        if self.phase != expected {
            return Err(ProcessingError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    pub fn count_pass<T, S>(&mut self, chunk: &[T]) -> Result<(), ProcessingError>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.expect_phase(ProcessingPhase::Counting)?;
        for transaction in chunk {
            self.counter.add_transaction(transaction.as_ref(), &self.universe);
        }
        Ok(())
    }

    /// Resolves the threshold against the counted transactions and fixes
    /// the header table.
    pub fn finalize_counts(&mut self) -> Result<(), ProcessingError> {
        self.expect_phase(ProcessingPhase::Counting)?;

        if self.counter.is_blank() {
            return Err(EmptyTree::EmptyInput.into());
        }
        if self.universe.is_empty() {
            return Err(EmptyTree::NoFrequentItems.into());
        }

        let min_count = self
            .config
            .min_support
            .resolve(self.counter.num_transactions);
        let header = self.counter.header(min_count, self.config.tie_break)?;

        self.fp_tree = Some(FPTree::with_header(header));
        self.phase = ProcessingPhase::Building;
        Ok(())
    }

    pub fn build_pass<T, S>(&mut self, chunk: &[T]) -> Result<(), ProcessingError>
    where
        T: AsRef<[S]>,
        S: AsRef<str>,
    {
        self.expect_phase(ProcessingPhase::Building)?;
        let Some(fp_tree) = self.fp_tree.as_mut() else {
            return Err(ProcessingError::WrongPhase {
                expected: ProcessingPhase::Building,
                actual: self.phase,
            });
        };

        for transaction in chunk {
            self.built_transactions += 1;
            let path = fp_tree.header.sorted_path(transaction.as_ref());
            if !path.is_empty() {
                fp_tree.insert_transaction(&path);
            }
        }
        Ok(())
    }

    pub fn finish(&mut self) -> Result<FPTree, ProcessingError> {
        self.expect_phase(ProcessingPhase::Building)?;

        let counted = self.counter.num_transactions;
        if self.built_transactions != counted {
            return Err(ProcessingError::TransactionCountMismatch {
                counted,
                built: self.built_transactions,
            });
        }

        self.phase = ProcessingPhase::Finished;
        self.fp_tree.take().ok_or(ProcessingError::WrongPhase {
            expected: ProcessingPhase::Building,
            actual: ProcessingPhase::Finished,
        })
    }
}
