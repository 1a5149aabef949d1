/// How items with equal counts are ordered in the header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Order of first occurrence while scanning the dataset.
    #[default]
    FirstSeen,
    /// Label order.
    Lexicographic,
}

/// A support ratio known to lie in `[0, 1]`. Only constructible through
/// [`SupportRatio::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SupportRatio(f64);

impl SupportRatio {
    pub fn new(ratio: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::InvalidRatio(ratio));
        }
        Ok(SupportRatio(ratio))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SupportRatio {
    type Error = ConfigError;

    fn try_from(ratio: f64) -> Result<Self, ConfigError> {
        SupportRatio::new(ratio)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// Absolute number of occurrences.
    Count(usize),
    /// Fraction of the number of transactions.
    Ratio(SupportRatio),
}

impl MinSupport {
    pub fn ratio(ratio: f64) -> Result<Self, ConfigError> {
        SupportRatio::new(ratio).map(MinSupport::Ratio)
    }

    /// Absolute threshold for a dataset of `num_transactions`. Ratios are
    /// floored.
    pub fn resolve(&self, num_transactions: usize) -> usize {
        match *self {
            MinSupport::Count(count) => count,
            MinSupport::Ratio(ratio) => (ratio.get() * num_transactions as f64).floor() as usize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    pub min_support: MinSupport,
    pub tie_break: TieBreak,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Count(1),
            tie_break: TieBreak::FirstSeen,
        }
    }
}

impl BuildConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_min_support(mut self, min_support: MinSupport) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidRatio(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidRatio(ratio) => {
                write!(f, "Minimum support ratio must be within [0, 1], got {}", ratio)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
