pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod header;
pub mod matrix;
pub mod streaming;
pub mod sweep;
pub mod tree;
pub mod universe;


pub use builder::{build, build_with_config, build_with_ratio};
pub use config::{BuildConfig, ConfigError, MinSupport, SupportRatio, TieBreak};
pub use error::EmptyTree;
pub use export::{export, Edge, Edges, NodeLabel};
pub use header::{HeaderEntry, HeaderTable};
pub use matrix::{transactions_from_matrix, MatrixError};
pub use streaming::{ProcessingError, ProcessingPhase, StreamingBuilder};
pub use sweep::build_sweep;
pub use tree::{FPNode, FPTree, ItemId, NodeId, NodeLinks, TreeStats};
pub use universe::ItemUniverse;
