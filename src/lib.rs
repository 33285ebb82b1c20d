//! # Reinhardt Expectations
//!
//! Block matchers for asserting that test code started, rolled back or
//! committed database transactions.
//!
//! This facade re-exports the query collector vocabulary and the matchers
//! so tests need a single dependency.
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_expectations::prelude::*;
//! use std::sync::Arc;
//!
//! let collector = Arc::new(RecordingCollector::new());
//!
//! // Instrumentation reports queries to the collector
//! let save = {
//!     let collector = Arc::clone(&collector);
//!     move || {
//!         collector.record(QueryKind::Transaction);
//!         collector.record(QueryKind::Commit);
//!     }
//! };
//!
//! let mut matcher = commit_a_transaction(Arc::clone(&collector)).once();
//! assert_block(&mut matcher, save).unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `settings-files` - load matcher settings from `.toml` / `.json` files
//!
//! ## Crates
//!
//! - [`collector`]: `reinhardt-query-collector`, query kinds and collectors
//! - [`matchers`]: `reinhardt-matchers`, the transaction matcher and assertions

pub use reinhardt_matchers as matchers;
pub use reinhardt_query_collector as collector;

pub use reinhardt_matchers::expect_block;
pub use reinhardt_matchers::{
	BlockMatcher, CountConstraint, ExpectationError, ExpectationResult, MatcherSettings,
	Quantifier, SettingsError, TransactionMatcher, assert_block, assert_block_not,
	commit_a_transaction, execute_a_transaction, roll_back_a_transaction,
};
pub use reinhardt_query_collector::{
	QueryCollector, QueryCounts, QueryKind, RecordingCollector, UnknownQueryKind,
};

/// Everything a test module usually needs
pub mod prelude {
	pub use crate::expect_block;
	pub use crate::{
		BlockMatcher, MatcherSettings, Quantifier, QueryCollector, QueryKind, RecordingCollector,
		TransactionMatcher, assert_block, assert_block_not, commit_a_transaction,
		execute_a_transaction, roll_back_a_transaction,
	};
}
