//! # Reinhardt Matchers
//!
//! Block matchers asserting that test code ran transaction-related queries.
//!
//! ## Overview
//!
//! A matcher runs a block, asks a [`QueryCollector`] how many queries of one
//! [`QueryKind`] were observed, and compares that count against a
//! [`Quantifier`]. When the expectation fails it renders a readable message
//! in either direction:
//!
//! - `expected block to commit a transaction twice, but it committed 3 times`
//! - `expected block not to roll back a transaction, but it rolled back 3 transactions`
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_matchers::assertions::{assert_block, assert_block_not};
//! use reinhardt_matchers::{commit_a_transaction, roll_back_a_transaction};
//! use reinhardt_query_collector::{QueryKind, RecordingCollector};
//!
//! let collector = RecordingCollector::new();
//!
//! let mut commits = commit_a_transaction(&collector).at_least(1).times();
//! assert_block(&mut commits, || {
//!     collector.record(QueryKind::Transaction);
//!     collector.record(QueryKind::Commit);
//! })
//! .unwrap();
//!
//! let mut rollbacks = roll_back_a_transaction(&collector);
//! assert_block_not(&mut rollbacks, || {}).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`transaction`]: [`TransactionMatcher`] and its constructors
//! - [`quantifier`]: expected-count policies
//! - [`grammar`]: phrase tables and count wording
//! - [`assertions`]: `assert_block` helpers and the [`expect_block!`] macro
//! - [`settings`]: [`MatcherSettings`] loading
//!
//! ## Feature Flags
//!
//! - **`settings-files`** (default): load settings from `.toml` / `.json` files

pub mod assertions;
pub mod grammar;
pub mod matcher;
pub mod quantifier;
pub mod settings;
pub mod transaction;

pub use assertions::{ExpectationError, ExpectationResult, assert_block, assert_block_not};
pub use matcher::BlockMatcher;
pub use quantifier::Quantifier;
pub use reinhardt_query_collector::{QueryCollector, QueryKind};
pub use settings::{MatcherSettings, SettingsError, SettingsResult};
pub use transaction::{
	CountConstraint, TransactionMatcher, commit_a_transaction, execute_a_transaction,
	roll_back_a_transaction,
};
