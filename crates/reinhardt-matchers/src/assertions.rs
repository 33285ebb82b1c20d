//! Assertion helpers driving block matchers
//!
//! The `assert_*` functions return a [`ExpectationResult`] so callers can
//! inspect the failure message; the [`expect_block!`](crate::expect_block)
//! macro panics with it instead, for direct use in tests.

use crate::matcher::BlockMatcher;

/// Error type for unmet block expectations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpectationError {
	#[error("{message}")]
	NotMet { message: String },

	#[error("{message}")]
	NegationNotMet { message: String },
}

impl ExpectationError {
	/// Rendered failure message
	pub fn message(&self) -> &str {
		match self {
			ExpectationError::NotMet { message } | ExpectationError::NegationNotMet { message } => {
				message
			}
		}
	}
}

/// Result type for block expectations
pub type ExpectationResult<T> = Result<T, ExpectationError>;

/// Assert that `block` satisfies `matcher`
///
/// # Examples
///
/// ```rust
/// use reinhardt_matchers::assertions::assert_block;
/// use reinhardt_matchers::execute_a_transaction;
/// use reinhardt_query_collector::{QueryKind, RecordingCollector};
///
/// let collector = RecordingCollector::new();
/// let mut matcher = execute_a_transaction(&collector);
///
/// assert_block(&mut matcher, || collector.record(QueryKind::Transaction)).unwrap();
/// ```
pub fn assert_block<M, F>(matcher: &mut M, block: F) -> ExpectationResult<()>
where
	M: BlockMatcher,
	F: FnOnce(),
{
	if !matcher.matches(block) {
		return Err(ExpectationError::NotMet {
			message: matcher.failure_message(),
		});
	}
	Ok(())
}

/// Assert that `block` does not satisfy `matcher`
///
/// # Examples
///
/// ```rust
/// use reinhardt_matchers::assertions::assert_block_not;
/// use reinhardt_matchers::roll_back_a_transaction;
/// use reinhardt_query_collector::{QueryKind, RecordingCollector};
///
/// let collector = RecordingCollector::new();
/// let mut matcher = roll_back_a_transaction(&collector);
///
/// let err = assert_block_not(&mut matcher, || collector.record(QueryKind::Rollback)).unwrap_err();
/// assert_eq!(
///     err.message(),
///     "expected block not to roll back a transaction, but it rolled one back"
/// );
/// ```
pub fn assert_block_not<M, F>(matcher: &mut M, block: F) -> ExpectationResult<()>
where
	M: BlockMatcher,
	F: FnOnce(),
{
	if matcher.matches(block) {
		return Err(ExpectationError::NegationNotMet {
			message: matcher.failure_message_when_negated(),
		});
	}
	Ok(())
}

/// Evaluate a block against a matcher and panic with its failure message
///
/// ```rust
/// use reinhardt_matchers::{expect_block, commit_a_transaction};
/// use reinhardt_query_collector::{QueryKind, RecordingCollector};
///
/// let collector = RecordingCollector::new();
///
/// expect_block!(|| collector.record(QueryKind::Commit), to commit_a_transaction(&collector).once());
/// expect_block!(|| {}, not_to commit_a_transaction(&collector).twice());
/// ```
#[macro_export]
macro_rules! expect_block {
	($block:expr, to $matcher:expr) => {{
		let mut matcher = $matcher;
		if let Err(err) = $crate::assertions::assert_block(&mut matcher, $block) {
			panic!("{}", err);
		}
	}};
	($block:expr, not_to $matcher:expr) => {{
		let mut matcher = $matcher;
		if let Err(err) = $crate::assertions::assert_block_not(&mut matcher, $block) {
			panic!("{}", err);
		}
	}};
}
