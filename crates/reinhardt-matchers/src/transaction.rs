//! Transaction block matcher
//!
//! [`TransactionMatcher`] asserts that a block started, rolled back or
//! committed transactions, optionally a given number of times.
//!
//! ```
//! use reinhardt_matchers::{BlockMatcher, commit_a_transaction};
//! use reinhardt_query_collector::{QueryKind, RecordingCollector};
//! use std::sync::Arc;
//!
//! let collector = Arc::new(RecordingCollector::new());
//! let mut matcher = commit_a_transaction(Arc::clone(&collector)).twice();
//!
//! let matched = matcher.matches(|| {
//!     collector.record(QueryKind::Commit);
//!     collector.record(QueryKind::Commit);
//!     collector.record(QueryKind::Commit);
//! });
//!
//! assert!(!matched);
//! assert_eq!(
//!     matcher.failure_message(),
//!     "expected block to commit a transaction twice, but it committed 3 times"
//! );
//! ```

use crate::grammar::{count_phrase, noun_phrase, phrases, times_phrase};
use crate::matcher::BlockMatcher;
use crate::quantifier::Quantifier;
use crate::settings::MatcherSettings;
use reinhardt_query_collector::{QueryCollector, QueryKind};

/// Matcher over the number of transaction-related queries a block ran
#[derive(Debug)]
pub struct TransactionMatcher<C> {
	kind: QueryKind,
	quantifier: Quantifier,
	collector: C,
	actual: Option<usize>,
	settings: MatcherSettings,
}

/// Pending count set by [`TransactionMatcher::exactly`],
/// [`TransactionMatcher::at_least`] or [`TransactionMatcher::at_most`]
///
/// Finish it with [`times`](Self::times).
#[derive(Debug)]
#[must_use = "call `.times()` to apply the count to the matcher"]
pub struct CountConstraint<C> {
	matcher: TransactionMatcher<C>,
	quantifier: Quantifier,
}

impl<C> CountConstraint<C> {
	/// Apply the pending count and return the matcher
	pub fn times(self) -> TransactionMatcher<C> {
		self.matcher.with_quantifier(self.quantifier)
	}
}

/// Matcher expecting the block to start a transaction
pub fn execute_a_transaction<C: QueryCollector>(collector: C) -> TransactionMatcher<C> {
	TransactionMatcher::new(QueryKind::Transaction, collector)
}

/// Matcher expecting the block to roll back a transaction
pub fn roll_back_a_transaction<C: QueryCollector>(collector: C) -> TransactionMatcher<C> {
	TransactionMatcher::new(QueryKind::Rollback, collector)
}

/// Matcher expecting the block to commit a transaction
pub fn commit_a_transaction<C: QueryCollector>(collector: C) -> TransactionMatcher<C> {
	TransactionMatcher::new(QueryKind::Commit, collector)
}

impl<C> TransactionMatcher<C> {
	/// Create a matcher for `kind` with the [`Quantifier::Any`] quantifier
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_matchers::{Quantifier, TransactionMatcher};
	/// use reinhardt_query_collector::{QueryKind, RecordingCollector};
	///
	/// let matcher = TransactionMatcher::new(QueryKind::Rollback, RecordingCollector::new());
	/// assert_eq!(matcher.kind(), QueryKind::Rollback);
	/// assert_eq!(matcher.quantifier(), Quantifier::Any);
	/// assert_eq!(matcher.actual_count(), None);
	/// ```
	pub fn new(kind: QueryKind, collector: C) -> Self {
		Self {
			kind,
			quantifier: Quantifier::Any,
			collector,
			actual: None,
			settings: MatcherSettings::default(),
		}
	}

	/// Apply settings (subject word, evaluation logging)
	pub fn with_settings(mut self, settings: MatcherSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Set the quantifier directly
	pub fn with_quantifier(mut self, quantifier: Quantifier) -> Self {
		self.quantifier = quantifier;
		self
	}

	/// Expect exactly `n` occurrences
	pub fn times(self, n: usize) -> Self {
		self.with_quantifier(Quantifier::Exactly(n))
	}

	/// Expect exactly one occurrence
	pub fn once(self) -> Self {
		self.times(1)
	}

	/// Expect exactly two occurrences
	pub fn twice(self) -> Self {
		self.times(2)
	}

	/// Expect exactly three occurrences
	pub fn thrice(self) -> Self {
		self.times(3)
	}

	/// Expect exactly `n` occurrences: `exactly(n).times()`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_matchers::{Quantifier, commit_a_transaction};
	/// use reinhardt_query_collector::RecordingCollector;
	///
	/// let matcher = commit_a_transaction(RecordingCollector::new()).exactly(3).times();
	/// assert_eq!(matcher.quantifier(), Quantifier::Exactly(3));
	/// ```
	pub fn exactly(self, n: usize) -> CountConstraint<C> {
		CountConstraint {
			matcher: self,
			quantifier: Quantifier::Exactly(n),
		}
	}

	/// Expect `n` or more occurrences: `at_least(n).times()`
	pub fn at_least(self, n: usize) -> CountConstraint<C> {
		CountConstraint {
			matcher: self,
			quantifier: Quantifier::AtLeast(n),
		}
	}

	/// Expect `n` or fewer occurrences: `at_most(n).times()`
	pub fn at_most(self, n: usize) -> CountConstraint<C> {
		CountConstraint {
			matcher: self,
			quantifier: Quantifier::AtMost(n),
		}
	}

	pub fn kind(&self) -> QueryKind {
		self.kind
	}

	pub fn quantifier(&self) -> Quantifier {
		self.quantifier
	}

	/// Count stored by the last evaluation
	pub fn actual_count(&self) -> Option<usize> {
		self.actual
	}

	pub fn collector(&self) -> &C {
		&self.collector
	}
}

impl<C: QueryCollector> TransactionMatcher<C> {
	// Before the first evaluation messages read the collector without storing
	fn observed(&self) -> usize {
		self.actual
			.unwrap_or_else(|| self.collector.queries_of_type(self.kind))
	}
}

impl<C: QueryCollector> BlockMatcher for TransactionMatcher<C> {
	fn matches<F: FnOnce()>(&mut self, block: F) -> bool {
		block();

		let count = self.collector.queries_of_type(self.kind);
		self.actual = Some(count);
		let matched = self.quantifier.is_satisfied_by(count);

		if self.settings.log_evaluations {
			tracing::debug!(
				kind = %self.kind,
				quantifier = ?self.quantifier,
				expected = ?self.quantifier.expected(),
				observed = count,
				matched,
				"evaluated transaction matcher"
			);
		}

		matched
	}

	fn failure_message(&self) -> String {
		let p = phrases(self.kind);
		let subject = &self.settings.subject;

		match self.quantifier {
			Quantifier::Any => {
				format!("expected {} to {}, but it didn't do so", subject, p.infinitive)
			}
			Quantifier::Exactly(n) => format!(
				"expected {} to {} {}, but it {} {}",
				subject,
				p.infinitive,
				count_phrase(n),
				p.past,
				count_phrase(self.observed())
			),
			Quantifier::AtLeast(n) => format!(
				"expected {} to {} at least {}, but it {} {}",
				subject,
				p.infinitive,
				times_phrase(n),
				p.past,
				times_phrase(self.observed())
			),
			Quantifier::AtMost(n) => format!(
				"expected {} to {} at most {}, but it {} {}",
				subject,
				p.infinitive,
				times_phrase(n),
				p.past,
				times_phrase(self.observed())
			),
		}
	}

	fn failure_message_when_negated(&self) -> String {
		let p = phrases(self.kind);
		let subject = &self.settings.subject;

		match self.quantifier {
			Quantifier::Any => match self.observed() {
				1 => format!(
					"expected {} not to {}, but it {}",
					subject, p.infinitive, p.past_once
				),
				count => format!(
					"expected {} not to {}, but it {} {}",
					subject,
					p.infinitive,
					p.past,
					noun_phrase(p, count)
				),
			},
			Quantifier::Exactly(n) => format!(
				"expected {} not to {} {}, but it did do so",
				subject,
				p.verb,
				times_phrase(n)
			),
			Quantifier::AtLeast(n) => format!(
				"expected {} not to {} {} or more times, but it {} {}",
				subject,
				p.verb,
				n,
				p.past,
				times_phrase(self.observed())
			),
			Quantifier::AtMost(n) => format!(
				"expected {} not to {} {} or fewer times, but it {} {}",
				subject,
				p.verb,
				n,
				p.past,
				times_phrase(self.observed())
			),
		}
	}

	fn description(&self) -> String {
		let p = phrases(self.kind);

		match self.quantifier {
			Quantifier::Any => p.infinitive.to_string(),
			Quantifier::Exactly(n) => format!("{} {}", p.infinitive, count_phrase(n)),
			Quantifier::AtLeast(n) => format!("{} at least {}", p.infinitive, times_phrase(n)),
			Quantifier::AtMost(n) => format!("{} at most {}", p.infinitive, times_phrase(n)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_query_collector::RecordingCollector;
	use rstest::*;
	use std::cell::Cell;

	/// Collector returning a fixed count and counting how often it was asked
	struct FixedCollector {
		count: usize,
		calls: Cell<usize>,
	}

	impl FixedCollector {
		fn new(count: usize) -> Self {
			Self {
				count,
				calls: Cell::new(0),
			}
		}
	}

	impl QueryCollector for FixedCollector {
		fn queries_of_type(&self, _kind: QueryKind) -> usize {
			self.calls.set(self.calls.get() + 1);
			self.count
		}
	}

	#[fixture]
	fn recording() -> RecordingCollector {
		RecordingCollector::new()
	}

	#[rstest]
	fn test_fluent_setters_build_quantifiers(recording: RecordingCollector) {
		let matcher = commit_a_transaction(&recording);

		let matcher = matcher.once();
		assert_eq!(matcher.quantifier(), Quantifier::Exactly(1));
		let matcher = matcher.twice();
		assert_eq!(matcher.quantifier(), Quantifier::Exactly(2));
		let matcher = matcher.thrice();
		assert_eq!(matcher.quantifier(), Quantifier::Exactly(3));
		let matcher = matcher.times(5);
		assert_eq!(matcher.quantifier(), Quantifier::Exactly(5));
		let matcher = matcher.at_least(3).times();
		assert_eq!(matcher.quantifier(), Quantifier::AtLeast(3));
		let matcher = matcher.at_most(4).times();
		assert_eq!(matcher.quantifier(), Quantifier::AtMost(4));
		let matcher = matcher.exactly(6).times();
		assert_eq!(matcher.quantifier(), Quantifier::Exactly(6));
	}

	#[rstest]
	fn test_matches_runs_block_before_querying(recording: RecordingCollector) {
		let mut matcher = roll_back_a_transaction(&recording);

		let matched = matcher.matches(|| recording.record(QueryKind::Rollback));

		assert!(matched);
		assert_eq!(matcher.actual_count(), Some(1));
	}

	#[rstest]
	fn test_matches_queries_collector_once() {
		let mut matcher = execute_a_transaction(FixedCollector::new(2));

		assert!(matcher.matches(|| {}));
		let _ = matcher.failure_message_when_negated();
		let _ = matcher.failure_message();

		assert_eq!(matcher.collector().calls.get(), 1);
	}

	#[rstest]
	fn test_reevaluation_overwrites_stored_count(recording: RecordingCollector) {
		let mut matcher = commit_a_transaction(&recording).twice();

		assert!(!matcher.matches(|| recording.record(QueryKind::Commit)));
		assert_eq!(matcher.actual_count(), Some(1));

		assert!(matcher.matches(|| recording.record(QueryKind::Commit)));
		assert_eq!(matcher.actual_count(), Some(2));
	}

	#[rstest]
	fn test_only_matching_kind_is_counted(recording: RecordingCollector) {
		let mut matcher = commit_a_transaction(&recording);

		let matched = matcher.matches(|| {
			recording.record(QueryKind::Transaction);
			recording.record(QueryKind::Rollback);
		});

		assert!(!matched);
		assert_eq!(matcher.actual_count(), Some(0));
	}

	#[rstest]
	fn test_messages_before_evaluation_read_collector() {
		let matcher = commit_a_transaction(FixedCollector::new(3)).twice();

		assert_eq!(
			matcher.failure_message(),
			"expected block to commit a transaction twice, but it committed 3 times"
		);
		assert_eq!(matcher.actual_count(), None);
	}

	#[rstest]
	#[case(Quantifier::Any, "roll back a transaction")]
	#[case(Quantifier::Exactly(2), "roll back a transaction twice")]
	#[case(Quantifier::Exactly(4), "roll back a transaction 4 times")]
	#[case(Quantifier::AtLeast(2), "roll back a transaction at least 2 times")]
	#[case(Quantifier::AtMost(1), "roll back a transaction at most 1 times")]
	fn test_description(#[case] quantifier: Quantifier, #[case] expected: &str) {
		let matcher = roll_back_a_transaction(FixedCollector::new(0)).with_quantifier(quantifier);

		assert_eq!(matcher.description(), expected);
	}

	#[rstest]
	fn test_custom_subject() {
		let settings = MatcherSettings::new().with_subject("closure");
		let mut matcher = execute_a_transaction(FixedCollector::new(0)).with_settings(settings);

		assert!(!matcher.matches(|| {}));
		assert_eq!(
			matcher.failure_message(),
			"expected closure to execute a transaction, but it didn't do so"
		);
	}
}
