//! Query collector capability and an in-memory recording implementation

use crate::kind::QueryKind;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Source of observed query counts
///
/// A collector tracks how many queries of each [`QueryKind`] ran while a
/// block under test executed. Matchers only ever read from it.
pub trait QueryCollector {
	/// Number of queries of `kind` observed so far
	fn queries_of_type(&self, kind: QueryKind) -> usize;
}

impl<C: QueryCollector + ?Sized> QueryCollector for &C {
	fn queries_of_type(&self, kind: QueryKind) -> usize {
		(**self).queries_of_type(kind)
	}
}

impl<C: QueryCollector + ?Sized> QueryCollector for Arc<C> {
	fn queries_of_type(&self, kind: QueryKind) -> usize {
		(**self).queries_of_type(kind)
	}
}

impl<C: QueryCollector + ?Sized> QueryCollector for Box<C> {
	fn queries_of_type(&self, kind: QueryKind) -> usize {
		(**self).queries_of_type(kind)
	}
}

/// Snapshot of per-kind counts
pub type QueryCounts = BTreeMap<QueryKind, usize>;

/// Collector that counts queries reported to it explicitly
///
/// Instrumentation code (a connection wrapper, a mock backend) calls
/// [`record`](Self::record) whenever it sees a transaction-related query.
/// Share it between the instrumentation and the matcher through [`Arc`].
#[derive(Debug, Default)]
pub struct RecordingCollector {
	counts: Mutex<QueryCounts>,
}

impl RecordingCollector {
	/// Create an empty collector
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_query_collector::{QueryCollector, QueryKind, RecordingCollector};
	///
	/// let collector = RecordingCollector::new();
	/// assert_eq!(collector.queries_of_type(QueryKind::Commit), 0);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Record one query of `kind`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_query_collector::{QueryCollector, QueryKind, RecordingCollector};
	///
	/// let collector = RecordingCollector::new();
	/// collector.record(QueryKind::Rollback);
	/// assert_eq!(collector.queries_of_type(QueryKind::Rollback), 1);
	/// ```
	pub fn record(&self, kind: QueryKind) {
		self.record_n(kind, 1);
	}

	/// Record `n` queries of `kind` at once
	pub fn record_n(&self, kind: QueryKind, n: usize) {
		if n == 0 {
			return;
		}
		let mut counts = self.counts.lock();
		let count = counts.entry(kind).or_insert(0);
		*count = count.saturating_add(n);
		tracing::trace!(kind = %kind, recorded = n, total = *count, "recorded query");
	}

	/// Forget every recorded query
	pub fn reset(&self) {
		self.counts.lock().clear();
		tracing::trace!("query collector reset");
	}

	/// Total number of queries recorded across all kinds
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_query_collector::{QueryKind, RecordingCollector};
	///
	/// let collector = RecordingCollector::new();
	/// collector.record(QueryKind::Transaction);
	/// collector.record(QueryKind::Commit);
	/// assert_eq!(collector.total(), 2);
	/// ```
	pub fn total(&self) -> usize {
		self.counts
			.lock()
			.values()
			.fold(0, |total, count| total.saturating_add(*count))
	}

	/// Copy of the current counts; kinds never recorded are absent
	pub fn counts(&self) -> QueryCounts {
		self.counts.lock().clone()
	}
}

impl QueryCollector for RecordingCollector {
	fn queries_of_type(&self, kind: QueryKind) -> usize {
		self.counts.lock().get(&kind).copied().unwrap_or(0)
	}
}
