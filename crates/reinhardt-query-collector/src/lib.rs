//! # Reinhardt Query Collector
//!
//! Query kinds and the collector capability consumed by Reinhardt block
//! matchers.
//!
//! ## Overview
//!
//! A collector answers one question: how many queries of a given
//! [`QueryKind`] ran while the code under test executed. Classifying the
//! queries is the job of whatever feeds the collector; this crate only
//! defines the vocabulary and a simple in-memory [`RecordingCollector`].
//!
//! ## Quick Start
//!
//! ```
//! use reinhardt_query_collector::{QueryCollector, QueryKind, RecordingCollector};
//! use std::sync::Arc;
//!
//! let collector = Arc::new(RecordingCollector::new());
//! collector.record(QueryKind::Transaction);
//! collector.record(QueryKind::Commit);
//!
//! assert_eq!(collector.queries_of_type(QueryKind::Commit), 1);
//! assert_eq!(collector.queries_of_type(QueryKind::Rollback), 0);
//! ```

pub mod collector;
pub mod kind;

pub use collector::{QueryCollector, QueryCounts, RecordingCollector};
pub use kind::{QueryKind, UnknownQueryKind};
