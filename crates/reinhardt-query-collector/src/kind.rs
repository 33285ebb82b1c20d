//! Classification of transaction-related queries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a query kind name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown query kind: {name}")]
pub struct UnknownQueryKind {
	pub name: String,
}

/// Kind of transaction-related query observed by a collector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
	/// A transaction was started
	Transaction,
	/// A transaction was rolled back
	Rollback,
	/// A transaction was committed
	Commit,
}

impl QueryKind {
	/// All kinds, in declaration order
	pub const ALL: [QueryKind; 3] = [QueryKind::Transaction, QueryKind::Rollback, QueryKind::Commit];

	/// Short snake_case name of the kind
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_query_collector::QueryKind;
	///
	/// assert_eq!(QueryKind::Rollback.as_str(), "rollback");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			QueryKind::Transaction => "transaction",
			QueryKind::Rollback => "rollback",
			QueryKind::Commit => "commit",
		}
	}
}

impl fmt::Display for QueryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for QueryKind {
	type Err = UnknownQueryKind;

	/// Parse a kind from its short name or its `*_queries` collector name
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_query_collector::QueryKind;
	///
	/// assert_eq!("commit".parse::<QueryKind>().unwrap(), QueryKind::Commit);
	/// assert_eq!("rollback_queries".parse::<QueryKind>().unwrap(), QueryKind::Rollback);
	/// assert!("insert_queries".parse::<QueryKind>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_ascii_lowercase();
		let name = normalized
			.strip_suffix("_queries")
			.unwrap_or(normalized.as_str());

		match name {
			"transaction" => Ok(QueryKind::Transaction),
			"rollback" => Ok(QueryKind::Rollback),
			"commit" => Ok(QueryKind::Commit),
			_ => Err(UnknownQueryKind {
				name: s.to_string(),
			}),
		}
	}
}
