//! Expected-count policies attached to a matcher

use serde::{Deserialize, Serialize};

/// How many matching queries a block is expected to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
	/// At least one occurrence
	#[default]
	Any,
	/// Exactly `n` occurrences
	Exactly(usize),
	/// `n` or more occurrences
	AtLeast(usize),
	/// `n` or fewer occurrences
	AtMost(usize),
}

impl Quantifier {
	/// Whether an observed count satisfies this quantifier
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_matchers::Quantifier;
	///
	/// assert!(Quantifier::Any.is_satisfied_by(1));
	/// assert!(!Quantifier::Any.is_satisfied_by(0));
	/// assert!(Quantifier::Exactly(2).is_satisfied_by(2));
	/// assert!(Quantifier::AtLeast(3).is_satisfied_by(4));
	/// assert!(!Quantifier::AtMost(3).is_satisfied_by(4));
	/// ```
	pub fn is_satisfied_by(&self, count: usize) -> bool {
		match *self {
			Quantifier::Any => count >= 1,
			Quantifier::Exactly(n) => count == n,
			Quantifier::AtLeast(n) => count >= n,
			Quantifier::AtMost(n) => count <= n,
		}
	}

	/// Expected count carried by the quantifier, if any
	pub fn expected(&self) -> Option<usize> {
		match *self {
			Quantifier::Any => None,
			Quantifier::Exactly(n) | Quantifier::AtLeast(n) | Quantifier::AtMost(n) => Some(n),
		}
	}
}
