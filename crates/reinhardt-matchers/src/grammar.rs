//! Phrase tables and count wording used by matcher messages
//!
//! All irregular wording lives here: the per-kind verb forms and the
//! count words ("twice"). Templates in the matchers only compose these.

use reinhardt_query_collector::QueryKind;

/// Verb forms a query kind contributes to messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrases {
	/// Full infinitive phrase, e.g. "roll back a transaction"
	pub infinitive: &'static str,
	/// Bare verb, e.g. "roll back"
	pub verb: &'static str,
	/// Past tense, e.g. "rolled back"
	pub past: &'static str,
	/// Past tense of a single occurrence, e.g. "rolled one back"
	pub past_once: &'static str,
	/// Singular noun
	pub noun: &'static str,
	/// Plural noun
	pub plural_noun: &'static str,
}

const TRANSACTION: Phrases = Phrases {
	infinitive: "execute a transaction",
	verb: "execute",
	past: "executed",
	past_once: "executed one",
	noun: "transaction",
	plural_noun: "transactions",
};

const ROLLBACK: Phrases = Phrases {
	infinitive: "roll back a transaction",
	verb: "roll back",
	past: "rolled back",
	past_once: "rolled one back",
	noun: "transaction",
	plural_noun: "transactions",
};

const COMMIT: Phrases = Phrases {
	infinitive: "commit a transaction",
	verb: "commit",
	past: "committed",
	past_once: "committed once",
	noun: "transaction",
	plural_noun: "transactions",
};

/// Phrase table entry for a kind
///
/// # Examples
///
/// ```
/// use reinhardt_matchers::grammar::phrases;
/// use reinhardt_query_collector::QueryKind;
///
/// assert_eq!(phrases(QueryKind::Commit).past, "committed");
/// ```
pub fn phrases(kind: QueryKind) -> &'static Phrases {
	match kind {
		QueryKind::Transaction => &TRANSACTION,
		QueryKind::Rollback => &ROLLBACK,
		QueryKind::Commit => &COMMIT,
	}
}

/// Counts that read as a word instead of "<n> times"
const COUNT_WORDS: &[(usize, &str)] = &[(2, "twice")];

/// Count with irregular words applied: `2` is "twice", anything else "<n> times"
///
/// # Examples
///
/// ```
/// use reinhardt_matchers::grammar::count_phrase;
///
/// assert_eq!(count_phrase(2), "twice");
/// assert_eq!(count_phrase(3), "3 times");
/// ```
pub fn count_phrase(n: usize) -> String {
	COUNT_WORDS
		.iter()
		.find(|(count, _)| *count == n)
		.map(|(_, word)| (*word).to_string())
		.unwrap_or_else(|| times_phrase(n))
}

/// Count rendered literally as "<n> times"
pub fn times_phrase(n: usize) -> String {
	format!("{} times", n)
}

/// Count followed by the kind's noun, e.g. "3 transactions"
pub fn noun_phrase(phrases: &Phrases, n: usize) -> String {
	let noun = if n == 1 {
		phrases.noun
	} else {
		phrases.plural_noun
	};
	format!("{} {}", n, noun)
}
