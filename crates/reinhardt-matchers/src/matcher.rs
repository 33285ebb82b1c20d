//! Block matcher abstraction

/// A predicate over a block of code, with failure messages for both
/// expectation directions
///
/// Assertion helpers in [`crate::assertions`] drive any `BlockMatcher`.
pub trait BlockMatcher {
	/// Run `block` and report whether the expectation holds
	fn matches<F: FnOnce()>(&mut self, block: F) -> bool;

	/// Message shown when a positive expectation fails
	fn failure_message(&self) -> String;

	/// Message shown when a negated expectation fails
	fn failure_message_when_negated(&self) -> String;

	/// Short description of the expectation
	fn description(&self) -> String;
}
