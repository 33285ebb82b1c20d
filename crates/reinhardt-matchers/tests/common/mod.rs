//! Shared helpers for reinhardt-matchers integration tests

use std::sync::Once;

static INIT: Once = Once::new();

/// Route matcher events to `env_logger` once per test binary
///
/// Matcher and collector `tracing` events reach the `log` facade when no
/// subscriber is installed; `RUST_LOG=reinhardt_matchers=debug` shows them.
pub fn init_test_logging() {
	INIT.call_once(|| {
		let _ = env_logger::builder().is_test(true).try_init();
	});
}
