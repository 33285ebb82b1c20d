//! MatcherSettings file loading integration tests

use reinhardt_matchers::{
	BlockMatcher, MatcherSettings, QueryKind, SettingsError, execute_a_transaction,
};
use reinhardt_query_collector::RecordingCollector;
use rstest::rstest;
use std::io::Write;
use tempfile::Builder;

fn settings_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
	let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

/// Test: TOML settings are loaded and applied to matcher messages
#[rstest]
fn test_load_toml_settings() {
	// Arrange
	let file = settings_file(".toml", "subject = \"closure\"\nlog_evaluations = true\n");

	// Act
	let settings = MatcherSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.subject, "closure");
	assert!(settings.log_evaluations);

	let collector = RecordingCollector::new();
	let mut matcher = execute_a_transaction(&collector).with_settings(settings);
	assert!(matcher.matches(|| collector.record(QueryKind::Transaction)));
	assert_eq!(
		matcher.failure_message_when_negated(),
		"expected closure not to execute a transaction, but it executed one"
	);
}

/// Test: Subjects from files are trimmed like subjects from the environment
#[rstest]
fn test_file_subject_is_trimmed() {
	// Arrange
	let file = settings_file(".toml", "subject = \" closure \"\n");

	// Act
	let settings = MatcherSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.subject, "closure");
	let matcher = execute_a_transaction(RecordingCollector::new()).with_settings(settings);
	assert_eq!(
		matcher.failure_message(),
		"expected closure to execute a transaction, but it didn't do so"
	);
}

/// Test: JSON settings with missing fields fall back to defaults
#[rstest]
fn test_load_partial_json_settings() {
	// Arrange
	let file = settings_file(".json", r#"{"log_evaluations": true}"#);

	// Act
	let settings = MatcherSettings::from_file(file.path()).unwrap();

	// Assert
	assert_eq!(settings.subject, "block");
	assert!(settings.log_evaluations);
}

/// Test: Unknown extensions are rejected
#[rstest]
fn test_unsupported_extension() {
	// Arrange
	let file = settings_file(".yaml", "subject: closure\n");

	// Act
	let result = MatcherSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(SettingsError::UnsupportedFormat(_))));
}

/// Test: Malformed content is a parse error
#[rstest]
#[case(".toml", "subject = ")]
#[case(".json", "{\"subject\": ")]
fn test_malformed_settings(#[case] suffix: &str, #[case] contents: &str) {
	// Arrange
	let file = settings_file(suffix, contents);

	// Act
	let result = MatcherSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(SettingsError::ParseError(_))));
}

/// Test: A blank subject fails validation after parsing
#[rstest]
fn test_blank_subject_fails_validation() {
	// Arrange
	let file = settings_file(".json", r#"{"subject": ""}"#);

	// Act
	let result = MatcherSettings::from_file(file.path());

	// Assert
	assert!(matches!(result, Err(SettingsError::ValidationError(_))));
}

/// Test: Missing files are reported as file errors
#[rstest]
fn test_missing_file() {
	// Arrange
	let dir = tempfile::tempdir().unwrap();

	// Act
	let result = MatcherSettings::from_file(dir.path().join("absent.toml"));

	// Assert
	assert!(matches!(result, Err(SettingsError::FileError(_))));
}
