//! Matcher settings
//!
//! Settings control how matcher messages are worded and whether evaluations
//! are logged. They can be built in code, read from the environment, or
//! loaded from a `.toml` / `.json` file.

use serde::{Deserialize, Serialize};
#[cfg(feature = "settings-files")]
use std::path::PathBuf;

/// Environment variable overriding [`MatcherSettings::subject`]
pub const SUBJECT_ENV: &str = "REINHARDT_EXPECTATIONS_SUBJECT";
/// Environment variable overriding [`MatcherSettings::log_evaluations`]
pub const LOG_EVALUATIONS_ENV: &str = "REINHARDT_EXPECTATIONS_LOG_EVALUATIONS";

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),

	#[error("Validation error: {0}")]
	ValidationError(String),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings applied to matchers
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
	/// Word naming the code under test in messages ("expected block to ...")
	pub subject: String,
	/// Emit a debug event for every evaluation
	pub log_evaluations: bool,
}

impl Default for MatcherSettings {
	fn default() -> Self {
		Self {
			subject: "block".to_string(),
			log_evaluations: false,
		}
	}
}

impl MatcherSettings {
	/// Create settings with defaults
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_matchers::MatcherSettings;
	///
	/// let settings = MatcherSettings::new();
	/// assert_eq!(settings.subject, "block");
	/// assert!(!settings.log_evaluations);
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the subject word
	pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = subject.into();
		self
	}

	/// Enable or disable evaluation logging
	pub fn with_log_evaluations(mut self, enabled: bool) -> Self {
		self.log_evaluations = enabled;
		self
	}

	/// Validate settings
	pub fn validate(&self) -> SettingsResult<()> {
		if self.subject.trim().is_empty() {
			return Err(SettingsError::ValidationError(
				"subject must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Load settings from environment variables, falling back to defaults
	pub fn from_env() -> SettingsResult<Self> {
		let mut settings = Self::default();

		if let Ok(subject) = std::env::var(SUBJECT_ENV) {
			settings.subject = subject.trim().to_string();
		}

		if let Ok(enabled) = std::env::var(LOG_EVALUATIONS_ENV) {
			settings.log_evaluations = enabled.to_lowercase() == "true" || enabled == "1";
		}

		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a `.toml` or `.json` file
	#[cfg(feature = "settings-files")]
	pub fn from_file(path: impl Into<PathBuf>) -> SettingsResult<Self> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let mut settings: MatcherSettings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| SettingsError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(SettingsError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		settings.subject = settings.subject.trim().to_string();
		settings.validate()?;
		Ok(settings)
	}
}
