// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration supplied by the hosting application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tag;

/// Environment variable naming the comma-separated supported locales.
pub const SUPPORTED_LOCALES_ENV: &str = "TRELLIS_SUPPORTED_LOCALES";

/// Environment variable naming the default locale.
pub const DEFAULT_LOCALE_ENV: &str = "TRELLIS_DEFAULT_LOCALE";

/// Errors raised while building a [`LocaleConfig`].
///
/// These are configuration-time failures and are meant to abort startup;
/// per-request resolution never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleConfigError {
	#[error("no supported locales configured")]
	EmptySupportedSet,

	#[error("default locale {0:?} is not in the supported set")]
	UnsupportedDefault(String),

	#[error("environment variable {0} is not set")]
	MissingEnv(&'static str),
}

/// The supported-locale set and default locale, fixed at startup.
///
/// Construction validates that the set is non-empty and that the default
/// names a member (case-insensitive), so every later resolution can return
/// a supported locale unconditionally. The set keeps its configuration
/// order; duplicate spellings of the same locale are dropped, first one
/// wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocaleConfigSection")]
pub struct LocaleConfig {
	supported: Vec<String>,
	default_locale: String,
}

/// Raw shape of a locale config-file section, validated into
/// [`LocaleConfig`] on deserialization.
#[derive(Debug, Deserialize)]
struct LocaleConfigSection {
	supported: Vec<String>,
	#[serde(default)]
	default_locale: Option<String>,
}

impl TryFrom<LocaleConfigSection> for LocaleConfig {
	type Error = LocaleConfigError;

	fn try_from(section: LocaleConfigSection) -> Result<Self, Self::Error> {
		match section.default_locale {
			Some(default_locale) => Self::new(section.supported, default_locale),
			None => Self::with_first_default(section.supported),
		}
	}
}

impl LocaleConfig {
	/// Build a configuration from the supported set and default locale.
	///
	/// The default is matched against the set case-insensitively and stored
	/// in the configured spelling.
	pub fn new(
		supported: impl IntoIterator<Item = impl Into<String>>,
		default_locale: impl Into<String>,
	) -> Result<Self, LocaleConfigError> {
		let supported = dedup_supported(supported);
		if supported.is_empty() {
			return Err(LocaleConfigError::EmptySupportedSet);
		}

		let default_locale = default_locale.into();
		let canonical = supported
			.iter()
			.find(|s| tag::normalize(s) == tag::normalize(&default_locale))
			.cloned()
			.ok_or(LocaleConfigError::UnsupportedDefault(default_locale))?;

		Ok(Self {
			supported,
			default_locale: canonical,
		})
	}

	/// Build a configuration defaulting to the first supported locale.
	fn with_first_default(
		supported: impl IntoIterator<Item = impl Into<String>>,
	) -> Result<Self, LocaleConfigError> {
		let supported = dedup_supported(supported);
		let Some(default_locale) = supported.first().cloned() else {
			return Err(LocaleConfigError::EmptySupportedSet);
		};

		Ok(Self {
			supported,
			default_locale,
		})
	}

	/// Load configuration from `TRELLIS_SUPPORTED_LOCALES` and
	/// `TRELLIS_DEFAULT_LOCALE`.
	///
	/// The supported list is comma-separated (`"en, es, ar"`). The default
	/// variable may be omitted, in which case the first supported locale is
	/// used; an explicit default that is not in the set still fails.
	pub fn from_env() -> Result<Self, LocaleConfigError> {
		let supported = std::env::var(SUPPORTED_LOCALES_ENV)
			.map_err(|_| LocaleConfigError::MissingEnv(SUPPORTED_LOCALES_ENV))?;
		let supported = supported
			.split(',')
			.map(str::trim)
			.filter(|entry| !entry.is_empty())
			.map(str::to_string);

		match std::env::var(DEFAULT_LOCALE_ENV) {
			Ok(default_locale) => Self::new(supported, default_locale),
			Err(_) => Self::with_first_default(supported),
		}
	}

	/// The configured supported locales, in configuration order.
	pub fn supported_locales(&self) -> &[String] {
		&self.supported
	}

	/// The configured default locale.
	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	/// Check whether a tag names a supported locale (case-insensitive).
	pub fn is_supported(&self, locale: &str) -> bool {
		self.canonical(locale).is_some()
	}

	/// The configured spelling for a tag, matched case-insensitively.
	///
	/// Returns `None` if the tag is not supported.
	pub fn canonical(&self, locale: &str) -> Option<&str> {
		let normalized = tag::normalize(locale);
		if normalized.is_empty() {
			return None;
		}

		self.supported
			.iter()
			.find(|s| tag::normalize(s) == normalized)
			.map(String::as_str)
	}
}

fn dedup_supported(supported: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
	let mut seen: Vec<String> = Vec::new();
	let mut result = Vec::new();

	for locale in supported {
		let locale = locale.into().trim().to_string();
		if locale.is_empty() {
			continue;
		}

		let normalized = tag::normalize(&locale);
		if seen.contains(&normalized) {
			continue;
		}

		seen.push(normalized);
		result.push(locale);
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_valid() {
		let config = LocaleConfig::new(["en", "es"], "en").unwrap();
		assert_eq!(config.supported_locales(), ["en", "es"]);
		assert_eq!(config.default_locale(), "en");
	}

	#[test]
	fn test_default_must_be_supported() {
		assert_eq!(
			LocaleConfig::new(["en", "es"], "fr"),
			Err(LocaleConfigError::UnsupportedDefault("fr".to_string()))
		);
	}

	#[test]
	fn test_empty_set_rejected() {
		assert_eq!(
			LocaleConfig::new(Vec::<String>::new(), "en"),
			Err(LocaleConfigError::EmptySupportedSet)
		);
	}

	#[test]
	fn test_blank_entries_rejected() {
		assert_eq!(
			LocaleConfig::new(["", "  "], "en"),
			Err(LocaleConfigError::EmptySupportedSet)
		);
	}

	#[test]
	fn test_default_case_insensitive_stored_canonically() {
		let config = LocaleConfig::new(["en-US", "es"], "EN-us").unwrap();
		assert_eq!(config.default_locale(), "en-US");
	}

	#[test]
	fn test_canonical_lookup() {
		let config = LocaleConfig::new(["en-US", "es"], "es").unwrap();
		assert_eq!(config.canonical("EN-US"), Some("en-US"));
		assert_eq!(config.canonical("en-us"), Some("en-US"));
		assert_eq!(config.canonical("fr"), None);
		assert_eq!(config.canonical(""), None);
	}

	#[test]
	fn test_is_supported() {
		let config = LocaleConfig::new(["en", "es"], "en").unwrap();
		assert!(config.is_supported("en"));
		assert!(config.is_supported("ES"));
		assert!(!config.is_supported("fr"));
		assert!(!config.is_supported(""));
	}

	#[test]
	fn test_duplicates_first_spelling_wins() {
		let config = LocaleConfig::new(["en-US", "EN-us", "es"], "es").unwrap();
		assert_eq!(config.supported_locales(), ["en-US", "es"]);
	}

	#[test]
	fn test_from_env() {
		std::env::set_var(SUPPORTED_LOCALES_ENV, "en, es ,ar");
		std::env::remove_var(DEFAULT_LOCALE_ENV);
		let config = LocaleConfig::from_env().unwrap();
		assert_eq!(config.supported_locales(), ["en", "es", "ar"]);
		assert_eq!(config.default_locale(), "en");

		std::env::set_var(DEFAULT_LOCALE_ENV, "ar");
		let config = LocaleConfig::from_env().unwrap();
		assert_eq!(config.default_locale(), "ar");

		std::env::set_var(DEFAULT_LOCALE_ENV, "fr");
		assert_eq!(
			LocaleConfig::from_env(),
			Err(LocaleConfigError::UnsupportedDefault("fr".to_string()))
		);

		std::env::remove_var(SUPPORTED_LOCALES_ENV);
		assert_eq!(
			LocaleConfig::from_env(),
			Err(LocaleConfigError::MissingEnv(SUPPORTED_LOCALES_ENV))
		);
		std::env::remove_var(DEFAULT_LOCALE_ENV);
	}

	#[test]
	fn test_deserialize_validates_default() {
		let config: LocaleConfig =
			toml::from_str("supported = [\"en\", \"es\"]\ndefault_locale = \"es\"").unwrap();
		assert_eq!(config.default_locale(), "es");

		let result = toml::from_str::<LocaleConfig>("supported = [\"en\"]\ndefault_locale = \"fr\"");
		assert!(result.is_err());
	}

	#[test]
	fn test_deserialize_defaults_to_first() {
		let config: LocaleConfig = serde_json::from_str(r#"{"supported": ["es", "en"]}"#).unwrap();
		assert_eq!(config.default_locale(), "es");
	}

	#[test]
	fn test_serde_roundtrip() {
		let config = LocaleConfig::new(["en-US", "es"], "es").unwrap();
		let json = serde_json::to_string(&config).unwrap();
		let back: LocaleConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(config, back);
	}
}
