// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use tracing::debug;

use crate::config::LocaleConfig;
use crate::matcher::best_match;
use crate::preference::parse_accept_language;

/// Resolve the effective locale for a request.
///
/// Resolution order (highest to lowest priority):
///
/// 1. The cookie locale, when it names a supported locale
/// 2. The best match for the language-preference header
/// 3. The configured default locale
///
/// A persisted cookie choice is sticky: while it is valid the header is not
/// consulted at all, so a changed browser preference never silently
/// overrides it. Every degraded input falls through to the next step and
/// the worst case is the configured default, so this function is total and
/// never panics.
///
/// # Arguments
///
/// * `cookie_locale` - Locale persisted for the user, if any (may be invalid)
/// * `accept_language` - Raw language-preference header, if any
/// * `config` - The supported-locale set and default
///
/// # Returns
///
/// The configured spelling of a supported locale, always.
///
/// # Example
///
/// ```
/// use trellis_common_locale::{resolve_locale, LocaleConfig};
///
/// let config = LocaleConfig::new(["en", "es"], "es").expect("valid locale config");
///
/// // Cookie wins over the header.
/// assert_eq!(resolve_locale(Some("en"), Some("es;q=1.0"), &config), "en");
///
/// // Header negotiation when there is no cookie.
/// assert_eq!(resolve_locale(None, Some("fr;q=0.5, en;q=0.9"), &config), "en");
///
/// // Default when there is no usable signal.
/// assert_eq!(resolve_locale(None, None, &config), "es");
/// ```
pub fn resolve_locale<'a>(
	cookie_locale: Option<&str>,
	accept_language: Option<&str>,
	config: &'a LocaleConfig,
) -> &'a str {
	if let Some(cookie) = cookie_locale {
		if let Some(locale) = config.canonical(cookie) {
			debug!(locale, source = "cookie", "resolved request locale");
			return locale;
		}
		// An unsupported cookie value is treated as absent.
	}

	if let Some(header) = accept_language {
		let preferences = parse_accept_language(header);
		if let Some(locale) = best_match(&preferences, config.supported_locales()) {
			debug!(locale, source = "header", "resolved request locale");
			return locale;
		}
	}

	let locale = config.default_locale();
	debug!(locale, source = "default", "resolved request locale");
	locale
}
