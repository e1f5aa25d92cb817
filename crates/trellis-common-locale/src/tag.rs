// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale tag normalization.

/// Wildcard tag in a language-preference header.
pub(crate) const WILDCARD: &str = "*";

/// Normalize a locale tag for comparison.
///
/// The language subtag is lowercased, two-letter region subtags are
/// uppercased, and four-letter script subtags are title-cased, so `"EN-us"`
/// and `"en-US"` compare equal and `"zh-hans-cn"` becomes `"zh-Hans-CN"`.
/// Surrounding whitespace is trimmed.
pub(crate) fn normalize(tag: &str) -> String {
	let tag = tag.trim();
	if tag == WILDCARD {
		return WILDCARD.to_string();
	}

	let mut subtags = tag.split('-');
	let mut normalized = match subtags.next() {
		Some(language) => language.to_ascii_lowercase(),
		None => return String::new(),
	};

	for subtag in subtags {
		normalized.push('-');
		match subtag.len() {
			2 => normalized.push_str(&subtag.to_ascii_uppercase()),
			4 => {
				let mut chars = subtag.chars();
				if let Some(first) = chars.next() {
					normalized.push(first.to_ascii_uppercase());
					normalized.push_str(&chars.as_str().to_ascii_lowercase());
				}
			}
			_ => normalized.push_str(&subtag.to_ascii_lowercase()),
		}
	}

	normalized
}

/// The language subtag of a tag (everything before the first `-`).
pub(crate) fn language(tag: &str) -> &str {
	tag.split('-').next().unwrap_or(tag)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_region() {
		assert_eq!(normalize("EN-us"), "en-US");
		assert_eq!(normalize("en-gb"), "en-GB");
		assert_eq!(normalize("ES"), "es");
	}

	#[test]
	fn test_normalize_script() {
		assert_eq!(normalize("zh-hans-cn"), "zh-Hans-CN");
		assert_eq!(normalize("sr-LATN"), "sr-Latn");
	}

	#[test]
	fn test_normalize_trims_whitespace() {
		assert_eq!(normalize(" en-US "), "en-US");
		assert_eq!(normalize("\tes"), "es");
	}

	#[test]
	fn test_normalize_wildcard() {
		assert_eq!(normalize("*"), "*");
		assert_eq!(normalize(" * "), "*");
	}

	#[test]
	fn test_normalize_empty() {
		assert_eq!(normalize(""), "");
		assert_eq!(normalize("   "), "");
	}

	#[test]
	fn test_language_subtag() {
		assert_eq!(language("en-US"), "en");
		assert_eq!(language("en"), "en");
		assert_eq!(language("zh-Hans-CN"), "zh");
	}
}
