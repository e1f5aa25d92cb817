// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Preference-to-supported-locale matching.

use crate::preference::Preference;
use crate::tag;

/// Find the best supported locale for an ordered preference list.
///
/// Preferences are visited in order (the parser already sorted them by
/// weight). Each one is tried three ways: an exact case-insensitive tag
/// match, a language-subtag match (`en-GB` matches supported `en`), and the
/// wildcard, which takes the first supported locale not excluded by a
/// zero-weight entry. A locale rejected with `q=0` anywhere in the list is
/// never returned, whichever rule would have produced it.
///
/// Returns `None` when nothing matches; the caller falls back to the
/// configured default.
pub fn best_match<'a>(preferences: &[Preference], supported: &'a [String]) -> Option<&'a str> {
	for preference in preferences.iter().filter(|p| !p.is_rejection()) {
		if preference.is_wildcard() {
			if let Some(candidate) = supported.iter().find(|s| !is_rejected(s, preferences)) {
				return Some(candidate.as_str());
			}
			continue;
		}

		// Exact tag match.
		if let Some(candidate) = supported
			.iter()
			.find(|s| tag::normalize(s) == preference.tag && !is_rejected(s, preferences))
		{
			return Some(candidate.as_str());
		}

		// Language-only fallback: en-GB matches supported en, and en
		// matches supported en-US.
		if let Some(candidate) = supported.iter().find(|s| {
			tag::language(&tag::normalize(s)) == preference.language() && !is_rejected(s, preferences)
		}) {
			return Some(candidate.as_str());
		}
	}

	None
}

/// Whether a supported locale is excluded by a zero-weight entry.
///
/// A zero-weight entry rejects its exact tag, and its whole language family
/// when it carries no region (`es;q=0` rejects `es` and `es-MX`;
/// `es-MX;q=0` rejects only `es-MX`). Zero-weight wildcards name no tag and
/// reject nothing.
fn is_rejected(candidate: &str, preferences: &[Preference]) -> bool {
	let normalized = tag::normalize(candidate);

	preferences
		.iter()
		.filter(|p| p.is_rejection() && !p.is_wildcard())
		.any(|p| {
			p.tag == normalized
				|| (p.tag == p.language() && p.language() == tag::language(&normalized))
		})
}
