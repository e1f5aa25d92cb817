// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language-preference header parsing.

use crate::tag;

/// One parsed entry from a language-preference header.
#[derive(Debug, Clone, PartialEq)]
pub struct Preference {
	/// Normalized locale tag, or `"*"` for the wildcard.
	pub tag: String,
	/// Quality weight in `[0, 1]`; `0` is an explicit rejection.
	pub weight: f32,
}

impl Preference {
	/// Whether this entry is the `*` wildcard.
	pub fn is_wildcard(&self) -> bool {
		self.tag == tag::WILDCARD
	}

	/// Whether this entry explicitly rejects its tag (`q=0`).
	pub fn is_rejection(&self) -> bool {
		self.weight == 0.0
	}

	/// The language subtag of this entry's tag.
	pub fn language(&self) -> &str {
		tag::language(&self.tag)
	}
}

/// Parse a language-preference header into an ordered preference list.
///
/// Entries are `tag[;q=weight]`, comma-separated. A missing weight defaults
/// to `1.0`; an entry whose weight does not parse as a number in `[0, 1]` is
/// dropped on its own, so one bad entry never discards the rest. The result
/// is sorted by descending weight; equal weights keep their header order.
///
/// An empty header yields an empty list.
pub fn parse_accept_language(header: &str) -> Vec<Preference> {
	let mut preferences = Vec::new();

	for entry in header.split(',') {
		let mut parts = entry.split(';').map(str::trim);
		let raw_tag = parts.next().unwrap_or_default();
		if raw_tag.is_empty() {
			continue;
		}

		if let Some(weight) = parse_weight(parts) {
			preferences.push(Preference {
				tag: tag::normalize(raw_tag),
				weight,
			});
		}
	}

	// Stable sort: equal weights keep their left-to-right header order.
	preferences.sort_by(|a, b| b.weight.total_cmp(&a.weight));
	preferences
}

/// Extract the `q` parameter from an entry's parameter list.
///
/// Returns `None` when a `q` parameter is present but unparseable or out of
/// range, which drops the whole entry. Parameters other than `q` are
/// ignored.
fn parse_weight<'a>(params: impl Iterator<Item = &'a str>) -> Option<f32> {
	let mut weight = 1.0;

	for param in params {
		let Some((key, value)) = param.split_once('=') else {
			continue;
		};
		if !key.trim().eq_ignore_ascii_case("q") {
			continue;
		}
		match value.trim().parse::<f32>() {
			Ok(parsed) if (0.0..=1.0).contains(&parsed) => weight = parsed,
			_ => return None,
		}
	}

	Some(weight)
}
