// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request locale negotiation for Trellis.
//!
//! This crate picks the single best-matching locale for an incoming request
//! from a configured set of supported locales, using an optional persisted
//! locale cookie and an optional `Accept-Language` style header. The
//! resolved locale drives locale-prefixed redirects and translated-content
//! selection; reading and writing the cookie, routing, and rendering belong
//! to the caller.
//!
//! Resolution order (highest to lowest priority):
//!
//! 1. The cookie locale, when it names a supported locale
//! 2. The best header match against the supported set
//! 3. The configured default locale
//!
//! Resolution is pure and synchronous over an immutable [`LocaleConfig`],
//! so it is safe on every request path, concurrently, without coordination.
//!
//! # Example
//!
//! ```
//! use trellis_common_locale::{is_rtl, resolve_locale, LocaleConfig};
//!
//! let config = LocaleConfig::new(["en", "es", "ar"], "en").expect("valid locale config");
//!
//! // A persisted cookie wins over the negotiated header.
//! assert_eq!(resolve_locale(Some("es"), Some("en;q=0.9"), &config), "es");
//!
//! // Otherwise the header is negotiated against the supported set.
//! assert_eq!(resolve_locale(None, Some("ar;q=0.9, fr;q=0.5"), &config), "ar");
//!
//! // No usable signal falls back to the default.
//! assert_eq!(resolve_locale(None, None, &config), "en");
//!
//! // Check for RTL language
//! if is_rtl("ar") {
//!     // Add dir="rtl" to HTML
//! }
//! ```

mod config;
mod direction;
mod matcher;
mod preference;
mod resolve;
mod tag;

pub use config::{LocaleConfig, LocaleConfigError};
pub use direction::{direction_of, is_rtl, Direction};
pub use matcher::best_match;
pub use preference::{parse_accept_language, Preference};
pub use resolve::resolve_locale;

pub use config::{DEFAULT_LOCALE_ENV, SUPPORTED_LOCALES_ENV};
