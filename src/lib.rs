// SPDX-License-Identifier: MPL-2.0
//! `lingua` builds a process-wide translation catalog from locale
//! dictionaries bundled into the binary.
//!
//! Each locale ships as one JSON document under `assets/i18n/`; the catalog
//! is assembled exactly once at startup, selects an active locale from CLI,
//! config, or OS preferences, and answers `translate(key, locale?)` lookups
//! with fallback to the configured fallback locale. Missed keys render as
//! the key itself, never as an error.

#![doc(html_root_url = "https://docs.rs/lingua/0.1.0")]

pub mod catalog;
pub mod config;
pub mod error;
pub mod global;
pub mod translator;

pub use translator::Translator;
