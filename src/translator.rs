// SPDX-License-Identifier: MPL-2.0
//! The translation-lookup object built once at application startup.
//!
//! All locale dictionaries are compiled into the binary from `assets/i18n/`
//! and parsed during construction; no I/O happens afterwards. Lookups walk
//! active locale, then fallback locale, then return the key itself.

use crate::catalog::{interpolate, LocaleMessages};
use crate::config::Config;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Built-in default locale, used when no preference resolves.
pub const DEFAULT_LOCALE: &str = "pt";

/// Built-in fallback locale, consulted on a missed key.
pub const FALLBACK_LOCALE: &str = "pt";

pub struct Translator {
    catalogs: HashMap<LanguageIdentifier, LocaleMessages>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl Translator {
    /// Builds the catalog from the bundled locale files.
    ///
    /// The bundled dictionaries are compile-time inputs, so a file that
    /// does not parse is a packaging mistake and panics here rather than
    /// surfacing an error to callers.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut catalogs = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".json") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let messages = LocaleMessages::from_slice(content.data.as_ref())
                            .expect("Failed to parse bundled locale file.");
                        catalogs.insert(locale.clone(), messages);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort_by_key(|l| l.to_string());

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(default_locale);
        let fallback_locale = config
            .fallback_language
            .as_deref()
            .and_then(|lang| find_available(lang, &available_locales))
            .unwrap_or_else(|| FALLBACK_LOCALE.parse().unwrap());

        Self {
            catalogs,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    /// Switches the active locale. Locales without a bundled dictionary
    /// are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.catalogs.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Translates `key` in the active locale.
    ///
    /// Falls back to the fallback locale, then to the key itself. A missed
    /// key is the external caller's rendering concern, not an error.
    pub fn tr(&self, key: &str) -> String {
        self.tr_in(key, &self.current_locale)
    }

    /// Translates `key` under a per-call locale override.
    pub fn tr_in(&self, key: &str, locale: &LanguageIdentifier) -> String {
        self.lookup(locale, key).unwrap_or(key).to_string()
    }

    /// Translates `key` and substitutes `{name}` placeholders from `args`.
    pub fn tr_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.lookup(&self.current_locale, key).unwrap_or(key);
        interpolate(template, args)
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<&str> {
        if let Some(value) = self.catalogs.get(locale).and_then(|m| m.get(key)) {
            return Some(value);
        }
        if *locale != self.fallback_locale {
            return self
                .catalogs
                .get(&self.fallback_locale)
                .and_then(|m| m.get(key));
        }
        None
    }

    // ---------------------------------------------------------------------
    // Coverage
    // ---------------------------------------------------------------------

    /// Sorted, deduplicated union of keys across every bundled locale.
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .catalogs
            .values()
            .flat_map(|m| m.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys of the union absent from `locale`'s own dictionary.
    ///
    /// Fallback hits are deliberately not counted: the report exists to
    /// show translators which keys are still untranslated.
    pub fn missing_keys(&self, locale: &LanguageIdentifier) -> Vec<String> {
        let messages = self.catalogs.get(locale);
        self.all_keys()
            .into_iter()
            .filter(|key| messages.and_then(|m| m.get(key)).is_none())
            .collect()
    }

    /// Per-locale translation completeness over the full key set.
    pub fn coverage_report(&self) -> CoverageReport {
        let total_keys = self.all_keys().len();
        let locales = self
            .available_locales
            .iter()
            .map(|locale| {
                let missing = self.missing_keys(locale);
                let present = total_keys.saturating_sub(missing.len());
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    (present as f32 / total_keys as f32) * 100.0
                };
                LocaleCoverage {
                    locale: locale.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys,
            locales,
        }
    }
}

/// Coverage of the bundled catalog, one entry per locale.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub locale: LanguageIdentifier,
    pub present: usize,
    pub missing: Vec<String>,
    pub coverage_percent: f32,
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Some(lang) = find_available(&lang_str, available) {
            return Some(lang);
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Some(lang) = find_available(lang_str, available) {
            return Some(lang);
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Some(os_lang) = find_available(&os_locale_str, available) {
            return Some(os_lang);
        }
    }

    None
}

/// Matches a candidate tag against the bundled locales: exact match first,
/// then primary language subtag, so an OS locale of `pt-BR` still selects
/// the bundled `pt` dictionary.
fn find_available(
    candidate: &str,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidate: LanguageIdentifier = candidate.trim().parse().ok()?;
    if let Some(exact) = available.iter().find(|l| **l == candidate) {
        return Some(exact.clone());
    }
    available
        .iter()
        .find(|l| l.language == candidate.language)
        .cloned()
}
