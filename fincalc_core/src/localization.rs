//! # Localization
//!
//! UI strings are looked up by key in a per-language dictionary. Dictionaries
//! are JSON objects (`{"futureValue": "Future Value", ...}`) embedded into the
//! binary from `assets/locales/`.
//!
//! Calculators never reach for a global language setting: callers pass a
//! [`Translate`] implementation, which carries both the `translate(key)`
//! capability and the language code used for number formatting.
//!
//! ## Fallback Chain
//!
//! 1. The requested language's dictionary
//! 2. The English dictionary, if the requested one is missing or malformed
//! 3. An empty dictionary, in which case every key translates to itself
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::localization::{Localizer, Translate};
//!
//! let t = Localizer::load("ko");
//! assert_eq!(t.language(), "ko");
//! assert_eq!(t.translate("noSuchKey"), "noSuchKey");
//! ```

use std::collections::HashMap;

use rust_embed::RustEmbed;
use serde::Serialize;

use crate::currency::{primary_subtag, LOCALES};
use crate::errors::{CalcError, CalcResult};

/// Language used when nothing else matches a detected system language
pub const DEFAULT_LANGUAGE: &str = "ko";

/// Dictionary consulted when the requested one cannot be loaded
pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(RustEmbed)]
#[folder = "assets/"]
pub(crate) struct Assets;

/// The `translate(key)` capability injected into calculators and front ends
pub trait Translate {
    /// Translated text for `key`, or `key` itself when there is no entry
    fn translate(&self, key: &str) -> String;

    /// Language code used for number and currency formatting
    fn language(&self) -> &str;
}

/// A supported UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    /// Whether UI labels have their own dictionary (otherwise they fall back to English)
    pub translated: bool,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// All UI languages, in menu order
pub fn supported_languages() -> Vec<Language> {
    LOCALES
        .iter()
        .map(|p| Language {
            code: p.code,
            name: p.native_name,
            translated: has_dictionary(p.code),
        })
        .collect()
}

/// Map a system or browser language tag to a supported code.
///
/// `"en-US"` and `"de_DE.UTF-8"` resolve by primary subtag; anything
/// unsupported (or no tag at all) gives [`DEFAULT_LANGUAGE`].
pub fn detect_language(tag: Option<&str>) -> String {
    tag.map(primary_subtag)
        .filter(|code| LOCALES.iter().any(|p| p.code == code.as_str()))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Language from the process environment (`LC_ALL`, then `LANG`)
pub fn detect_system_language() -> String {
    let tag = std::env::var("LC_ALL")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var("LANG").ok());
    detect_language(tag.as_deref())
}

/// Dictionary-backed translator
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    language: String,
    translations: HashMap<String, String>,
}

impl Localizer {
    /// Build a translator from an explicit dictionary
    pub fn new(language: impl Into<String>, translations: HashMap<String, String>) -> Self {
        Localizer {
            language: language.into(),
            translations,
        }
    }

    /// Load the dictionary for `language`, following the fallback chain.
    ///
    /// Never fails: the worst case is an empty dictionary. The returned
    /// translator keeps the requested language for number formatting even
    /// when its strings came from the English fallback.
    pub fn load(language: &str) -> Self {
        let code = primary_subtag(language);
        let translations = match load_dictionary(&code) {
            Ok(dict) => dict,
            Err(e) => {
                log::warn!("Could not load translations for {}: {}", code, e);
                load_dictionary(FALLBACK_LANGUAGE).unwrap_or_else(|fallback_err| {
                    log::error!("Could not load fallback English translations: {}", fallback_err);
                    HashMap::new()
                })
            }
        };
        Localizer::new(code, translations)
    }

    /// English translator
    pub fn english() -> Self {
        Localizer::load(FALLBACK_LANGUAGE)
    }

    /// Number of entries in the loaded dictionary
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// True if no dictionary could be loaded
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl Translate for Localizer {
    fn translate(&self, key: &str) -> String {
        self.translations
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn language(&self) -> &str {
        &self.language
    }
}

/// Whether `assets/locales/<code>.json` is bundled
pub fn has_dictionary(code: &str) -> bool {
    Assets::get(&format!("locales/{}.json", code)).is_some()
}

/// Read and parse `assets/locales/<code>.json`
pub fn load_dictionary(code: &str) -> CalcResult<HashMap<String, String>> {
    let path = format!("locales/{}.json", code);
    let file = Assets::get(&path)
        .ok_or_else(|| CalcError::localization(code, format!("no dictionary at {}", path)))?;
    serde_json::from_slice(&file.data)
        .map_err(|e| CalcError::localization(code, format!("malformed dictionary: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_dictionary_loads() {
        let t = Localizer::english();
        assert!(!t.is_empty());
        assert_eq!(t.translate("futureValue"), "Future Value");
        assert_eq!(t.translate("calculate"), "Calculate");
    }

    #[test]
    fn test_korean_dictionary_loads() {
        let t = Localizer::load("ko-KR");
        assert_eq!(t.language(), "ko");
        assert_eq!(t.translate("futureValue"), "미래 가치");
    }

    #[test]
    fn test_missing_dictionary_falls_back_to_english() {
        // Supported for formatting, but no dictionary shipped
        let t = Localizer::load("th");
        assert_eq!(t.language(), "th");
        assert_eq!(t.translate("futureValue"), "Future Value");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let t = Localizer::english();
        assert_eq!(t.translate("doesNotExist"), "doesNotExist");
    }

    #[test]
    fn test_empty_translator() {
        let t = Localizer::new("en", HashMap::new());
        assert!(t.is_empty());
        assert_eq!(t.translate("futureValue"), "futureValue");
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language(Some("en-US")), "en");
        assert_eq!(detect_language(Some("de_DE.UTF-8")), "de");
        assert_eq!(detect_language(Some("sv-SE")), DEFAULT_LANGUAGE);
        assert_eq!(detect_language(None), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_supported_languages() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 18);
        assert_eq!(langs[0].code, "en");
        assert_eq!(langs[1].to_string(), "한국어");
    }

    #[test]
    fn test_translated_flag_matches_bundled_dictionaries() {
        let langs = supported_languages();
        let translated: Vec<_> = langs.iter().filter(|l| l.translated).map(|l| l.code).collect();
        for code in ["en", "ko", "ja", "es", "de", "fr"] {
            assert!(translated.contains(&code), "{} should be translated", code);
        }
        let thai = langs.iter().find(|l| l.code == "th").unwrap();
        assert!(!thai.translated);
        assert_eq!(translated.len(), 6);
    }

    #[test]
    fn test_all_shipped_dictionaries_parse() {
        for file in Assets::iter().filter(|f| f.starts_with("locales/")) {
            let code = file.trim_start_matches("locales/").trim_end_matches(".json");
            assert!(load_dictionary(code).is_ok(), "dictionary {} failed to parse", code);
        }
    }
}
