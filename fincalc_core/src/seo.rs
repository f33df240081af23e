//! # Page Metadata
//!
//! Title, description, keywords and schema.org structured data for each
//! calculator page, per language. Entries live in embedded JSON files
//! (`assets/seo/<lang>.json`) keyed by calculator slug plus a `default` entry.
//!
//! Lookup order: the language's file (English if there is none), then the
//! calculator's entry within it (the file's `default` entry if there is none).
//!
//! ```rust
//! use fincalc_core::calculations::CalculatorKind;
//! use fincalc_core::seo::page_metadata;
//!
//! let meta = page_metadata("en", Some(CalculatorKind::Loan)).unwrap();
//! assert!(meta.title.starts_with("Loan"));
//! assert_eq!(meta.structured_data["applicationCategory"], "FinancialApplication");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::calculations::CalculatorKind;
use crate::currency::primary_subtag;
use crate::errors::{CalcError, CalcResult};
use crate::localization::{Assets, FALLBACK_LANGUAGE};

const DEFAULT_ENTRY: &str = "default";

/// One entry as stored in the asset file
#[derive(Debug, Clone, Deserialize)]
struct SeoEntry {
    title: String,
    description: String,
    keywords: String,
    app_name: String,
    app_description: String,
}

/// Metadata for one calculator page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Comma-separated keyword list
    pub keywords: String,
    /// schema.org `SoftwareApplication` object
    pub structured_data: serde_json::Value,
}

fn structured_data(name: &str, description: &str, language: &str) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": name,
        "applicationCategory": "FinancialApplication",
        "operatingSystem": "Web",
        "browserRequirements": "Requires a modern web browser.",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD"
        },
        "description": description,
        "inLanguage": language
    })
}

fn load_entries(code: &str) -> CalcResult<HashMap<String, SeoEntry>> {
    let path = format!("seo/{}.json", code);
    let file = Assets::get(&path)
        .ok_or_else(|| CalcError::localization(code, format!("no page metadata at {}", path)))?;
    serde_json::from_slice(&file.data)
        .map_err(|e| CalcError::localization(code, format!("malformed page metadata: {}", e)))
}

/// Metadata for `calculator` (or the landing page when `None`) in `language`.
pub fn page_metadata(language: &str, calculator: Option<CalculatorKind>) -> CalcResult<PageMetadata> {
    let requested = primary_subtag(language);
    let (code, mut entries) = match load_entries(&requested) {
        Ok(entries) => (requested, entries),
        Err(e) => {
            log::debug!("{}; using {} page metadata", e, FALLBACK_LANGUAGE);
            (FALLBACK_LANGUAGE.to_string(), load_entries(FALLBACK_LANGUAGE)?)
        }
    };

    let slug = calculator.map(|kind| kind.slug()).unwrap_or(DEFAULT_ENTRY);
    let entry = entries
        .remove(slug)
        .or_else(|| entries.remove(DEFAULT_ENTRY))
        .ok_or_else(|| CalcError::localization(&code, format!("no '{}' or default page metadata", slug)))?;

    Ok(PageMetadata {
        structured_data: structured_data(&entry.app_name, &entry.app_description, &code),
        title: entry.title,
        description: entry.description,
        keywords: entry.keywords,
    })
}

/// Window or page title, falling back to a fixed English title if metadata is unavailable
pub fn page_title(language: &str, calculator: Option<CalculatorKind>) -> String {
    page_metadata(language, calculator)
        .map(|meta| meta.title)
        .unwrap_or_else(|e| {
            log::warn!("Page metadata unavailable: {}", e);
            "Universal Financial Calculator".to_string()
        })
}
