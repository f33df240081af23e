//! # Currency and Number Formatting
//!
//! Static per-language locale profiles: which currency a language shows,
//! how digits are grouped and where the symbol goes. All monetary values
//! are rendered with exactly two fraction digits; rounding happens here and
//! nowhere else.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::currency::{currency_profile, format_currency};
//!
//! assert_eq!(format_currency(1126.8250301, "en"), "$1,126.83");
//! assert_eq!(currency_profile("de").iso_code, "EUR");
//!
//! // Unknown languages fall back to US dollars
//! assert_eq!(currency_profile("xx").symbol, "$");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

const NBSP: char = '\u{00A0}';
const NARROW_NBSP: char = '\u{202F}';

/// Currency shown for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyProfile {
    /// ISO 4217 code (e.g., "USD", "KRW")
    pub iso_code: &'static str,
    /// Display symbol (e.g., "$", "₩")
    pub symbol: &'static str,
}

/// How integer digits are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Thousands,
    /// Last three, then groups of two: 12,34,567
    Indian,
}

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolPlacement {
    /// `$1,234.56`
    Prefix,
    /// `R$ 1.234,56`
    PrefixSpaced,
    /// `1.234,56 €`
    Suffix,
}

/// Number and currency conventions for one language
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocaleProfile {
    /// Language code (e.g., "en", "ko")
    pub code: &'static str,
    /// Language name in that language
    pub native_name: &'static str,
    pub currency: CurrencyProfile,
    pub decimal_separator: char,
    pub group_separator: char,
    pub grouping: Grouping,
    /// Minimum digits in the leading group before grouping kicks in
    /// (2 means 1234 stays ungrouped but 12345 becomes 12.345)
    pub min_grouping_digits: usize,
    pub placement: SymbolPlacement,
}

const fn profile(
    code: &'static str,
    native_name: &'static str,
    iso_code: &'static str,
    symbol: &'static str,
    decimal_separator: char,
    group_separator: char,
    placement: SymbolPlacement,
) -> LocaleProfile {
    LocaleProfile {
        code,
        native_name,
        currency: CurrencyProfile { iso_code, symbol },
        decimal_separator,
        group_separator,
        grouping: Grouping::Thousands,
        min_grouping_digits: 1,
        placement,
    }
}

/// All supported locales, in menu order
pub static LOCALES: [LocaleProfile; 18] = {
    use SymbolPlacement::*;
    [
        profile("en", "English", "USD", "$", '.', ',', Prefix),
        profile("ko", "한국어", "KRW", "₩", '.', ',', Prefix),
        profile("ja", "日本語", "JPY", "¥", '.', ',', Prefix),
        profile("zh", "中文", "CNY", "¥", '.', ',', Prefix),
        LocaleProfile {
            min_grouping_digits: 2,
            ..profile("es", "Español", "EUR", "€", ',', '.', Suffix)
        },
        profile("pt", "Português", "BRL", "R$", ',', '.', PrefixSpaced),
        profile("th", "ไทย", "THB", "฿", '.', ',', Prefix),
        profile("vi", "Tiếng Việt", "VND", "₫", ',', '.', Suffix),
        profile("fr", "Français", "EUR", "€", ',', NARROW_NBSP, Suffix),
        profile("de", "Deutsch", "EUR", "€", ',', '.', Suffix),
        profile("it", "Italiano", "EUR", "€", ',', '.', Suffix),
        profile("ru", "Русский", "RUB", "₽", ',', NBSP, Suffix),
        profile("ar", "العربية", "SAR", "ر.س", '.', ',', Suffix),
        LocaleProfile {
            grouping: Grouping::Indian,
            ..profile("hi", "हिन्दी", "INR", "₹", '.', ',', Prefix)
        },
        profile("id", "Bahasa Indonesia", "IDR", "Rp", ',', '.', PrefixSpaced),
        profile("nl", "Nederlands", "EUR", "€", ',', '.', PrefixSpaced),
        profile("tr", "Türkçe", "TRY", "₺", ',', '.', Prefix),
        LocaleProfile {
            min_grouping_digits: 2,
            ..profile("pl", "Polski", "PLN", "zł", ',', NBSP, Suffix)
        },
    ]
};

static LOCALE_INDEX: Lazy<HashMap<&'static str, &'static LocaleProfile>> =
    Lazy::new(|| LOCALES.iter().map(|p| (p.code, p)).collect());

/// Primary language subtag of a locale tag: `"pt-BR"` and `"pt_BR.UTF-8"` both give `"pt"`.
pub fn primary_subtag(tag: &str) -> String {
    tag.split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Look up a locale profile, falling back to English (the first table entry).
pub fn locale_profile(lang: &str) -> &'static LocaleProfile {
    let code = primary_subtag(lang);
    LOCALE_INDEX
        .get(code.as_str())
        .copied()
        .unwrap_or(&LOCALES[0])
}

/// True if `lang` resolves to a profile without falling back
pub fn is_supported(lang: &str) -> bool {
    LOCALE_INDEX.contains_key(primary_subtag(lang).as_str())
}

/// Currency for a language; USD / `$` when the language is unknown.
pub fn currency_profile(lang: &str) -> CurrencyProfile {
    locale_profile(lang).currency
}

/// Format a monetary value with the language's currency and two fraction digits.
pub fn format_currency(value: f64, lang: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let profile = locale_profile(lang);
    let (negative, number) = format_fixed(value, 2, profile);
    let sign = if negative { "-" } else { "" };
    let symbol = profile.currency.symbol;

    match profile.placement {
        SymbolPlacement::Prefix => format!("{sign}{symbol}{number}"),
        SymbolPlacement::PrefixSpaced => format!("{sign}{symbol}{NBSP}{number}"),
        SymbolPlacement::Suffix => format!("{sign}{number}{NBSP}{symbol}"),
    }
}

/// Format a whole number of units with locale grouping (no currency).
pub fn format_units(value: f64, lang: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (negative, number) = format_fixed(value, 0, locale_profile(lang));
    if negative {
        format!("-{number}")
    } else {
        number
    }
}

/// Format a percentage with two decimals and a `%` suffix (no grouping).
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Round to `decimals`, group the integer part and apply the locale's separators.
///
/// Returns the sign separately so currency placement can put it before the symbol.
/// A value that rounds to zero is never negative.
fn format_fixed(value: f64, decimals: usize, profile: &LocaleProfile) -> (bool, String) {
    let rounded = format!("{:.*}", decimals, value.abs());
    let is_zero = rounded.chars().all(|c| c == '0' || c == '.');
    let negative = value.is_sign_negative() && !is_zero;

    let (integer, fraction) = match rounded.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rounded.as_str(), None),
    };

    let mut out = group_digits(integer, profile);
    if let Some(fraction) = fraction {
        out.push(profile.decimal_separator);
        out.push_str(fraction);
    }
    (negative, out)
}

fn group_digits(digits: &str, profile: &LocaleProfile) -> String {
    if digits.len() < 3 + profile.min_grouping_digits {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let group_size = match profile.grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group_size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);

    let separator = profile.group_separator.to_string();
    groups.join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_lookup() {
        assert_eq!(currency_profile("en"), CurrencyProfile { iso_code: "USD", symbol: "$" });
        assert_eq!(currency_profile("ko").iso_code, "KRW");
        assert_eq!(currency_profile("pt-BR").symbol, "R$");
        assert_eq!(currency_profile("xx"), CurrencyProfile { iso_code: "USD", symbol: "$" });
        assert_eq!(currency_profile(""), CurrencyProfile { iso_code: "USD", symbol: "$" });
    }

    #[test]
    fn test_locale_table_is_unique() {
        assert_eq!(LOCALE_INDEX.len(), LOCALES.len());
        assert!(is_supported("ko_KR.UTF-8"));
        assert!(!is_supported("sv"));
    }

    #[test]
    fn test_format_currency_prefix() {
        assert_eq!(format_currency(1126.825030, "en"), "$1,126.83");
        assert_eq!(format_currency(0.0, "en"), "$0.00");
        assert_eq!(format_currency(1234567.891, "ko"), "₩1,234,567.89");
        assert_eq!(format_currency(-500.0, "en"), "-$500.00");
    }

    #[test]
    fn test_format_currency_suffix() {
        assert_eq!(format_currency(1234.5, "de"), "1.234,50\u{a0}€");
        assert_eq!(format_currency(-1234.5, "de"), "-1.234,50\u{a0}€");
        assert_eq!(format_currency(1234567.0, "fr"), "1\u{202f}234\u{202f}567,00\u{a0}€");
    }

    #[test]
    fn test_format_currency_prefix_spaced() {
        assert_eq!(format_currency(1234.5, "pt"), "R$\u{a0}1.234,50");
        assert_eq!(format_currency(99.999, "nl"), "€\u{a0}100,00");
    }

    #[test]
    fn test_min_grouping_digits() {
        assert_eq!(format_currency(1234.0, "es"), "1234,00\u{a0}€");
        assert_eq!(format_currency(12345.0, "es"), "12.345,00\u{a0}€");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(1234567.0, "hi"), "₹12,34,567.00");
        assert_eq!(format_currency(123.0, "hi"), "₹123.00");
    }

    #[test]
    fn test_negative_zero_is_not_signed() {
        assert_eq!(format_currency(-0.001, "en"), "$0.00");
        assert_eq!(format_currency(-0.0, "de"), "0,00\u{a0}€");
    }

    #[test]
    fn test_format_units_and_percent() {
        assert_eq!(format_units(334.0, "en"), "334");
        assert_eq!(format_units(12345.0, "de"), "12.345");
        assert_eq!(format_percent(50.0), "50.00%");
        assert_eq!(format_percent(-12.5), "-12.50%");
    }
}
