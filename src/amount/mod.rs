//! Locale-aware parsing of typed amounts.
//!
//! The amount field hands over whatever the user typed under their locale's
//! separator conventions. Parsing is total: anything that does not resolve to
//! a decimal yields `None`, which downstream gates treat as "not a valid
//! positive amount" rather than an error.

use std::str::FromStr;

pub use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Separator conventions of the active locale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocaleFormat {
    /// Character separating the integer and fractional parts.
    pub decimal_separator: char,
    /// Thousands separator, stripped before parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping_separator: Option<char>,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        LocaleFormat {
            decimal_separator: '.',
            grouping_separator: None,
        }
    }
}

impl LocaleFormat {
    /// Comma-decimal convention ("50,5"), grouping by dot.
    pub fn comma_decimal() -> Self {
        LocaleFormat {
            decimal_separator: ',',
            grouping_separator: Some('.'),
        }
    }
}

/// Parse a locale-formatted numeric string into a decimal.
///
/// Grouping separators are stripped, the first occurrence of the locale's
/// decimal separator becomes `.`, and the result is handed to the decimal
/// parser. A plain `.` fraction is accepted under any locale whose grouping
/// separator is not `.` itself. Returns `None` for empty or malformed input.
pub fn parse_locale_number(text: &str, locale: &LocaleFormat) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut normalized = String::with_capacity(trimmed.len());
    let mut seen_decimal = false;
    for ch in trimmed.chars() {
        if Some(ch) == locale.grouping_separator {
            continue;
        }
        if ch == locale.decimal_separator && !seen_decimal {
            seen_decimal = true;
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_locale_number, Decimal, LocaleFormat};

    #[test]
    fn dot_locale_parses_plain_decimals() {
        let locale = LocaleFormat::default();
        assert_eq!(
            parse_locale_number("50.5", &locale),
            Some(Decimal::new(505, 1))
        );
        assert_eq!(parse_locale_number(" 42 ", &locale), Some(Decimal::from(42)));
    }

    #[test]
    fn comma_locale_accepts_both_separators() {
        let locale = LocaleFormat::comma_decimal();
        assert_eq!(
            parse_locale_number("50,5", &locale),
            Some(Decimal::new(505, 1))
        );
        // Grouping dots are stripped, so "1.050,25" reads as 1050.25.
        assert_eq!(
            parse_locale_number("1.050,25", &locale),
            Some(Decimal::new(105_025, 2))
        );
    }

    #[test]
    fn malformed_input_yields_none() {
        let locale = LocaleFormat::default();
        assert_eq!(parse_locale_number("", &locale), None);
        assert_eq!(parse_locale_number("abc", &locale), None);
        assert_eq!(parse_locale_number("1.2.3", &locale), None);
    }

    #[test]
    fn repeated_decimal_separator_fails_the_parse() {
        let locale = LocaleFormat::comma_decimal();
        assert_eq!(parse_locale_number("1,2,3", &locale), None);
    }
}
