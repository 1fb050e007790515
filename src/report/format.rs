//! Locale-aware number formatting.
//!
//! All figures in narratives, summaries, charts, and exports go through here so
//! the two locales differ only in digits and separators:
//!
//! - `en`: ASCII digits, `,` grouping, `.` decimal point
//! - `ar`: Arabic-Indic digits, `٬` grouping, `٫` decimal point

use crate::data::find_currency;
use crate::domain::Locale;
use crate::engine::round_half_up;
use crate::i18n::{self, Msg};

const AR_GROUP: char = '\u{066C}';
const AR_DECIMAL: char = '\u{066B}';
const AR_PERCENT: char = '\u{066A}';

/// Format `value` with digit grouping and between `min_frac` and `max_frac`
/// fraction digits (trailing zeros beyond `min_frac` are dropped).
pub fn format_number(value: f64, locale: Locale, min_frac: usize, max_frac: usize) -> String {
    if !value.is_finite() {
        return i18n::text(locale, Msg::NotAvailable).to_string();
    }
    let max_frac = max_frac.max(min_frac);
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };

    let mut frac = frac_part.to_string();
    while frac.len() > min_frac && frac.ends_with('0') {
        frac.pop();
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');
    let (group_sep, decimal_sep) = match locale {
        Locale::En => (',', '.'),
        Locale::Ar => (AR_GROUP, AR_DECIMAL),
    };

    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, group_sep));
    if !frac.is_empty() {
        out.push(decimal_sep);
        out.push_str(&frac);
    }
    localize_digits(&out, locale)
}

/// Whole number with grouping (half-up rounding).
pub fn format_integer(value: f64, locale: Locale) -> String {
    format_number(round_half_up(value), locale, 0, 0)
}

/// Ratios and multiples: up to two decimals.
pub fn format_ratio(value: f64, locale: Locale) -> String {
    format_number(value, locale, 0, 2)
}

/// Percent figure (value already in percent units, `12.5` means 12.5%).
pub fn format_percent(value: f64, locale: Locale, min_frac: usize, max_frac: usize) -> String {
    let n = format_number(value, locale, min_frac, max_frac);
    match locale {
        Locale::En => format!("{n}%"),
        Locale::Ar => format!("{n}{AR_PERCENT}"),
    }
}

/// Fixed number of decimals, no grouping (decimal rates such as `0.1000`).
pub fn format_decimal(value: f64, locale: Locale, places: usize) -> String {
    let s = format!("{:.*}", places, value);
    let s = match locale {
        Locale::En => s,
        Locale::Ar => s.replace('.', &AR_DECIMAL.to_string()),
    };
    localize_digits(&s, locale)
}

/// Whole-unit currency figure.
///
/// English puts the symbol first (with a space after alphabetic symbols such
/// as `SAR`); Arabic puts the Arabic symbol after the number. Unknown codes
/// fall back to the code itself.
pub fn format_currency(value: f64, currency_code: &str, locale: Locale) -> String {
    let n = format_integer(value.abs(), locale);
    let sign = if round_half_up(value) < 0.0 { "-" } else { "" };
    let symbol = find_currency(currency_code)
        .map(|c| c.symbol_for(locale))
        .unwrap_or(currency_code);

    match locale {
        Locale::En => {
            let spaced = symbol.chars().last().is_some_and(char::is_alphabetic);
            if spaced {
                format!("{sign}{symbol} {n}")
            } else {
                format!("{sign}{symbol}{n}")
            }
        }
        Locale::Ar => format!("{sign}{n} {symbol}"),
    }
}

/// Currency figure, or the localized "not available" text.
pub fn format_optional_currency(value: Option<f64>, currency_code: &str, locale: Locale) -> String {
    match value {
        Some(v) => format_currency(v, currency_code, locale),
        None => i18n::text(locale, Msg::NotAvailable).to_string(),
    }
}

/// Compact axis label: `1.5M`, `250K`, `900`.
pub fn compact_axis(value: f64, locale: Locale) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let body = if abs >= 1_000_000.0 {
        format!("{}M", format_decimal(abs / 1_000_000.0, locale, 1))
    } else if abs >= 1_000.0 {
        format!("{}K", format_decimal(abs / 1_000.0, locale, 0))
    } else {
        format_decimal(abs, locale, 0)
    };
    if body.trim_end_matches(['M', 'K']).chars().all(|c| c == '0' || c == '٠') {
        return body;
    }
    format!("{sign}{body}")
}

/// Swap ASCII digits for Arabic-Indic digits when `locale` is Arabic.
pub fn localize_digits(s: &str, locale: Locale) -> String {
    match locale {
        Locale::En => s.to_string(),
        Locale::Ar => s
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap_or(c),
                _ => c,
            })
            .collect(),
    }
}

/// Map Arabic-Indic digits and separators back to ASCII (for parsing input).
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from_u32('0' as u32 + (c as u32 - 0x0660)).unwrap_or(c),
            '\u{06F0}'..='\u{06F9}' => char::from_u32('0' as u32 + (c as u32 - 0x06F0)).unwrap_or(c),
            AR_DECIMAL => '.',
            AR_GROUP => ',',
            _ => c,
        })
        .collect()
}

fn group_digits(int_part: &str, sep: char) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_grouping_and_fraction_trimming() {
        assert_eq!(format_number(1_234_567.0, Locale::En, 0, 0), "1,234,567");
        assert_eq!(format_number(12.5, Locale::En, 1, 2), "12.5");
        assert_eq!(format_number(12.0, Locale::En, 1, 2), "12.0");
        assert_eq!(format_number(0.126, Locale::En, 0, 2), "0.13");
        assert_eq!(format_number(999.0, Locale::En, 0, 0), "999");
    }

    #[test]
    fn negative_zero_is_not_signed() {
        assert_eq!(format_number(-0.0001, Locale::En, 0, 2), "0");
        assert_eq!(format_number(-1500.0, Locale::En, 0, 0), "-1,500");
    }

    #[test]
    fn arabic_digits_and_separators() {
        assert_eq!(format_number(1_500_000.0, Locale::Ar, 0, 0), "١٬٥٠٠٬٠٠٠");
        assert_eq!(format_percent(12.5, Locale::Ar, 1, 2), "١٢٫٥٪");
        assert_eq!(format_decimal(0.1, Locale::Ar, 4), "٠٫١٠٠٠");
    }

    #[test]
    fn currency_symbol_placement() {
        assert_eq!(format_currency(1_500_000.0, "USD", Locale::En), "$1,500,000");
        assert_eq!(format_currency(1_500_000.0, "SAR", Locale::En), "SAR 1,500,000");
        assert_eq!(format_currency(1_500_000.0, "SAR", Locale::Ar), "١٬٥٠٠٬٠٠٠ ر.س");
        assert_eq!(format_currency(-250.4, "USD", Locale::En), "-$250");
        assert_eq!(format_currency(10.0, "XYZ", Locale::En), "XYZ 10");
        assert_eq!(format_optional_currency(None, "USD", Locale::Ar), "غير متوفر");
    }

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(format_currency(2.5, "USD", Locale::En), "$3");
        assert_eq!(format_currency(0.4, "USD", Locale::En), "$0");
    }

    #[test]
    fn compact_axis_labels() {
        assert_eq!(compact_axis(1_500_000.0, Locale::En), "1.5M");
        assert_eq!(compact_axis(250_000.0, Locale::En), "250K");
        assert_eq!(compact_axis(900.0, Locale::En), "900");
        assert_eq!(compact_axis(-2_000.0, Locale::En), "-2K");
        assert_eq!(compact_axis(1_500_000.0, Locale::Ar), "١٫٥M");
    }

    #[test]
    fn normalize_digits_round_trips_arabic_input() {
        assert_eq!(normalize_digits("١٬٢٥٠٫٥"), "1,250.5");
        assert_eq!(normalize_digits("42"), "42");
    }
}
