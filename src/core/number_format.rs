use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitudes outside `[PLAIN_MIN, PLAIN_MAX)` serialize in exponent form and
/// so never match a plain digit string.
const PLAIN_MIN: f64 = 1e-6;
const PLAIN_MAX: f64 = 1e21;

/// Separators for the one locale the page renders numbers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
    pub minus_sign: char,
}

impl NumberLocale {
    /// Finnish formatting: no-break space groups, comma decimals, U+2212 minus.
    pub const FI_FI: Self = Self {
        group_separator: '\u{a0}',
        decimal_separator: ',',
        minus_sign: '\u{2212}',
    };

    /// Formats `value` with `precision` fraction digits and no grouping.
    #[must_use]
    pub fn format_decimal(self, value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }
        let text = format!("{value:.precision$}");
        let text = text.replace('.', &self.decimal_separator.to_string());
        match text.strip_prefix('-') {
            Some(rest) if rest.chars().any(|c| c.is_ascii_digit() && c != '0') => {
                format!("{}{rest}", self.minus_sign)
            }
            Some(rest) => rest.to_owned(),
            None => text,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::FI_FI
    }
}

/// Cleans a raw cell for numeric parsing.
///
/// Trims, removes every whitespace character (including no-break spaces used
/// as thousands separators) and turns the first decimal comma into a point.
#[must_use]
pub fn normalize_numeric_text(raw: &str) -> String {
    let compact: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();
    compact.replacen(',', ".", 1)
}

/// Parses an already normalized string as a plain number.
///
/// Accepts only strings that are exactly the shortest serialization of the
/// parsed value, so `"007"`, `"+5"`, `"1e3"`, `"12.50"`, `"-0"` and codes
/// such as `"12.3.4"` are all rejected. Magnitudes below `1e-6` or from
/// `1e21` upward are rejected too, since their shortest form is exponential.
#[must_use]
pub fn parse_plain_number(normalized: &str) -> Option<f64> {
    if normalized.is_empty() {
        return None;
    }
    let value: f64 = normalized.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let magnitude = value.abs();
    if value != 0.0 && !(PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return None;
    }
    (canonical_number_text(value) == normalized).then_some(value)
}

/// Same acceptance rule as [`parse_plain_number`], keeping the exact digits
/// of the input instead of the nearest binary float.
#[must_use]
pub fn parse_plain_decimal(normalized: &str) -> Option<Decimal> {
    parse_plain_number(normalized)?;
    Decimal::from_str(normalized).ok()
}

fn canonical_number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

/// Rounds half away from zero and groups integer digits by thousands.
///
/// A negative value that rounds to zero keeps its minus sign (`-0.4` shows
/// as `−0`).
#[must_use]
pub fn format_grouped_integer(value: Decimal, locale: NumberLocale) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let digits = value
        .abs()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push(locale.minus_sign);
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`format_grouped_integer`]'s decoration.
///
/// Removes group separators and maps the locale minus sign back to `-`, so
/// the result parses with `str::parse`.
#[must_use]
pub fn strip_grouping(text: &str, locale: NumberLocale) -> String {
    text.chars()
        .filter(|c| *c != locale.group_separator)
        .map(|c| if c == locale.minus_sign { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_spaces_and_first_comma() {
        assert_eq!(normalize_numeric_text(" 26 235 003 000 "), "26235003000");
        assert_eq!(normalize_numeric_text("1\u{a0}595\u{a0}000"), "1595000");
        assert_eq!(normalize_numeric_text("12,5"), "12.5");
        assert_eq!(normalize_numeric_text("1,2,3"), "1.2,3");
    }

    #[test]
    fn plain_number_rejects_non_canonical_text() {
        assert_eq!(parse_plain_number("26235003000"), Some(26_235_003_000.0));
        assert_eq!(parse_plain_number("12.5"), Some(12.5));
        assert_eq!(parse_plain_number("-42"), Some(-42.0));
        for rejected in ["", "007", "+5", "1e3", "12.50", "-0", "12a", "inf", "NaN", "12.3.4"] {
            assert_eq!(parse_plain_number(rejected), None, "{rejected}");
        }
    }

    fn grouped(text: &str) -> String {
        let value = parse_plain_decimal(text).expect("plain number");
        format_grouped_integer(value, NumberLocale::FI_FI)
    }

    #[test]
    fn plain_number_rejects_exponent_magnitudes() {
        assert_eq!(parse_plain_number("0.000001"), Some(0.000_001));
        assert_eq!(parse_plain_number("0.0000001"), None);
        assert_eq!(parse_plain_number("1000000000000000000000"), None);
        assert_eq!(parse_plain_number("-1000000000000000000000"), None);
        assert!(parse_plain_number("999999999999999900000").is_some());
    }

    #[test]
    fn grouping_uses_no_break_space() {
        assert_eq!(grouped("0"), "0");
        assert_eq!(grouped("999"), "999");
        assert_eq!(grouped("1000"), "1\u{a0}000");
        assert_eq!(grouped("26235003000"), "26\u{a0}235\u{a0}003\u{a0}000");
    }

    #[test]
    fn grouping_keeps_source_digits_of_large_values() {
        assert_eq!(
            grouped("18446744073709552000"),
            "18\u{a0}446\u{a0}744\u{a0}073\u{a0}709\u{a0}552\u{a0}000"
        );
    }

    #[test]
    fn grouping_rounds_half_away_from_zero() {
        assert_eq!(grouped("1.5"), "2");
        assert_eq!(grouped("2.5"), "3");
        assert_eq!(grouped("-1234.5"), "\u{2212}1\u{a0}235");
    }

    #[test]
    fn negative_fraction_rounding_to_zero_keeps_minus_sign() {
        assert_eq!(grouped("-0.4"), "\u{2212}0");
        assert_eq!(grouped("0.4"), "0");
    }

    #[test]
    fn strip_grouping_inverts_decoration() {
        let fi = NumberLocale::FI_FI;
        let text = format_grouped_integer(Decimal::from(-9_876_543), fi);
        assert_eq!(strip_grouping(&text, fi), "-9876543");
    }

    #[test]
    fn decimal_format_uses_locale_separators() {
        let fi = NumberLocale::FI_FI;
        assert_eq!(fi.format_decimal(73.78, 2), "73,78");
        assert_eq!(fi.format_decimal(65.0, 0), "65");
        assert_eq!(fi.format_decimal(-1.26, 1), "\u{2212}1,3");
        assert_eq!(fi.format_decimal(-0.001, 2), "0,00");
    }
}
