use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::number_format::{
    NumberLocale, format_grouped_integer, normalize_numeric_text, parse_plain_decimal,
};

/// How a column's cells are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Structured dotted codes (`28.89.31`); never formatted as numbers.
    Identifier,
    /// Formatted with thousands grouping when the cell parses as a plain number.
    Numeric,
    /// Free text, passed through trimmed.
    Text,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedCell {
    pub display_text: String,
    pub is_numeric: bool,
}

impl FormattedCell {
    #[must_use]
    pub fn text(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            is_numeric: false,
        }
    }

    #[must_use]
    pub fn numeric(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            is_numeric: true,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::text(String::new())
    }
}

/// Classifies and formats one raw cell for a column of the given kind.
///
/// The returned text is not HTML-escaped.
#[must_use]
pub fn classify_cell(kind: ColumnKind, raw: &str) -> FormattedCell {
    classify_cell_with_locale(kind, raw, NumberLocale::FI_FI)
}

#[must_use]
pub fn classify_cell_with_locale(
    kind: ColumnKind,
    raw: &str,
    locale: NumberLocale,
) -> FormattedCell {
    let trimmed = raw.trim();
    match kind {
        ColumnKind::Identifier | ColumnKind::Text => FormattedCell::text(trimmed),
        ColumnKind::Numeric => match parse_numeric_cell(trimmed) {
            Some(value) => FormattedCell::numeric(format_grouped_integer(value, locale)),
            None => FormattedCell::text(trimmed),
        },
    }
}

fn parse_numeric_cell(trimmed: &str) -> Option<Decimal> {
    // Two or more points mark a hierarchical code, never a number.
    if trimmed.matches('.').count() > 1 {
        return None;
    }
    parse_plain_decimal(&normalize_numeric_text(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_cells_stay_textual() {
        assert_eq!(
            classify_cell(ColumnKind::Identifier, " 28.89.31 "),
            FormattedCell::text("28.89.31")
        );
        assert_eq!(
            classify_cell(ColumnKind::Identifier, "1000"),
            FormattedCell::text("1000")
        );
    }

    #[test]
    fn numeric_cells_are_grouped() {
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "26 235 003 000"),
            FormattedCell::numeric("26\u{a0}235\u{a0}003\u{a0}000")
        );
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "1595000"),
            FormattedCell::numeric("1\u{a0}595\u{a0}000")
        );
    }

    #[test]
    fn decimal_comma_is_rounded_to_integer() {
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "1234,5"),
            FormattedCell::numeric("1\u{a0}235")
        );
    }

    #[test]
    fn dotted_codes_in_numeric_columns_pass_through() {
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "28.89.31"),
            FormattedCell::text("28.89.31")
        );
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "29.90.52 (29.90.30)"),
            FormattedCell::text("29.90.52 (29.90.30)")
        );
    }

    #[test]
    fn partial_parses_are_rejected() {
        for raw in ["12a", "Työeläkeindeksi (TyEL)", "1e3", "0012"] {
            let cell = classify_cell(ColumnKind::Numeric, raw);
            assert!(!cell.is_numeric, "{raw}");
            assert_eq!(cell.display_text, raw);
        }
    }

    #[test]
    fn empty_cells_are_empty_text() {
        for kind in [ColumnKind::Identifier, ColumnKind::Numeric, ColumnKind::Text] {
            assert_eq!(classify_cell(kind, ""), FormattedCell::empty());
            assert_eq!(classify_cell(kind, "   "), FormattedCell::empty());
        }
    }

    #[test]
    fn numeric_cells_match_locale_display_at_the_edges() {
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "18446744073709552000"),
            FormattedCell::numeric(
                "18\u{a0}446\u{a0}744\u{a0}073\u{a0}709\u{a0}552\u{a0}000"
            )
        );
        assert_eq!(
            classify_cell(ColumnKind::Numeric, "-0.4"),
            FormattedCell::numeric("\u{2212}0")
        );
        for raw in ["0.0000001", "1000000000000000000000"] {
            assert_eq!(classify_cell(ColumnKind::Numeric, raw), FormattedCell::text(raw));
        }
    }

    #[test]
    fn text_columns_never_format() {
        assert_eq!(
            classify_cell(ColumnKind::Text, "2025"),
            FormattedCell::text("2025")
        );
    }
}
