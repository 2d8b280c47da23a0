use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::table::cell::{ColumnKind, FormattedCell, classify_cell};

/// Named column with an explicit interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered, name-unique column layout of a dataset.
///
/// `IndexMap` keeps declaration order, which is also the rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableSchema {
    columns: IndexMap<String, ColumnKind>,
}

impl TableSchema {
    /// Builds a schema, rejecting blank or duplicate column names.
    pub fn new(columns: impl IntoIterator<Item = ColumnSpec>) -> PageResult<Self> {
        let mut map = IndexMap::new();
        for (index, column) in columns.into_iter().enumerate() {
            if column.name.trim().is_empty() {
                return Err(PageError::InvalidSchema(format!(
                    "column {index} has a blank name"
                )));
            }
            if map.insert(column.name.clone(), column.kind).is_some() {
                return Err(PageError::InvalidSchema(format!(
                    "column `{}` is declared twice",
                    column.name
                )));
            }
        }
        Ok(Self { columns: map })
    }

    /// Schema for a bare header row: `identifier_column` holds codes, every
    /// other column is numeric-if-parseable.
    pub fn from_headers<S: AsRef<str>>(headers: &[S], identifier_column: &str) -> PageResult<Self> {
        Self::new(headers.iter().map(|header| {
            let name = header.as_ref();
            let kind = if name == identifier_column {
                ColumnKind::Identifier
            } else {
                ColumnKind::Numeric
            };
            ColumnSpec::new(name, kind)
        }))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnSpec> + '_ {
        self.columns
            .iter()
            .map(|(name, kind)| ColumnSpec::new(name.clone(), *kind))
    }

    /// Kind declared for `header`; unknown headers are treated as numeric.
    #[must_use]
    pub fn kind_of(&self, header: &str) -> ColumnKind {
        self.columns
            .get(header)
            .copied()
            .unwrap_or(ColumnKind::Numeric)
    }

    #[must_use]
    pub fn classify_cell(&self, header: &str, raw: &str) -> FormattedCell {
        classify_cell(self.kind_of(header), raw)
    }
}

impl Serialize for TableSchema {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.columns())
    }
}

impl<'de> Deserialize<'de> for TableSchema {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = Vec::<ColumnSpec>::deserialize(deserializer)?;
        Self::new(columns).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_headers_marks_identifier_column() {
        let schema =
            TableSchema::from_headers(&["Momentti", "Kuvaus", "Lähtöarvo 2025"], "Momentti")
                .expect("schema");
        assert_eq!(schema.kind_of("Momentti"), ColumnKind::Identifier);
        assert_eq!(schema.kind_of("Lähtöarvo 2025"), ColumnKind::Numeric);
        assert_eq!(schema.kind_of("missing"), ColumnKind::Numeric);
        assert_eq!(
            schema.headers().collect::<Vec<_>>(),
            vec!["Momentti", "Kuvaus", "Lähtöarvo 2025"]
        );
    }

    #[test]
    fn blank_header_is_rejected() {
        let err = TableSchema::from_headers(&["Momentti", " ", "Arvo"], "Momentti")
            .expect_err("blank header");
        assert!(matches!(err, PageError::InvalidSchema(_)));
    }

    #[test]
    fn duplicate_header_is_rejected() {
        let err = TableSchema::from_headers(&["Arvo", "Arvo"], "Momentti").expect_err("dup");
        assert!(matches!(err, PageError::InvalidSchema(_)));
    }

    #[test]
    fn schema_json_keeps_declaration_order() {
        let schema = TableSchema::new([
            ColumnSpec::new("b", ColumnKind::Text),
            ColumnSpec::new("a", ColumnKind::Identifier),
        ])
        .expect("schema");
        let json = serde_json::to_string(&schema).expect("serialize");
        assert_eq!(
            json,
            r#"[{"name":"b","kind":"text"},{"name":"a","kind":"identifier"}]"#
        );
        let back: TableSchema = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, schema);
    }
}
