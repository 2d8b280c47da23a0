use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::{PageError, PageResult};
use crate::table::renderer::{RenderedTable, render_table};
use crate::table::schema::TableSchema;

/// Schema plus positional rows, the JSON form of a page table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: TableSchema,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// The index-linked expenditure table shipped with the crate.
    pub fn bundled() -> PageResult<Self> {
        Ok(Self {
            columns: data::index_table_schema()?,
            rows: data::index_table_rows(),
        })
    }

    pub fn from_json_str(input: &str) -> PageResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PageError::InvalidData(format!("failed to parse dataset json: {e}")))
    }

    pub fn load(path: &Path) -> PageResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn render(&self) -> PageResult<RenderedTable> {
        render_table(&self.columns, &self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_json_with_empty_rows_renders_no_data() {
        let dataset = Dataset::from_json_str(
            r#"{"columns": [{"name": "Momentti", "kind": "identifier"}], "rows": []}"#,
        )
        .expect("dataset");
        assert!(matches!(dataset.render(), Err(PageError::NoData)));
    }

    #[test]
    fn dataset_json_with_blank_column_is_rejected() {
        let err = Dataset::from_json_str(r#"{"columns": [{"name": "", "kind": "text"}], "rows": []}"#)
            .expect_err("blank column");
        assert!(matches!(err, PageError::InvalidData(_)));
    }

    #[test]
    fn bundled_dataset_renders() {
        let table = Dataset::bundled().expect("bundled").render().expect("table");
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.numeric_cell_count(), table.row_count());
    }
}
