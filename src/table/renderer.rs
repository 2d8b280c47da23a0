use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::error::{PageError, PageResult};
use crate::table::cell::FormattedCell;
use crate::table::schema::TableSchema;

/// Cells of one body row; the bundled dataset has four columns.
pub type FormattedRow = SmallVec<[FormattedCell; 4]>;

/// Backend-agnostic table structure, ready for escaping and markup.
///
/// Every row holds exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub rows: Vec<FormattedRow>,
}

impl RenderedTable {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn numeric_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_numeric)
            .count()
    }
}

/// Classifies every body cell against `schema`.
///
/// Fails with [`PageError::NoData`] when the schema has no columns or there
/// are no rows. Short rows are padded with empty cells; surplus cells are
/// dropped.
pub fn render_table<R, S>(schema: &TableSchema, rows: &[R]) -> PageResult<RenderedTable>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    if schema.is_empty() || rows.is_empty() {
        return Err(PageError::NoData);
    }

    let headers: Vec<String> = schema.headers().map(str::to_owned).collect();
    let mut rendered = Vec::with_capacity(rows.len());

    for (row_index, row) in rows.iter().enumerate() {
        let cells = row.as_ref();
        if cells.len() > headers.len() {
            warn!(
                row = row_index,
                cells = cells.len(),
                columns = headers.len(),
                "dropping surplus cells"
            );
        }

        let formatted: FormattedRow = headers
            .iter()
            .enumerate()
            .map(|(column, header)| match cells.get(column) {
                Some(raw) => schema.classify_cell(header, raw.as_ref()),
                None => FormattedCell::empty(),
            })
            .collect();
        rendered.push(formatted);
    }

    debug!(
        rows = rendered.len(),
        columns = headers.len(),
        "rendered table"
    );

    Ok(RenderedTable {
        headers,
        rows: rendered,
    })
}

/// Renders a record list whose first entry is the header row.
///
/// `identifier_column` names the column holding dotted codes; every other
/// column is formatted as a number when it parses as one.
pub fn render_table_from_records<R, S>(
    records: &[R],
    identifier_column: &str,
) -> PageResult<RenderedTable>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let Some((header_row, rows)) = records.split_first() else {
        return Err(PageError::NoData);
    };
    if header_row.as_ref().is_empty() || rows.is_empty() {
        return Err(PageError::NoData);
    }

    let schema = TableSchema::from_headers(header_row.as_ref(), identifier_column)?;
    render_table(&schema, rows)
}
