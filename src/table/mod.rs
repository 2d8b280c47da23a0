//! Dataset table: cell classification, number formatting and row layout.

pub mod cell;
pub mod dataset;
pub mod renderer;
pub mod schema;

pub use cell::{ColumnKind, FormattedCell, classify_cell, classify_cell_with_locale};
pub use dataset::Dataset;
pub use renderer::{FormattedRow, RenderedTable, render_table, render_table_from_records};
pub use schema::{ColumnSpec, TableSchema};
