use crate::error::PageResult;
use crate::render::{PageFrame, Renderer};

/// No-op renderer used by tests and dry runs.
///
/// It still validates frame content and records a few counts so callers can
/// check the page shape without producing markup.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_dataset_count: usize,
    pub last_table_row_count: usize,
    pub last_section_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PageFrame) -> PageResult<()> {
        frame.validate()?;
        self.last_dataset_count = frame.chart.data.datasets.len();
        self.last_table_row_count = frame.table.table().map_or(0, |table| table.row_count());
        self.last_section_count = frame.sections.len();
        Ok(())
    }
}
