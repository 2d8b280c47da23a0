use crate::error::{PageError, PageResult};
use crate::render::{ChartConfig, TABLE_SECTION_ID};
use crate::table::RenderedTable;

/// Result of the table pass: either a table or the message shown in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum TableOutcome {
    Rendered(RenderedTable),
    Failed { message: String },
}

impl TableOutcome {
    #[must_use]
    pub fn table(&self) -> Option<&RenderedTable> {
        match self {
            Self::Rendered(table) => Some(table),
            Self::Failed { .. } => None,
        }
    }
}

/// Collapsible block of static paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionSection {
    pub id: String,
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// Summary card for one scenario; cards fade in on scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCard {
    pub title: String,
    pub color: String,
    pub headline: String,
}

/// Backend-agnostic page content for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub lang: String,
    pub title: String,
    pub lead: String,
    pub chart_script_url: String,
    pub chart: ChartConfig,
    pub scenario_cards: Vec<ScenarioCard>,
    pub table_title: String,
    pub table: TableOutcome,
    pub sections: Vec<AccordionSection>,
}

impl PageFrame {
    /// Checks that chart datasets line up with their labels and that every
    /// table row has one cell per header.
    pub fn validate(&self) -> PageResult<()> {
        let label_count = self.chart.data.labels.len();
        for dataset in &self.chart.data.datasets {
            if dataset.data.len() != label_count {
                return Err(PageError::InvalidData(format!(
                    "dataset `{}` has {} values for {label_count} labels",
                    dataset.label,
                    dataset.data.len()
                )));
            }
        }

        if let Some(table) = self.table.table() {
            if let Some(index) = table
                .rows
                .iter()
                .position(|row| row.len() != table.column_count())
            {
                return Err(PageError::InvalidData(format!(
                    "table row {index} does not match the {} headers",
                    table.column_count()
                )));
            }
        }

        // The table accordion shares the id namespace with the text sections.
        let mut ids: Vec<&str> = self.sections.iter().map(|s| s.id.as_str()).collect();
        ids.push(TABLE_SECTION_ID);
        ids.sort_unstable();
        if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(PageError::InvalidData(format!(
                "accordion section id `{}` is used more than once",
                pair[0]
            )));
        }

        Ok(())
    }
}
