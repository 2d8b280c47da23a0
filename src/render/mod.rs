mod assets;
mod chart_config;
mod frame;
mod html;
mod null_renderer;

pub use assets::{GLUE_JS, INLINE_CSS};
pub use chart_config::{ChartConfig, ChartDataset, ChartFormatting, DatasetFill};
pub use frame::{AccordionSection, PageFrame, ScenarioCard, TableOutcome};
pub use html::{
    CHART_CANVAS_ID, HtmlRenderer, TABLE_CONTAINER_ID, TABLE_SECTION_ID, accordion_markup,
    error_panel_markup, escape_html, table_markup, table_outcome_markup,
};
pub use null_renderer::NullRenderer;

use crate::error::PageResult;

/// Contract implemented by any page backend.
///
/// Backends receive a fully materialized `PageFrame`, so markup generation
/// stays isolated from series derivation and table classification.
pub trait Renderer {
    fn render(&mut self, frame: &PageFrame) -> PageResult<()>;
}
