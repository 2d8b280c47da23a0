use tracing::{error, info};

use crate::api::PageConfig;
use crate::core::{NumberLocale, Scenario, ScenarioSeries, SeriesBuilder};
use crate::data;
use crate::error::{PageError, PageResult};
use crate::render::{
    AccordionSection, ChartConfig, HtmlRenderer, PageFrame, Renderer, ScenarioCard, TableOutcome,
};
use crate::table::{Dataset, TableSchema, render_table};

/// Assembles the page from configuration, scenarios and the dataset.
///
/// All inputs are passed in explicitly; the builder holds no page state
/// beyond them, so repeated builds produce identical frames.
#[derive(Debug, Clone)]
pub struct PageBuilder {
    config: PageConfig,
    scenarios: Vec<Scenario>,
    dataset: Dataset,
    table_title: String,
    sections: Vec<AccordionSection>,
}

impl PageBuilder {
    /// Builder over the bundled scenarios, dataset and explanatory sections.
    pub fn new(config: PageConfig) -> PageResult<Self> {
        let sections = [data::METHODOLOGY, data::LIMITATIONS, data::REFERENCES]
            .into_iter()
            .map(|text| AccordionSection {
                id: text.id.to_owned(),
                title: text.title.to_owned(),
                paragraphs: text.paragraphs.iter().map(|p| (*p).to_owned()).collect(),
            })
            .collect();

        Ok(Self {
            config,
            scenarios: data::scenarios(),
            dataset: Dataset::bundled()?,
            table_title: "Indeksisidonnaiset momentit".to_owned(),
            sections,
        })
    }

    #[must_use]
    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    /// Replaces the dataset with raw records whose first entry is the header
    /// row, inferring the schema from the configured identifier column.
    pub fn with_records(mut self, records: &[Vec<String>]) -> PageResult<Self> {
        let (columns, rows) = match records.split_first() {
            Some((headers, rows)) => (
                TableSchema::from_headers(headers, &self.config.identifier_column)?,
                rows.to_vec(),
            ),
            None => (TableSchema::default(), Vec::new()),
        };
        self.dataset = Dataset { columns, rows };
        Ok(self)
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<AccordionSection>) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn build_series(&self) -> PageResult<Vec<ScenarioSeries>> {
        SeriesBuilder::new(self.config.years)
            .with_palette(self.config.palette.clone())
            .with_optional_bands(self.config.uncertainty)
            .build(&self.scenarios)
    }

    /// Table pass. Missing data becomes an inline message; every other
    /// failure propagates.
    pub fn build_table(&self) -> PageResult<TableOutcome> {
        match render_table(&self.dataset.columns, &self.dataset.rows) {
            Ok(table) => Ok(TableOutcome::Rendered(table)),
            Err(PageError::NoData) => {
                let message = PageError::NoData.to_string();
                error!(%message, "table rendering failed");
                Ok(TableOutcome::Failed { message })
            }
            Err(err) => Err(err),
        }
    }

    pub fn build(&self) -> PageResult<PageFrame> {
        self.config.validate()?;

        let series = self.build_series()?;
        let chart = ChartConfig::from_series(self.config.years, &series, &self.config.chart)?;
        let scenario_cards = self.scenario_cards(&series);
        let table = self.build_table()?;

        info!(
            series = series.len(),
            table_rows = table.table().map_or(0, |t| t.row_count()),
            "page frame built"
        );

        Ok(PageFrame {
            lang: self.config.lang.clone(),
            title: self.config.title.clone(),
            lead: self.config.lead.clone(),
            chart_script_url: self.config.chart_script_url.clone(),
            chart,
            scenario_cards,
            table_title: self.table_title.clone(),
            table,
            sections: self.sections.clone(),
        })
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> PageResult<()> {
        let frame = self.build()?;
        renderer.render(&frame)
    }

    pub fn render_html(&self) -> PageResult<String> {
        let mut renderer = HtmlRenderer::default();
        self.render_with(&mut renderer)?;
        Ok(renderer.into_document())
    }

    fn scenario_cards(&self, series: &[ScenarioSeries]) -> Vec<ScenarioCard> {
        let locale = NumberLocale::FI_FI;
        let style = &self.config.chart;
        let end_year = self.config.years.end_year();
        series
            .iter()
            .map(|entry| {
                let last = entry.points.last().copied().unwrap_or_default();
                ScenarioCard {
                    title: entry.label.clone(),
                    color: entry.color.to_css_hex(),
                    headline: format!(
                        "{end_year}: {}{}",
                        locale.format_decimal(last, usize::from(style.tooltip_decimals)),
                        style.tooltip_suffix
                    ),
                }
            })
            .collect()
    }
}
