use tracing::debug;

use crate::core::bands::UncertaintyModel;
use crate::core::palette::Palette;
use crate::core::types::{Scenario, ScenarioSeries, YearAxis};
use crate::error::PageResult;

/// Packages scenarios into display-ready series.
///
/// Colors come from `palette` by scenario index (cycling). Bands are attached
/// only when an uncertainty model is supplied. No validation is performed;
/// use [`SeriesBuilder`] when the output must be checked against an axis.
#[must_use]
pub fn build_series(
    scenarios: &[Scenario],
    palette: &Palette,
    bands: Option<UncertaintyModel>,
) -> Vec<ScenarioSeries> {
    scenarios
        .iter()
        .enumerate()
        .map(|(index, scenario)| ScenarioSeries {
            label: scenario.label.clone(),
            points: scenario.points.clone(),
            color: palette.color_at(index),
            bands: bands.map(|model| model.derive(&scenario.points)),
        })
        .collect()
}

/// Axis-aware series builder.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuilder {
    axis: YearAxis,
    palette: Palette,
    bands: Option<UncertaintyModel>,
}

impl SeriesBuilder {
    #[must_use]
    pub fn new(axis: YearAxis) -> Self {
        Self {
            axis,
            palette: Palette::default(),
            bands: None,
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_bands(mut self, model: UncertaintyModel) -> Self {
        self.bands = Some(model);
        self
    }

    #[must_use]
    pub fn with_optional_bands(mut self, model: Option<UncertaintyModel>) -> Self {
        self.bands = model;
        self
    }

    #[must_use]
    pub fn axis(&self) -> YearAxis {
        self.axis
    }

    pub fn build(&self, scenarios: &[Scenario]) -> PageResult<Vec<ScenarioSeries>> {
        let series = build_series(scenarios, &self.palette, self.bands);
        for entry in &series {
            entry.validate(self.axis)?;
        }
        debug!(
            count = series.len(),
            with_bands = self.bands.is_some(),
            "built scenario series"
        );
        Ok(series)
    }
}
