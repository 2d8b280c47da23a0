use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Palette, UncertaintyModel, YearAxis};
use crate::data::IDENTIFIER_COLUMN;
use crate::error::{PageError, PageResult};

/// Display hints forwarded to the chart collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub border_width: f64,
    pub tension: f64,
    pub point_radius: f64,
    pub point_hover_radius: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_title: String,
    pub x_title: String,
    pub tooltip_decimals: u8,
    pub tooltip_suffix: String,
    pub tick_decimals: u8,
    pub tick_suffix: String,
    /// Fill opacity between upper and lower band lines.
    pub band_alpha: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            border_width: 3.0,
            tension: 0.4,
            point_radius: 4.0,
            point_hover_radius: 6.0,
            y_min: 60.0,
            y_max: 75.0,
            y_title: "Menot (mrd. €)".to_owned(),
            x_title: "Vuosi".to_owned(),
            tooltip_decimals: 2,
            tooltip_suffix: " mrd. €".to_owned(),
            tick_decimals: 0,
            tick_suffix: " mrd.".to_owned(),
            band_alpha: 0.12,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> PageResult<()> {
        for (name, value) in [
            ("border_width", self.border_width),
            ("point_radius", self.point_radius),
            ("point_hover_radius", self.point_hover_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PageError::InvalidConfig(format!(
                    "chart `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(PageError::InvalidConfig(
                "chart `tension` must be in [0, 1]".to_owned(),
            ));
        }
        if !self.y_min.is_finite() || !self.y_max.is_finite() || self.y_min >= self.y_max {
            return Err(PageError::InvalidConfig(format!(
                "chart y range must be finite and increasing: {}..{}",
                self.y_min, self.y_max
            )));
        }
        Ok(())
    }
}

/// Page-wide immutable configuration, loaded once before rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub lang: String,
    pub title: String,
    pub lead: String,
    pub years: YearAxis,
    pub palette: Palette,
    /// Bands are drawn only when a model is configured.
    pub uncertainty: Option<UncertaintyModel>,
    pub chart: ChartStyle,
    pub identifier_column: String,
    pub chart_script_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "fi".to_owned(),
            title: "Indeksisidonnaisten menojen kehitys 2025–2035".to_owned(),
            lead: "Valtion indeksisidonnaiset menot neljässä skenaariossa.".to_owned(),
            years: YearAxis::default(),
            palette: Palette::default(),
            uncertainty: None,
            chart: ChartStyle::default(),
            identifier_column: IDENTIFIER_COLUMN.to_owned(),
            chart_script_url: "https://cdn.jsdelivr.net/npm/chart.js".to_owned(),
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn with_years(mut self, years: YearAxis) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_uncertainty(mut self, model: UncertaintyModel) -> Self {
        self.uncertainty = Some(model);
        self
    }

    #[must_use]
    pub fn with_chart_style(mut self, chart: ChartStyle) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn validate(&self) -> PageResult<()> {
        self.chart.validate()?;
        if self.identifier_column.trim().is_empty() {
            return Err(PageError::InvalidConfig(
                "identifier_column must not be blank".to_owned(),
            ));
        }
        if let Some(model) = self.uncertainty {
            if ![model.start_pct, model.end_pct, model.z_score]
                .iter()
                .all(|v| v.is_finite() && *v >= 0.0)
            {
                return Err(PageError::InvalidConfig(
                    "uncertainty parameters must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(input: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PageError::InvalidConfig(format!("failed to parse page config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> PageResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> PageResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PageError::Serialization(format!("failed to serialize page config: {e}")))
    }
}
