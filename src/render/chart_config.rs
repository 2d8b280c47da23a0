use serde::{Deserialize, Serialize};

use crate::api::ChartStyle;
use crate::core::{ScenarioSeries, YearAxis};
use crate::error::{PageError, PageResult};

/// Chart.js `line` configuration consumed by the page glue script.
///
/// Callbacks cannot travel through JSON, so tooltip and tick formatting are
/// carried in [`ChartFormatting`] and installed client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ChartData,
    pub options: ChartOptions,
    pub formatting: ChartFormatting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<i32>,
    pub datasets: Vec<ChartDataset>,
}

/// `false` for plain lines, or a relative target such as `"-1"` for bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetFill {
    Enabled(bool),
    Target(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: f64,
    pub tension: f64,
    pub fill: DatasetFill,
    pub point_radius: f64,
    pub point_hover_radius: f64,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFormatting {
    pub tooltip_decimals: u8,
    pub tooltip_suffix: String,
    pub tick_decimals: u8,
    pub tick_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub aspect_ratio: f64,
    pub plugins: PluginOptions,
    pub scales: ScaleOptions,
    pub interaction: InteractionOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub title: Toggle,
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: String,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub padding: u32,
    pub use_point_style: bool,
    pub font: FontOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontOptions {
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub mode: String,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub title: AxisTitle,
    pub grid: GridOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: FontOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub mode: String,
    pub axis: String,
    pub intersect: bool,
}

fn axis_title(text: &str) -> AxisTitle {
    AxisTitle {
        display: true,
        text: text.to_owned(),
        font: FontOptions {
            size: 12,
            weight: Some("bold".to_owned()),
        },
    }
}

impl ChartConfig {
    /// Builds the configuration for `series` plotted over `axis`.
    ///
    /// Each series with bands is followed by its upper and lower band lines;
    /// the lower line fills back to the upper one.
    pub fn from_series(
        axis: YearAxis,
        series: &[ScenarioSeries],
        style: &ChartStyle,
    ) -> PageResult<Self> {
        let labels = axis.labels();
        let mut datasets = Vec::with_capacity(series.len() * 3);

        for entry in series {
            if entry.points.len() != labels.len() {
                return Err(PageError::InvalidData(format!(
                    "series `{}` has {} points for {} year labels",
                    entry.label,
                    entry.points.len(),
                    labels.len()
                )));
            }

            let color = entry.color.to_css_hex();
            datasets.push(ChartDataset {
                label: entry.label.clone(),
                data: entry.points.clone(),
                border_color: color.clone(),
                background_color: color.clone(),
                border_width: style.border_width,
                tension: style.tension,
                fill: DatasetFill::Enabled(false),
                point_radius: style.point_radius,
                point_hover_radius: style.point_hover_radius,
                order: 1,
                border_dash: None,
            });

            if let Some(bands) = &entry.bands {
                let fill_color = entry.color.to_css_rgba(style.band_alpha);
                for (suffix, data, fill) in [
                    ("90 %", &bands.upper, DatasetFill::Enabled(false)),
                    ("10 %", &bands.lower, DatasetFill::Target("-1".to_owned())),
                ] {
                    datasets.push(ChartDataset {
                        label: format!("{} ({suffix})", entry.label),
                        data: data.clone(),
                        border_color: color.clone(),
                        background_color: fill_color.clone(),
                        border_width: 1.0,
                        tension: style.tension,
                        fill,
                        point_radius: 0.0,
                        point_hover_radius: 0.0,
                        order: 2,
                        border_dash: Some(vec![4.0, 4.0]),
                    });
                }
            }
        }

        Ok(Self {
            kind: "line".to_owned(),
            data: ChartData { labels, datasets },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                aspect_ratio: 2.0,
                plugins: PluginOptions {
                    title: Toggle { display: false },
                    legend: LegendOptions {
                        display: true,
                        position: "bottom".to_owned(),
                        labels: LegendLabels {
                            padding: 15,
                            use_point_style: true,
                            font: FontOptions {
                                size: 12,
                                weight: None,
                            },
                        },
                    },
                    tooltip: TooltipOptions {
                        mode: "index".to_owned(),
                        intersect: false,
                    },
                },
                scales: ScaleOptions {
                    x: AxisOptions {
                        begin_at_zero: None,
                        min: None,
                        max: None,
                        title: axis_title(&style.x_title),
                        grid: GridOptions {
                            display: Some(false),
                            color: None,
                        },
                    },
                    y: AxisOptions {
                        begin_at_zero: Some(false),
                        min: Some(style.y_min),
                        max: Some(style.y_max),
                        title: axis_title(&style.y_title),
                        grid: GridOptions {
                            display: None,
                            color: Some("rgba(0, 0, 0, 0.05)".to_owned()),
                        },
                    },
                },
                interaction: InteractionOptions {
                    mode: "nearest".to_owned(),
                    axis: "x".to_owned(),
                    intersect: false,
                },
            },
            formatting: ChartFormatting {
                tooltip_decimals: style.tooltip_decimals,
                tooltip_suffix: style.tooltip_suffix.clone(),
                tick_decimals: style.tick_decimals,
                tick_suffix: style.tick_suffix.clone(),
            },
        })
    }

    pub fn to_json(&self) -> PageResult<String> {
        serde_json::to_string(self)
            .map_err(|e| PageError::Serialization(format!("failed to serialize chart config: {e}")))
    }

    /// JSON safe to embed inside a `<script>` element.
    pub fn to_embedded_json(&self) -> PageResult<String> {
        Ok(self
            .to_json()?
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"))
    }
}
