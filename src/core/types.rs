use serde::{Deserialize, Serialize};

use crate::core::palette::Color;
use crate::error::{PageError, PageResult};

/// Widest year range a chart axis may cover.
pub const MAX_YEAR_SPAN: usize = 1_000;

/// Inclusive range of calendar years shared by every scenario on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "YearRange", into = "YearRange")]
pub struct YearAxis {
    start_year: i32,
    end_year: i32,
}

impl YearAxis {
    pub fn new(start_year: i32, end_year: i32) -> PageResult<Self> {
        if end_year < start_year {
            return Err(PageError::InvalidData(format!(
                "year axis end ({end_year}) precedes start ({start_year})"
            )));
        }
        let span = i64::from(end_year) - i64::from(start_year) + 1;
        if span > MAX_YEAR_SPAN as i64 {
            return Err(PageError::InvalidData(format!(
                "year axis {start_year}..={end_year} spans {span} years (max {MAX_YEAR_SPAN})"
            )));
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    #[must_use]
    pub fn start_year(self) -> i32 {
        self.start_year
    }

    #[must_use]
    pub fn end_year(self) -> i32 {
        self.end_year
    }

    #[must_use]
    pub fn len(self) -> usize {
        (i64::from(self.end_year) - i64::from(self.start_year) + 1) as usize
    }

    /// Always false: the range is inclusive, so it holds at least one year.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    #[must_use]
    pub fn labels(self) -> Vec<i32> {
        (self.start_year..=self.end_year).collect()
    }
}

impl Default for YearAxis {
    fn default() -> Self {
        Self {
            start_year: 2025,
            end_year: 2035,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct YearRange {
    start_year: i32,
    end_year: i32,
}

impl TryFrom<YearRange> for YearAxis {
    type Error = PageError;

    fn try_from(value: YearRange) -> Result<Self, Self::Error> {
        Self::new(value.start_year, value.end_year)
    }
}

impl From<YearAxis> for YearRange {
    fn from(value: YearAxis) -> Self {
        Self {
            start_year: value.start_year,
            end_year: value.end_year,
        }
    }
}

/// Literal input for one projected trajectory, before a color is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub points: Vec<f64>,
}

impl Scenario {
    #[must_use]
    pub fn new(label: impl Into<String>, points: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            points: points.into(),
        }
    }
}

/// Per-point envelope around a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UncertaintyBands {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl UncertaintyBands {
    #[must_use]
    pub fn len(&self) -> usize {
        self.upper.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }
}

/// Display-ready scenario handed to the chart adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSeries {
    pub label: String,
    pub points: Vec<f64>,
    pub color: Color,
    pub bands: Option<UncertaintyBands>,
}

impl ScenarioSeries {
    /// Checks length, sign and band ordering against the shared year axis.
    pub fn validate(&self, axis: YearAxis) -> PageResult<()> {
        if self.points.len() != axis.len() {
            return Err(PageError::InvalidData(format!(
                "series `{}` has {} points but the year axis spans {} years",
                self.label,
                self.points.len(),
                axis.len()
            )));
        }

        if let Some(index) = self
            .points
            .iter()
            .position(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(PageError::InvalidData(format!(
                "series `{}` point {index} must be finite and non-negative",
                self.label
            )));
        }

        let Some(bands) = &self.bands else {
            return Ok(());
        };

        if bands.upper.len() != self.points.len() || bands.lower.len() != self.points.len() {
            return Err(PageError::InvalidData(format!(
                "series `{}` bands do not match its point count",
                self.label
            )));
        }

        for (index, value) in self.points.iter().enumerate() {
            if !(bands.lower[index] <= *value && *value <= bands.upper[index]) {
                return Err(PageError::InvalidData(format!(
                    "series `{}` bands do not enclose point {index}",
                    self.label
                )));
            }
        }

        Ok(())
    }
}
