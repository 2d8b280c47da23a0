pub mod bands;
pub mod number_format;
pub mod palette;
pub mod series;
pub mod types;

pub use bands::{UncertaintyModel, derive_bands};
pub use number_format::{
    NumberLocale, format_grouped_integer, parse_plain_decimal, parse_plain_number, strip_grouping,
};
pub use palette::{Color, Palette};
pub use series::{SeriesBuilder, build_series};
pub use types::{MAX_YEAR_SPAN, Scenario, ScenarioSeries, UncertaintyBands, YearAxis};
