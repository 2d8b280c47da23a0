mod config;
mod page;

pub use config::{ChartStyle, PageConfig};
pub use page::PageBuilder;
