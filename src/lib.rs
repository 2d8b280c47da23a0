//! expenditure-outlook: static page generator for projected expenditure
//! scenarios and the index-linked budget table behind them.
//!
//! Series derivation (`core`) and table classification (`table`) are pure;
//! `render` turns their output into a Chart.js config and HTML markup, and
//! `api::PageBuilder` wires them together.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod table;
pub mod telemetry;

pub use api::{PageBuilder, PageConfig};
pub use error::{PageError, PageResult};
