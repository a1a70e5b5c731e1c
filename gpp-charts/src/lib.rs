//! Chart specifications for the global power plant dashboard.
//!
//! This crate turns the aggregation tables of `gpp-db` into Plotly figure
//! specifications and bundles the whole selection contract in [`Dashboard`]:
//! summary cards computed once at startup, the map, and the three charts
//! driven by the selected country.

pub mod builders;
pub mod dashboard;
pub mod figure;
pub mod template;

pub use dashboard::{CountryCharts, Dashboard};
pub use figure::{ChartKind, ChartSpec, Frame};
pub use gpp_db::models::{DatasetSummary, SummaryCard};
