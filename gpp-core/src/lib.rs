//! Core types for the global power plant dataset.
//!
//! The dataset is read once into a `Vec<PowerPlant>` and never mutated;
//! every table the dashboard shows is derived from it.

pub mod error;
pub mod power_plant;

/// Country selected when the dashboard first opens.
pub const DEFAULT_COUNTRY: &str = "Indonesia";

/// Number of plants kept by the per-country capacity ranking.
pub const RANKING_LIMIT: usize = 10;

/// Hole ratio of the fuel share donut.
pub const PIE_HOLE: f64 = 0.4;

/// Slice colours of the fuel share donut, cycled in label order.
pub const PIE_PALETTE: [&str; 5] = ["aquamarine", "salmon", "plum", "grey", "slateblue"];

/// Bundled dataset location, relative to the workspace root.
pub const DEFAULT_DATASET_PATH: &str = "fixtures/power_plant.csv";
