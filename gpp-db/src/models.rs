//! Query result model structs for the power plant aggregations.
//!
//! All structs derive `Serialize` so they can be printed by the CLI or
//! handed to the chart builders as-is. [`DatasetSummary`] also renders the
//! three summary cards.

use serde::Serialize;

/// Number of plants commissioned in one country in one year.
///
/// One row per (country code, start year) pair present in the dataset;
/// pairs without plants are absent rather than zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryYearCount {
    /// ISO-3 country code.
    pub country_code: String,
    pub start_year: i32,
    /// Always at least 1.
    pub plant_count: i64,
}

/// A plant and its capacity, used by the per-country ranking.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlantCapacity {
    pub name: String,
    pub primary_fuel: String,
    /// Capacity in megawatts (MW).
    pub capacity_mw: f64,
}

/// Number of plants using one fuel type.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FuelCount {
    pub primary_fuel: String,
    pub plant_count: i64,
}

/// Capacities of all plants of one fuel type within a country.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FuelCapacities {
    pub primary_fuel: String,
    /// Capacities in megawatts (MW), in file order.
    pub capacities_mw: Vec<f64>,
}

/// Whole-dataset figures shown on the summary cards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    /// Distinct country long names.
    pub country_count: i64,
    /// Distinct plant names.
    pub plant_count: i64,
    /// Most frequent fuel type and its record count; `None` for an empty dataset.
    pub most_used_fuel: Option<FuelCount>,
}

/// One summary card: a header and the figure under it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryCard {
    pub header: &'static str,
    pub value: String,
    /// Card background colour name.
    pub color: &'static str,
}

impl DatasetSummary {
    /// `"{fuel} = {count}"`, or `"-"` when the dataset is empty.
    pub fn most_used_fuel_label(&self) -> String {
        match &self.most_used_fuel {
            Some(fuel) => format!("{} = {}", fuel.primary_fuel, fuel.plant_count),
            None => "-".to_string(),
        }
    }

    /// The three cards in display order.
    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard {
                header: "Number of Country",
                value: self.country_count.to_string(),
                color: "LightCyan",
            },
            SummaryCard {
                header: "Total Power Plant",
                value: self.plant_count.to_string(),
                color: "PaleTurquoise",
            },
            SummaryCard {
                header: "Most Used Fuel",
                value: self.most_used_fuel_label(),
                color: "PowderBlue",
            },
        ]
    }
}
