//! The selection contract between the dataset and the presentation layer.
//!
//! A [`Dashboard`] holds the loaded database and the summary figures computed
//! at startup. Whenever the selected country changes, the presentation layer
//! calls [`Dashboard::select_country`] (or one of the per-chart methods) and
//! pushes each result to its own output slot. The three country charts do
//! not depend on one another.

use crate::builders;
use crate::figure::ChartSpec;
use gpp_core::power_plant::PowerPlant;
use gpp_core::RANKING_LIMIT;
use gpp_db::models::DatasetSummary;
use gpp_db::Database;
use serde::Serialize;
use std::path::Path;

/// The three outputs driven by the country selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryCharts {
    pub country: String,
    pub ranking: ChartSpec,
    pub distribution: ChartSpec,
    pub fuel_share: ChartSpec,
}

/// A chart with no data points is still returned; the selection may simply
/// match nothing.
fn warn_if_blank(spec: ChartSpec) -> ChartSpec {
    if spec.is_blank() {
        log::warn!("[GPP] dashboard: {} has no data", spec.title().unwrap_or("chart"));
    }
    spec
}

#[derive(Clone)]
pub struct Dashboard {
    db: Database,
    summary: DatasetSummary,
}

impl Dashboard {
    /// Wrap an already loaded database and compute the summary cards.
    pub fn new(db: Database) -> anyhow::Result<Self> {
        let summary = db.query_summary()?;
        Ok(Self { db, summary })
    }

    pub fn from_records(plants: &[PowerPlant]) -> anyhow::Result<Self> {
        Self::new(Database::from_power_plants(plants)?)
    }

    pub fn from_csv_str(csv_data: &str) -> anyhow::Result<Self> {
        let plants = PowerPlant::parse_power_plant_csv(csv_data)?;
        Self::from_records(&plants)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let plants = PowerPlant::load_power_plant_csv(path)?;
        Self::from_records(&plants)
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    /// Dropdown options, in order of first appearance in the dataset.
    pub fn countries(&self) -> anyhow::Result<Vec<String>> {
        self.db.query_countries()
    }

    pub fn map_chart(&self) -> anyhow::Result<ChartSpec> {
        Ok(builders::map_chart(&self.db.query_yearly_counts()?))
    }

    pub fn ranking_chart(&self, country: &str) -> anyhow::Result<ChartSpec> {
        let ranking = self.db.query_country_ranking(country, RANKING_LIMIT)?;
        Ok(warn_if_blank(builders::ranking_chart(&ranking, country)))
    }

    pub fn distribution_chart(&self, country: &str) -> anyhow::Result<ChartSpec> {
        let groups = self.db.query_capacity_distribution(country)?;
        Ok(warn_if_blank(builders::distribution_chart(&groups, country)))
    }

    pub fn fuel_chart(&self, country: &str) -> anyhow::Result<ChartSpec> {
        let fuel_counts = self.db.query_fuel_counts(country)?;
        Ok(warn_if_blank(builders::fuel_share_chart(&fuel_counts, country)))
    }

    /// Recompute all three country charts for a new selection.
    pub fn select_country(&self, country: &str) -> anyhow::Result<CountryCharts> {
        Ok(CountryCharts {
            country: country.to_string(),
            ranking: self.ranking_chart(country)?,
            distribution: self.distribution_chart(country)?,
            fuel_share: self.fuel_chart(country)?,
        })
    }
}
