use crate::error::{LoadError, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the global power plant dataset.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Country long-form name (e.g. "Indonesia"), the value the dropdown selects on
    pub country_long: String,
    /// ISO-3 country code (e.g. "IDN"), the choropleth location key
    pub country_code: String,
    pub name: String,
    pub primary_fuel: String,
    /// Capacity in megawatts (MW), absent when the cell is blank
    pub capacity_mw: Option<f64>,
    /// Commissioning year, absent for many plants
    pub start_year: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Header names accepted for each field, first match wins.
const COUNTRY_LONG_HEADERS: &[&str] = &["country_long"];
const COUNTRY_CODE_HEADERS: &[&str] = &["country code", "country"];
const NAME_HEADERS: &[&str] = &["name of powerplant", "name"];
const PRIMARY_FUEL_HEADERS: &[&str] = &["primary_fuel"];
const CAPACITY_HEADERS: &[&str] = &["capacity in MW", "capacity_mw"];
const START_YEAR_HEADERS: &[&str] = &["start_year", "commissioning_year"];
const LATITUDE_HEADERS: &[&str] = &["latitude"];
const LONGITUDE_HEADERS: &[&str] = &["longitude"];

/// Column positions resolved from the header row.
#[derive(Debug, PartialEq)]
struct ColumnMap {
    country_long: usize,
    country_code: usize,
    name: usize,
    primary_fuel: usize,
    capacity: usize,
    start_year: usize,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

fn find_column(headers: &StringRecord, candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|candidate| headers.iter().position(|h| h.trim() == *candidate))
}

fn require_column(
    headers: &StringRecord,
    candidates: &[&str],
    field: &'static str,
) -> Result<usize> {
    find_column(headers, candidates).ok_or(LoadError::MissingColumn(field))
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(ColumnMap {
            country_long: require_column(headers, COUNTRY_LONG_HEADERS, "country_long")?,
            country_code: require_column(headers, COUNTRY_CODE_HEADERS, "country code")?,
            name: require_column(headers, NAME_HEADERS, "name of powerplant")?,
            primary_fuel: require_column(headers, PRIMARY_FUEL_HEADERS, "primary_fuel")?,
            capacity: require_column(headers, CAPACITY_HEADERS, "capacity in MW")?,
            start_year: require_column(headers, START_YEAR_HEADERS, "start_year")?,
            latitude: find_column(headers, LATITUDE_HEADERS),
            longitude: find_column(headers, LONGITUDE_HEADERS),
        })
    }
}

fn is_missing(ess: &str) -> bool {
    matches!(ess.to_lowercase().as_str(), "" | "nan" | "null" | "n/a" | "na")
}

fn parse_optional_float(ess: &str) -> Option<f64> {
    let ess = ess.trim();
    if is_missing(ess) {
        return None;
    }
    ess.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl PowerPlant {
    /// Parse a start year cell. Years are often written as floats ("2004.0")
    /// and are truncated; blanks and non-numeric cells are absent.
    pub fn parse_start_year(ess: &str) -> Option<i32> {
        parse_optional_float(ess).map(|year| year.trunc() as i32)
    }

    /// Parse a capacity cell. Blank and `nan` cells are absent; any other
    /// non-numeric text is an error.
    fn parse_capacity(ess: &str, line: u64) -> Result<Option<f64>> {
        if is_missing(ess.trim()) {
            return Ok(None);
        }
        match parse_optional_float(ess) {
            Some(capacity) => Ok(Some(capacity)),
            None => Err(LoadError::InvalidCapacity {
                line,
                value: ess.to_string(),
            }),
        }
    }

    /// Parse a CSV string of power plant data into a vector of PowerPlants.
    ///
    /// Columns are located by header name, so their order does not matter.
    /// Required: `country_long`, `country code`, `name of powerplant`,
    /// `primary_fuel`, `capacity in MW`, `start_year`. Optional: `latitude`,
    /// `longitude`.
    pub fn parse_power_plant_csv(csv_object: &str) -> Result<Vec<PowerPlant>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let columns = ColumnMap::from_headers(rdr.headers()?)?;

        let mut plant_list: Vec<PowerPlant> = Vec::new();
        for row in rdr.records() {
            let rho = row?;
            let field = |idx: usize| rho.get(idx).unwrap_or("").trim();
            let line = rho.position().map(|p| p.line()).unwrap_or_default();

            let capacity_mw = PowerPlant::parse_capacity(field(columns.capacity), line)?;

            plant_list.push(PowerPlant {
                country_long: field(columns.country_long).to_string(),
                country_code: field(columns.country_code).to_string(),
                name: field(columns.name).to_string(),
                primary_fuel: field(columns.primary_fuel).to_string(),
                capacity_mw,
                start_year: PowerPlant::parse_start_year(field(columns.start_year)),
                latitude: columns.latitude.and_then(|idx| parse_optional_float(field(idx))),
                longitude: columns.longitude.and_then(|idx| parse_optional_float(field(idx))),
            });
        }
        log::info!("Parsed {} power plants", plant_list.len());
        Ok(plant_list)
    }

    /// Read and parse the dataset at `path`.
    pub fn load_power_plant_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PowerPlant>> {
        let path = path.as_ref();
        let csv_object = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading power plant dataset from {}", path.display());
        PowerPlant::parse_power_plant_csv(&csv_object)
    }
}
