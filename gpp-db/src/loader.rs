//! Data loading functions for populating the in-memory SQLite database.
//!
//! Records are parsed by [`PowerPlant::parse_power_plant_csv`], which maps
//! columns by header name and fails fast on a missing column, then inserted
//! in file order.
//!
//! # CSV Format
//!
//! Header row required; see `gpp_core::power_plant` for accepted names:
//! `country code,country_long,name of powerplant,primary_fuel,capacity in MW,latitude,longitude,start_year`

use crate::Database;
use gpp_core::power_plant::PowerPlant;
use rusqlite::params;

impl Database {
    /// Insert typed records. Insertion order becomes the `id` order.
    pub fn load_power_plants(&self, plants: &[PowerPlant]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO power_plants
                 (country_long, country_code, name, primary_fuel, capacity_mw, start_year, latitude, longitude)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for plant in plants {
                stmt.execute(params![
                    plant.country_long,
                    plant.country_code,
                    plant.name,
                    plant.primary_fuel,
                    plant.capacity_mw,
                    plant.start_year,
                    plant.latitude,
                    plant.longitude,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[GPP] loader: Loaded {} power plants", plants.len());
        Ok(())
    }

    /// Parse a CSV string and load its records.
    ///
    /// # Example CSV
    /// ```text
    /// country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
    /// IDN,Indonesia,Suralaya,Coal,3400,1984.0
    /// ```
    pub fn load_power_plants_csv(&self, csv_data: &str) -> anyhow::Result<()> {
        let plants = PowerPlant::parse_power_plant_csv(csv_data)?;
        self.load_power_plants(&plants)
    }
}
