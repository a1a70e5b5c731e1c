//! Typed query methods for deriving chart tables from the dataset.
//!
//! All queries return typed structs from [`crate::models`].
//!
//! # Country matching
//!
//! Country filters compare `country_long` with `=` under SQLite's default
//! BINARY collation: the match is exact and case-sensitive, with no
//! whitespace normalization. An unknown country yields empty results.
//!
//! # Missing values
//!
//! Blank text cells are stored as `''` and left out of every grouping and
//! distinct count. Plants without a capacity are counted everywhere except
//! the capacity ranking and distribution.

use crate::models::{CountryYearCount, DatasetSummary, FuelCapacities, FuelCount, PlantCapacity};
use crate::Database;
use rusqlite::{params, Connection, OptionalExtension};

/// Log how many of a country's plants a capacity query had to skip.
fn warn_missing_capacity(conn: &Connection, query: &str, country: &str) -> anyhow::Result<()> {
    let missing: i64 = conn.query_row(
        "SELECT COUNT(*) FROM power_plants
         WHERE country_long = ?1 AND capacity_mw IS NULL",
        params![country],
        |row| row.get(0),
    )?;
    if missing > 0 {
        log::warn!(
            "[GPP] query: {}({}) skipped {} plants without capacity",
            query,
            country,
            missing
        );
    }
    Ok(())
}

impl Database {
    // ───────────────────── Global Queries ─────────────────────

    /// Count plants per (country code, start year) for the animated map.
    ///
    /// Records without a start year are left out. Ordered by country code,
    /// then year.
    pub fn query_yearly_counts(&self) -> anyhow::Result<Vec<CountryYearCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country_code, start_year, COUNT(*) AS plant_count
             FROM power_plants
             WHERE start_year IS NOT NULL AND country_code <> ''
             GROUP BY country_code, start_year
             ORDER BY country_code, start_year",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountryYearCount {
                    country_code: row.get(0)?,
                    start_year: row.get(1)?,
                    plant_count: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GPP] query: query_yearly_counts returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct country long names in order of first appearance.
    pub fn query_countries(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country_long FROM power_plants
             WHERE country_long <> ''
             GROUP BY country_long
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!(
            "[GPP] query: query_countries returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Total number of loaded records.
    pub fn query_record_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM power_plants", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Figures for the summary cards, over the whole dataset.
    ///
    /// The most used fuel is the fuel type with the most records. On a tie,
    /// the fuel whose first record appears earliest in the file wins.
    pub fn query_summary(&self) -> anyhow::Result<DatasetSummary> {
        let conn = self.conn.borrow();
        let (country_count, plant_count) = conn.query_row(
            "SELECT COUNT(DISTINCT NULLIF(country_long, '')), COUNT(DISTINCT NULLIF(name, ''))
             FROM power_plants",
            [],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )?;
        let most_used_fuel = conn
            .query_row(
                "SELECT primary_fuel, COUNT(*) AS plant_count
                 FROM power_plants
                 WHERE primary_fuel <> ''
                 GROUP BY primary_fuel
                 ORDER BY plant_count DESC, MIN(id) ASC
                 LIMIT 1",
                [],
                |row| {
                    Ok(FuelCount {
                        primary_fuel: row.get(0)?,
                        plant_count: row.get(1)?,
                    })
                },
            )
            .optional()?;
        log::info!(
            "[GPP] query: query_summary returned {} countries, {} plants, most used fuel {:?}",
            country_count,
            plant_count,
            most_used_fuel
        );
        Ok(DatasetSummary {
            country_count,
            plant_count,
            most_used_fuel,
        })
    }

    // ───────────────────── Per-Country Queries ─────────────────────

    /// The `limit` highest-capacity plants of a country, in ascending
    /// capacity order.
    ///
    /// Equivalent to a stable ascending sort on capacity followed by taking
    /// the last `limit` rows: plants with equal capacity keep file order.
    pub fn query_country_ranking(
        &self,
        country: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<PlantCapacity>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT name, primary_fuel, capacity_mw
             FROM power_plants
             WHERE country_long = ?1 AND capacity_mw IS NOT NULL
             ORDER BY capacity_mw DESC, id DESC
             LIMIT ?2",
        )?;
        let mut rows = stmt
            .query_map(params![country, limit as i64], |row| {
                Ok(PlantCapacity {
                    name: row.get(0)?,
                    primary_fuel: row.get(1)?,
                    capacity_mw: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        rows.reverse();
        warn_missing_capacity(&conn, "query_country_ranking", country)?;
        log::info!(
            "[GPP] query: query_country_ranking({}) returned {} records",
            country,
            rows.len()
        );
        Ok(rows)
    }

    /// Number of plants per fuel type within a country, ordered by fuel name.
    pub fn query_fuel_counts(&self, country: &str) -> anyhow::Result<Vec<FuelCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT primary_fuel, COUNT(*) AS plant_count
             FROM power_plants
             WHERE country_long = ?1 AND primary_fuel <> ''
             GROUP BY primary_fuel
             ORDER BY primary_fuel",
        )?;
        let rows = stmt
            .query_map(params![country], |row| {
                Ok(FuelCount {
                    primary_fuel: row.get(0)?,
                    plant_count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GPP] query: query_fuel_counts({}) returned {} records",
            country,
            rows.len()
        );
        Ok(rows)
    }

    /// Capacities of a country's plants grouped by fuel type.
    ///
    /// Groups are ordered by the first appearance of each fuel in the file,
    /// capacities within a group by file order.
    pub fn query_capacity_distribution(
        &self,
        country: &str,
    ) -> anyhow::Result<Vec<FuelCapacities>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT primary_fuel, capacity_mw
             FROM power_plants
             WHERE country_long = ?1 AND capacity_mw IS NOT NULL AND primary_fuel <> ''
             ORDER BY id",
        )?;
        let pairs = stmt
            .query_map(params![country], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        warn_missing_capacity(&conn, "query_capacity_distribution", country)?;

        let mut groups: Vec<FuelCapacities> = Vec::new();
        for (primary_fuel, capacity_mw) in pairs {
            match groups.iter_mut().find(|g| g.primary_fuel == primary_fuel) {
                Some(group) => group.capacities_mw.push(capacity_mw),
                None => groups.push(FuelCapacities {
                    primary_fuel,
                    capacities_mw: vec![capacity_mw],
                }),
            }
        }
        log::info!(
            "[GPP] query: query_capacity_distribution({}) returned {} groups",
            country,
            groups.len()
        );
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::FuelCount;
    use crate::Database;

    /// Two Indonesian plants and one Vietnamese plant.
    fn scenario_db() -> Database {
        let db = Database::new().unwrap();
        let csv = "\
country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
IDN,Indonesia,Muara Karang,Gas,100,1979
IDN,Indonesia,Suralaya,Coal,50,1984
VNM,Vietnam,Hoa Binh,Hydro,200,1994
";
        db.load_power_plants_csv(csv).unwrap();
        db
    }

    /// A larger dataset: 12 Indonesian plants, a few elsewhere.
    fn sample_db() -> Database {
        let db = Database::new().unwrap();
        let mut csv = String::from(
            "country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year\n",
        );
        let fuels = ["Coal", "Gas", "Hydro", "Coal"];
        for i in 0..12 {
            let year = if i % 3 == 0 { String::new() } else { format!("{}", 2000 + i % 2) };
            csv.push_str(&format!(
                "IDN,Indonesia,Plant {},{},{},{}\n",
                i,
                fuels[i % fuels.len()],
                (i + 1) * 10,
                year
            ));
        }
        csv.push_str("VNM,Vietnam,Hoa Binh,Hydro,1920,1994\n");
        csv.push_str("VNM,Vietnam,Son La,Hydro,2400,2012\n");
        csv.push_str("THA,Thailand,Mae Moh,Coal,2400,1978\n");
        db.load_power_plants_csv(&csv).unwrap();
        db
    }

    // ───────────────────── Scenario Tests ─────────────────────

    #[test]
    fn ranking_scenario_is_ascending() {
        let db = scenario_db();
        let ranking = db.query_country_ranking("Indonesia", 10).unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].name, "Suralaya");
        assert!((ranking[0].capacity_mw - 50.0).abs() < 0.01);
        assert_eq!(ranking[1].name, "Muara Karang");
        assert!((ranking[1].capacity_mw - 100.0).abs() < 0.01);
    }

    #[test]
    fn fuel_counts_scenario() {
        let db = scenario_db();
        let counts = db.query_fuel_counts("Indonesia").unwrap();
        assert_eq!(
            counts,
            vec![
                FuelCount {
                    primary_fuel: "Coal".to_string(),
                    plant_count: 1,
                },
                FuelCount {
                    primary_fuel: "Gas".to_string(),
                    plant_count: 1,
                },
            ]
        );
    }

    #[test]
    fn unknown_country_is_empty() {
        let db = scenario_db();
        assert!(db.query_country_ranking("Thailand", 10).unwrap().is_empty());
        assert!(db.query_fuel_counts("Thailand").unwrap().is_empty());
        assert!(db.query_capacity_distribution("Thailand").unwrap().is_empty());
    }

    #[test]
    fn country_match_is_case_sensitive() {
        let db = scenario_db();
        assert!(db.query_country_ranking("indonesia", 10).unwrap().is_empty());
        assert!(db.query_fuel_counts(" Indonesia").unwrap().is_empty());
    }

    // ───────────────────── Ranking Tests ─────────────────────

    #[test]
    fn ranking_truncates_to_highest_ten() {
        let db = sample_db();
        let ranking = db.query_country_ranking("Indonesia", 10).unwrap();
        assert_eq!(ranking.len(), 10);
        // Capacities 30..=120; the two smallest (10, 20) are dropped.
        assert!((ranking[0].capacity_mw - 30.0).abs() < 0.01);
        assert!((ranking[9].capacity_mw - 120.0).abs() < 0.01);
        assert!(ranking
            .windows(2)
            .all(|w| w[0].capacity_mw <= w[1].capacity_mw));
    }

    #[test]
    fn ranking_ties_keep_file_order() {
        let db = Database::new().unwrap();
        let csv = "\
country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
IDN,Indonesia,First,Gas,100,
IDN,Indonesia,Second,Gas,100,
IDN,Indonesia,Third,Gas,100,
";
        db.load_power_plants_csv(csv).unwrap();
        let names: Vec<String> = db
            .query_country_ranking("Indonesia", 2)
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        // Stable ascending sort then tail(2).
        assert_eq!(names, vec!["Second", "Third"]);
    }

    #[test]
    fn ranking_length_is_min_of_limit_and_count() {
        let db = sample_db();
        assert_eq!(db.query_country_ranking("Indonesia", 10).unwrap().len(), 10);
        assert_eq!(db.query_country_ranking("Vietnam", 10).unwrap().len(), 2);
        assert_eq!(db.query_country_ranking("Thailand", 10).unwrap().len(), 1);
    }

    // ───────────────────── Fuel Tests ─────────────────────

    #[test]
    fn fuel_counts_sum_to_country_total() {
        let db = sample_db();
        for (country, total) in [("Indonesia", 12), ("Vietnam", 2), ("Thailand", 1)] {
            let sum: i64 = db
                .query_fuel_counts(country)
                .unwrap()
                .iter()
                .map(|f| f.plant_count)
                .sum();
            assert_eq!(sum, total, "fuel counts for {}", country);
        }
    }

    #[test]
    fn capacity_distribution_groups_by_first_appearance() {
        let db = sample_db();
        let groups = db.query_capacity_distribution("Indonesia").unwrap();
        let fuels: Vec<&str> = groups.iter().map(|g| g.primary_fuel.as_str()).collect();
        assert_eq!(fuels, vec!["Coal", "Gas", "Hydro"]);
        // Coal at i = 0, 3, 4, 7, 8, 11
        assert_eq!(
            groups[0].capacities_mw,
            vec![10.0, 40.0, 50.0, 80.0, 90.0, 120.0]
        );
        let total: usize = groups.iter().map(|g| g.capacities_mw.len()).sum();
        assert_eq!(total, 12);
    }

    // ───────────────────── Global Tests ─────────────────────

    #[test]
    fn yearly_counts_skip_missing_years_and_zero_rows() {
        let db = sample_db();
        let counts = db.query_yearly_counts().unwrap();
        assert!(counts.iter().all(|c| c.plant_count >= 1));
        // Indonesia: i % 3 != 0 -> i in {1,2,4,5,7,8,10,11}; year 2000 + i % 2
        let idn: Vec<(i32, i64)> = counts
            .iter()
            .filter(|c| c.country_code == "IDN")
            .map(|c| (c.start_year, c.plant_count))
            .collect();
        assert_eq!(idn, vec![(2000, 4), (2001, 4)]);
        assert_eq!(counts.len(), 2 + 2 + 1);
        assert_eq!(counts[0].country_code, "IDN");
        assert_eq!(counts[4].country_code, "VNM");
    }

    #[test]
    fn countries_in_first_appearance_order() {
        let db = sample_db();
        assert_eq!(
            db.query_countries().unwrap(),
            vec!["Indonesia", "Vietnam", "Thailand"]
        );
    }

    #[test]
    fn summary_counts_distinct_values() {
        let db = Database::new().unwrap();
        let csv = "\
country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
IDN,Indonesia,Alpha,Gas,10,
IDN,Indonesia,Alpha,Gas,20,
VNM,Vietnam,Beta,Hydro,30,
VNM,Vietnam,Gamma,Coal,40,
";
        db.load_power_plants_csv(csv).unwrap();
        let summary = db.query_summary().unwrap();
        assert_eq!(summary.country_count, 2);
        assert_eq!(summary.plant_count, 3);
    }

    #[test]
    fn most_used_fuel_picks_maximum() {
        let db = Database::new().unwrap();
        let mut csv = String::from(
            "country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year\n",
        );
        let fuels = [
            "Coal", "Gas", "Hydro", "Gas", "Coal", "Gas", "Solar", "Gas", "Coal", "Gas",
        ];
        for (i, fuel) in fuels.iter().enumerate() {
            csv.push_str(&format!("IDN,Indonesia,Plant {},{},10,\n", i, fuel));
        }
        db.load_power_plants_csv(&csv).unwrap();
        let summary = db.query_summary().unwrap();
        assert_eq!(
            summary.most_used_fuel,
            Some(FuelCount {
                primary_fuel: "Gas".to_string(),
                plant_count: 5,
            })
        );
    }

    #[test]
    fn most_used_fuel_tie_goes_to_first_seen() {
        let db = Database::new().unwrap();
        let csv = "\
country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
IDN,Indonesia,A,Wind,10,
IDN,Indonesia,B,Coal,10,
IDN,Indonesia,C,Coal,10,
IDN,Indonesia,D,Wind,10,
";
        db.load_power_plants_csv(csv).unwrap();
        let fuel = db.query_summary().unwrap().most_used_fuel.unwrap();
        assert_eq!(fuel.primary_fuel, "Wind");
        assert_eq!(fuel.plant_count, 2);
    }

    #[test]
    fn blank_capacity_counts_but_is_not_ranked() {
        let db = Database::new().unwrap();
        let csv = "\
country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
IDN,Indonesia,Muara Karang,Gas,100,1979
IDN,Indonesia,Suralaya,Coal,,2001
IDN,Indonesia,Paiton,Coal,nan,2001
";
        db.load_power_plants_csv(csv).unwrap();

        let ranking = db.query_country_ranking("Indonesia", 10).unwrap();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].name, "Muara Karang");

        let groups = db.query_capacity_distribution("Indonesia").unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].primary_fuel, "Gas");

        let coal = db
            .query_fuel_counts("Indonesia")
            .unwrap()
            .into_iter()
            .find(|f| f.primary_fuel == "Coal")
            .unwrap();
        assert_eq!(coal.plant_count, 2);

        let summary = db.query_summary().unwrap();
        assert_eq!(summary.plant_count, 3);
        assert_eq!(summary.most_used_fuel.unwrap().primary_fuel, "Coal");

        let years = db.query_yearly_counts().unwrap();
        assert_eq!(years.iter().map(|c| c.plant_count).sum::<i64>(), 3);
    }

    #[test]
    fn blank_cells_are_not_distinct_values() {
        let db = Database::new().unwrap();
        let csv = "\
country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year
IDN,Indonesia,Alpha,Gas,10,2001
,,,,5,2001
";
        db.load_power_plants_csv(csv).unwrap();

        let summary = db.query_summary().unwrap();
        assert_eq!(summary.country_count, 1);
        assert_eq!(summary.plant_count, 1);
        assert_eq!(summary.most_used_fuel.unwrap().plant_count, 1);
        assert_eq!(db.query_countries().unwrap(), vec!["Indonesia"]);

        let years = db.query_yearly_counts().unwrap();
        assert_eq!(years.len(), 1);
        assert_eq!(years[0].country_code, "IDN");
    }

    #[test]
    fn summary_of_empty_dataset() {
        let db = Database::new().unwrap();
        let summary = db.query_summary().unwrap();
        assert_eq!(summary.country_count, 0);
        assert_eq!(summary.plant_count, 0);
        assert!(summary.most_used_fuel.is_none());
    }

    #[test]
    fn queries_are_idempotent() {
        let db = sample_db();
        assert_eq!(db.query_yearly_counts().unwrap(), db.query_yearly_counts().unwrap());
        assert_eq!(
            db.query_country_ranking("Indonesia", 10).unwrap(),
            db.query_country_ranking("Indonesia", 10).unwrap()
        );
        assert_eq!(
            db.query_fuel_counts("Indonesia").unwrap(),
            db.query_fuel_counts("Indonesia").unwrap()
        );
        assert_eq!(db.query_summary().unwrap(), db.query_summary().unwrap());
    }
}
