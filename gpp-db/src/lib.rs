//! In-memory SQLite database layer for the global power plant dataset.
//!
//! The dataset is parsed into typed [`gpp_core::power_plant::PowerPlant`]
//! records, inserted once into an in-memory SQLite table, and every chart
//! table is derived from it with `GROUP BY` queries.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data loaded from a file by the CLI, or via `include_str!` in the dashboard
//! - Typed query methods returning serializable structs
//!
//! # Usage
//!
//! ```rust
//! use gpp_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_power_plants_csv(
//!     "country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year\n\
//!      IDN,Indonesia,Suralaya,Coal,3400,1984\n",
//! )
//! .unwrap();
//!
//! let ranking = db.query_country_ranking("Indonesia", 10).unwrap();
//! assert_eq!(ranking.len(), 1);
//! ```
//!
//! After loading, only read queries run against the connection, so every
//! query is a pure function of (dataset, arguments).

mod loader;
pub mod models;
mod queries;
pub mod schema;

use gpp_core::power_plant::PowerPlant;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the power plant dataset.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database already populated with `plants`.
    pub fn from_power_plants(plants: &[PowerPlant]) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_power_plants(plants)?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_power_plants_csv(
            "country code,country_long,name of powerplant,primary_fuel,capacity in MW,start_year\nIDN,Indonesia,Suralaya,Coal,3400,1984\n",
        )
        .unwrap();
        let countries = db2.query_countries().unwrap();
        assert_eq!(
            countries,
            vec!["Indonesia".to_string()],
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert_eq!(db.query_record_count().unwrap(), 0);
        assert!(db.query_countries().unwrap().is_empty());
    }
}
