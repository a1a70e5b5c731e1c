//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// A single `power_plants` table holds one row per dataset record. The `id`
/// column is assigned in insertion order, so it preserves file order for the
/// queries whose results depend on it (dropdown order, ranking ties, the
/// most-used fuel tie-break).
///
/// Every chart table is derived on-the-fly via `GROUP BY` queries against it.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS power_plants (
        id INTEGER PRIMARY KEY,
        country_long TEXT NOT NULL,
        country_code TEXT NOT NULL,
        name TEXT NOT NULL,
        primary_fuel TEXT NOT NULL,
        capacity_mw REAL,
        start_year INTEGER,
        latitude REAL,
        longitude REAL
    );
    CREATE INDEX IF NOT EXISTS idx_plants_country ON power_plants(country_long);
    CREATE INDEX IF NOT EXISTS idx_plants_code_year ON power_plants(country_code, start_year);
    "#
}
