//! Plain-text commands: summary cards and dropdown options.

use gpp_charts::Dashboard;
use log::info;
use std::io::Write;

/// Print one `header: value` line per summary card.
pub fn run_summary<W: Write>(dashboard: &Dashboard, out: &mut W) -> anyhow::Result<()> {
    for card in dashboard.summary().cards() {
        writeln!(out, "{}: {}", card.header, card.value)?;
    }
    Ok(())
}

/// Print the dropdown options, one per line.
pub fn run_countries<W: Write>(dashboard: &Dashboard, out: &mut W) -> anyhow::Result<()> {
    let countries = dashboard.countries()?;
    for country in &countries {
        writeln!(out, "{}", country)?;
    }
    info!("Listed {} countries", countries.len());
    Ok(())
}
