//! JSON export of chart specifications.

use gpp_charts::{ChartSpec, Dashboard};
use log::info;
use std::io::Write;
use std::path::Path;

fn write_spec<W: Write>(
    spec: &ChartSpec,
    output: Option<&Path>,
    out: &mut W,
) -> anyhow::Result<()> {
    let json = spec.to_json_pretty()?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            info!("Wrote {:?} chart to {}", spec.kind, path.display());
        }
        None => writeln!(out, "{}", json)?,
    }
    Ok(())
}

/// Export the choropleth map.
pub fn run_map<W: Write>(
    dashboard: &Dashboard,
    output: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let map = dashboard.map_chart()?;
    info!("Map has {} yearly frames", map.frames.len());
    write_spec(&map, output.map(Path::new), out)
}

/// Export the three country charts.
///
/// With an output directory, writes `ranking.json`, `distribution.json` and
/// `fuel_share.json` into it (creating it if needed); otherwise prints a
/// single JSON object keyed by chart.
pub fn run_country<W: Write>(
    dashboard: &Dashboard,
    country: &str,
    output_dir: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let charts = dashboard.select_country(country)?;
    match output_dir {
        Some(dir) => {
            let dir = Path::new(dir);
            std::fs::create_dir_all(dir)?;
            write_spec(&charts.ranking, Some(&dir.join("ranking.json")), out)?;
            write_spec(&charts.distribution, Some(&dir.join("distribution.json")), out)?;
            write_spec(&charts.fuel_share, Some(&dir.join("fuel_share.json")), out)?;
        }
        None => writeln!(out, "{}", serde_json::to_string_pretty(&charts)?)?,
    }
    info!("Exported country charts for {}", country);
    Ok(())
}
