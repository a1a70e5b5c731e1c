//! Pure chart builders: aggregation table in, Plotly figure out.
//!
//! Every builder accepts an empty table and returns a valid blank figure.

use crate::figure::{ChartKind, ChartSpec, Frame};
use crate::template::{cycle, layout, merge, tealgrn_colorscale, GGPLOT2_COLORWAY};
use gpp_core::{PIE_HOLE, PIE_PALETTE};
use gpp_db::models::{CountryYearCount, FuelCapacities, FuelCount, PlantCapacity};
use serde_json::{json, Value};
use std::collections::BTreeMap;

const COUNT_LABEL: &str = "No of Power Plant";
const CAPACITY_LABEL: &str = "capacity in MW";
const PLANT_LABEL: &str = "name of powerplant";
const FUEL_LABEL: &str = "Type of Fuel";
const YEAR_LABEL: &str = "start_year";

/// Milliseconds per frame while the map animation plays.
const FRAME_DURATION_MS: u32 = 500;

pub fn ranking_title(country: &str) -> String {
    format!("Ranking of Overall Power Plants in {}", country)
}

pub fn distribution_title(country: &str) -> String {
    format!("Distribution of capacity in MW in each fuel in {}", country)
}

pub fn fuel_share_title(country: &str) -> String {
    format!("Distribution of Fuel Type in {}", country)
}

fn choropleth_trace(rows: &[&CountryYearCount]) -> Value {
    let locations: Vec<&str> = rows.iter().map(|r| r.country_code.as_str()).collect();
    let counts: Vec<i64> = rows.iter().map(|r| r.plant_count).collect();
    json!({
        "type": "choropleth",
        "locationmode": "ISO-3",
        "locations": locations,
        "z": counts,
        "coloraxis": "coloraxis",
        "name": "",
        "hovertemplate": format!("country code=%{{location}}<br>{}=%{{z}}<extra></extra>", COUNT_LABEL),
    })
}

fn animate_args(frame_names: Value, duration: u32) -> Value {
    json!([
        frame_names,
        {
            "mode": "immediate",
            "fromcurrent": true,
            "frame": {"duration": duration, "redraw": true},
            "transition": {"duration": duration, "easing": "linear"},
        }
    ])
}

/// Year slider and play/pause buttons for the map animation.
fn animation_controls(years: &[String]) -> Value {
    let steps: Vec<Value> = years
        .iter()
        .map(|year| {
            json!({
                "label": year,
                "method": "animate",
                "args": animate_args(json!([year]), 0),
            })
        })
        .collect();
    json!({
        "sliders": [{
            "active": 0,
            "currentvalue": {"prefix": format!("{}=", YEAR_LABEL)},
            "len": 0.9,
            "x": 0.1,
            "xanchor": "left",
            "y": 0,
            "yanchor": "top",
            "pad": {"b": 10, "t": 60},
            "steps": steps,
        }],
        "updatemenus": [{
            "type": "buttons",
            "direction": "left",
            "showactive": false,
            "x": 0.1,
            "xanchor": "right",
            "y": 0,
            "yanchor": "top",
            "pad": {"r": 10, "t": 70},
            "buttons": [
                {"label": "&#9654;", "method": "animate", "args": animate_args(Value::Null, FRAME_DURATION_MS)},
                {"label": "&#9724;", "method": "animate", "args": animate_args(json!([null]), 0)},
            ],
        }],
    })
}

/// Choropleth of plant counts per country, animated over start years.
///
/// Frames are ordered by year. The colour axis range is fixed to the
/// global min/max count so colours compare across frames.
pub fn map_chart(counts: &[CountryYearCount]) -> ChartSpec {
    let mut by_year: BTreeMap<i32, Vec<&CountryYearCount>> = BTreeMap::new();
    for row in counts {
        by_year.entry(row.start_year).or_default().push(row);
    }

    let frames: Vec<Frame> = by_year
        .iter()
        .map(|(year, rows)| Frame {
            name: year.to_string(),
            data: vec![choropleth_trace(rows)],
        })
        .collect();

    let data = frames
        .first()
        .map(|frame| frame.data.clone())
        .unwrap_or_else(|| vec![choropleth_trace(&[])]);

    let cmin = counts.iter().map(|r| r.plant_count).min().unwrap_or(0);
    let cmax = counts.iter().map(|r| r.plant_count).max().unwrap_or(0);

    let mut overrides = json!({
        "coloraxis": {
            "colorscale": tealgrn_colorscale(),
            "cmin": cmin,
            "cmax": cmax,
            "colorbar": {"title": {"text": COUNT_LABEL}},
        },
        "geo": {"showframe": false, "projection": {"type": "natural earth"}},
    });
    if !frames.is_empty() {
        let years: Vec<String> = frames.iter().map(|f| f.name.clone()).collect();
        merge(&mut overrides, animation_controls(&years));
    }

    log::info!("[GPP] chart: map with {} frames", frames.len());
    ChartSpec {
        kind: ChartKind::Map,
        data,
        layout: layout(None, overrides),
        frames,
    }
}

/// Horizontal bar of the country's highest-capacity plants.
///
/// Bars keep the ranking's ascending order, so the largest plant is drawn
/// topmost.
pub fn ranking_chart(ranking: &[PlantCapacity], country: &str) -> ChartSpec {
    let capacities: Vec<f64> = ranking.iter().map(|p| p.capacity_mw).collect();
    let names: Vec<&str> = ranking.iter().map(|p| p.name.as_str()).collect();
    let fuels: Vec<&str> = ranking.iter().map(|p| p.primary_fuel.as_str()).collect();

    let trace = json!({
        "type": "bar",
        "orientation": "h",
        "x": capacities,
        "y": names,
        "customdata": fuels,
        "marker": {"color": GGPLOT2_COLORWAY[0]},
        "hovertemplate": format!(
            "{}=%{{x}}<br>{}=%{{y}}<br>primary_fuel=%{{customdata}}<extra></extra>",
            CAPACITY_LABEL, PLANT_LABEL
        ),
    });

    ChartSpec {
        kind: ChartKind::Bar,
        data: vec![trace],
        layout: layout(
            Some(&ranking_title(country)),
            json!({
                "xaxis": {"title": {"text": CAPACITY_LABEL}},
                "yaxis": {"title": {"text": PLANT_LABEL}, "type": "category"},
                "barmode": "relative",
            }),
        ),
        frames: Vec::new(),
    }
}

/// Box plot of capacities, one box per fuel type, x-axis hidden.
pub fn distribution_chart(groups: &[FuelCapacities], country: &str) -> ChartSpec {
    let data: Vec<Value> = groups
        .iter()
        .enumerate()
        .map(|(i, group)| {
            json!({
                "type": "box",
                "name": group.primary_fuel,
                "legendgroup": group.primary_fuel,
                "offsetgroup": group.primary_fuel,
                "alignmentgroup": "True",
                "showlegend": true,
                "x0": " ",
                "y": group.capacities_mw,
                "marker": {"color": cycle(&GGPLOT2_COLORWAY, i)},
                "hovertemplate": format!(
                    "{}={}<br>{}=%{{y}}<extra></extra>",
                    FUEL_LABEL, group.primary_fuel, CAPACITY_LABEL
                ),
            })
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Box,
        data,
        layout: layout(
            Some(&distribution_title(country)),
            json!({
                "boxmode": "group",
                "legend": {"title": {"text": FUEL_LABEL}, "tracegrouporder": "reversed"},
                "xaxis": {"visible": false},
                "yaxis": {"title": {"text": CAPACITY_LABEL}},
            }),
        ),
        frames: Vec::new(),
    }
}

/// Donut of fuel-type shares with the fixed five-colour palette.
pub fn fuel_share_chart(fuel_counts: &[FuelCount], country: &str) -> ChartSpec {
    let labels: Vec<&str> = fuel_counts.iter().map(|f| f.primary_fuel.as_str()).collect();
    let values: Vec<i64> = fuel_counts.iter().map(|f| f.plant_count).collect();
    let colors: Vec<&str> = (0..labels.len()).map(|i| cycle(&PIE_PALETTE, i)).collect();

    let trace = json!({
        "type": "pie",
        "labels": labels,
        "values": values,
        "hole": PIE_HOLE,
        "marker": {"colors": colors},
        "hovertemplate": format!("{}=%{{label}}<br>{}=%{{value}}<extra></extra>", FUEL_LABEL, COUNT_LABEL),
    });

    ChartSpec {
        kind: ChartKind::Pie,
        data: vec![trace],
        layout: layout(
            Some(&fuel_share_title(country)),
            json!({
                "legend": {"title": {"text": FUEL_LABEL}, "tracegrouporder": "reversed"},
                "piecolorway": PIE_PALETTE,
            }),
        ),
        frames: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_count(code: &str, year: i32, count: i64) -> CountryYearCount {
        CountryYearCount {
            country_code: code.to_string(),
            start_year: year,
            plant_count: count,
        }
    }

    fn plant(name: &str, fuel: &str, capacity: f64) -> PlantCapacity {
        PlantCapacity {
            name: name.to_string(),
            primary_fuel: fuel.to_string(),
            capacity_mw: capacity,
        }
    }

    fn fuel(name: &str, count: i64) -> FuelCount {
        FuelCount {
            primary_fuel: name.to_string(),
            plant_count: count,
        }
    }

    #[test]
    fn map_has_one_frame_per_year_in_order() {
        let counts = vec![
            year_count("IDN", 2001, 3),
            year_count("IDN", 1990, 1),
            year_count("VNM", 1990, 7),
        ];
        let spec = map_chart(&counts);
        assert_eq!(spec.kind, ChartKind::Map);
        let names: Vec<&str> = spec.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["1990", "2001"]);

        let first = &spec.frames[0].data[0];
        assert_eq!(first["type"], "choropleth");
        assert_eq!(first["locationmode"], "ISO-3");
        assert_eq!(first["locations"], json!(["IDN", "VNM"]));
        assert_eq!(first["z"], json!([1, 7]));
        assert_eq!(spec.data, spec.frames[0].data);

        assert_eq!(spec.layout["coloraxis"]["cmin"], 1);
        assert_eq!(spec.layout["coloraxis"]["cmax"], 7);
        assert_eq!(spec.layout["sliders"][0]["steps"][1]["label"], "2001");
    }

    #[test]
    fn empty_map_is_valid_and_blank() {
        let spec = map_chart(&[]);
        assert!(spec.frames.is_empty());
        assert_eq!(spec.data.len(), 1);
        assert!(spec.is_blank());
        assert!(spec.layout.get("sliders").is_none());
        assert!(spec.to_json().is_ok());
    }

    #[test]
    fn ranking_bar_is_horizontal_and_titled() {
        let ranking = vec![
            plant("Suralaya", "Coal", 50.0),
            plant("Muara Karang", "Gas", 100.0),
        ];
        let spec = ranking_chart(&ranking, "Indonesia");
        assert_eq!(spec.title(), Some("Ranking of Overall Power Plants in Indonesia"));
        let trace = &spec.data[0];
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["x"], json!([50.0, 100.0]));
        assert_eq!(trace["y"], json!(["Suralaya", "Muara Karang"]));
    }

    #[test]
    fn ranking_of_unknown_country_is_blank() {
        let spec = ranking_chart(&[], "Atlantis");
        assert!(spec.is_blank());
        assert_eq!(spec.title(), Some("Ranking of Overall Power Plants in Atlantis"));
    }

    #[test]
    fn distribution_has_box_per_fuel_and_hidden_x_axis() {
        let groups = vec![
            FuelCapacities {
                primary_fuel: "Coal".to_string(),
                capacities_mw: vec![10.0, 40.0],
            },
            FuelCapacities {
                primary_fuel: "Gas".to_string(),
                capacities_mw: vec![20.0],
            },
        ];
        let spec = distribution_chart(&groups, "Indonesia");
        assert_eq!(spec.data.len(), 2);
        assert_eq!(spec.data[0]["type"], "box");
        assert_eq!(spec.data[0]["name"], "Coal");
        assert_eq!(spec.data[1]["marker"]["color"], GGPLOT2_COLORWAY[1]);
        assert_eq!(spec.layout["xaxis"]["visible"], false);
        assert_eq!(spec.layout["legend"]["title"]["text"], "Type of Fuel");
        assert_eq!(
            spec.title(),
            Some("Distribution of capacity in MW in each fuel in Indonesia")
        );
    }

    #[test]
    fn empty_distribution_has_no_traces() {
        let spec = distribution_chart(&[], "Atlantis");
        assert!(spec.data.is_empty());
        assert!(spec.is_blank());
    }

    #[test]
    fn fuel_share_is_donut_with_cycled_palette() {
        let counts: Vec<FuelCount> = ["Biomass", "Coal", "Gas", "Hydro", "Oil", "Solar"]
            .iter()
            .enumerate()
            .map(|(i, name)| fuel(name, i as i64 + 1))
            .collect();
        let spec = fuel_share_chart(&counts, "Indonesia");
        let trace = &spec.data[0];
        assert_eq!(trace["type"], "pie");
        assert_eq!(trace["hole"], 0.4);
        assert_eq!(trace["values"], json!([1, 2, 3, 4, 5, 6]));
        assert_eq!(
            trace["marker"]["colors"],
            json!(["aquamarine", "salmon", "plum", "grey", "slateblue", "aquamarine"])
        );
        assert_eq!(spec.title(), Some("Distribution of Fuel Type in Indonesia"));
    }

    #[test]
    fn empty_fuel_share_is_blank() {
        let spec = fuel_share_chart(&[], "Atlantis");
        assert!(spec.is_blank());
        assert!(spec.to_json().is_ok());
    }
}
