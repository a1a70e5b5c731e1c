//! Fixed styling shared by every chart: a ggplot2-like layout template and
//! the Tealgrn continuous scale used by the map.

use serde_json::{json, Value};

/// Discrete colour sequence of the ggplot2 template.
pub const GGPLOT2_COLORWAY: [&str; 5] = ["#F8766D", "#A3A500", "#00BF7D", "#00B0F6", "#E76BF3"];

/// CARTO Tealgrn sequential scale, light to dark.
pub const TEALGRN: [&str; 7] = [
    "rgb(176, 242, 188)",
    "rgb(137, 232, 172)",
    "rgb(103, 219, 165)",
    "rgb(76, 200, 163)",
    "rgb(56, 178, 163)",
    "rgb(44, 152, 160)",
    "rgb(37, 125, 152)",
];

/// Tealgrn as a Plotly colorscale: evenly spaced `[position, colour]` stops.
pub fn tealgrn_colorscale() -> Value {
    let last = (TEALGRN.len() - 1) as f64;
    Value::Array(
        TEALGRN
            .iter()
            .enumerate()
            .map(|(i, color)| json!([i as f64 / last, color]))
            .collect(),
    )
}

fn axis_template() -> Value {
    json!({
        "automargin": true,
        "gridcolor": "white",
        "linecolor": "white",
        "showgrid": true,
        "tickcolor": "rgb(51,51,51)",
        "ticks": "outside",
        "zeroline": false,
    })
}

/// The ggplot2 layout: grey panel, white grid, dark text.
pub fn ggplot2_layout() -> Value {
    json!({
        "font": {"color": "rgb(51,51,51)"},
        "paper_bgcolor": "white",
        "plot_bgcolor": "rgb(237,237,237)",
        "colorway": GGPLOT2_COLORWAY,
        "xaxis": axis_template(),
        "yaxis": axis_template(),
        "geo": {
            "bgcolor": "white",
            "landcolor": "rgb(237,237,237)",
            "lakecolor": "white",
            "showland": true,
            "showlakes": true,
            "subunitcolor": "white",
        },
        "margin": {"t": 60},
    })
}

/// Recursively merge `overlay` into `base`; objects merge key by key,
/// everything else is replaced.
pub fn merge(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Object(overlay_map) if base.is_object() => {
            if let Some(base_map) = base.as_object_mut() {
                for (key, value) in overlay_map {
                    merge(base_map.entry(key).or_insert(Value::Null), value);
                }
            }
        }
        overlay => *base = overlay,
    }
}

/// ggplot2 layout with `overrides` merged on top and an optional title.
pub fn layout(title: Option<&str>, overrides: Value) -> Value {
    let mut layout = ggplot2_layout();
    if let Some(text) = title {
        merge(&mut layout, json!({"title": {"text": text}}));
    }
    merge(&mut layout, overrides);
    layout
}

/// Colour for the `index`-th category of a discrete palette.
pub fn cycle<'a>(palette: &[&'a str], index: usize) -> &'a str {
    palette[index % palette.len()]
}
