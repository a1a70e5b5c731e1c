//! Plotly figure specifications.
//!
//! A [`ChartSpec`] serializes to the `{data, layout, frames}` object that
//! `Plotly.react` accepts. Traces and layout stay
//! loosely typed (`serde_json::Value`) since Plotly's attribute tree is huge
//! and the renderer consumes them verbatim.

use serde::Serialize;
use serde_json::Value;

/// Which chart a spec describes.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Map,
    Bar,
    Box,
    Pie,
}

/// One animation frame of a figure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Value>,
}

/// A declarative chart description handed to the renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    #[serde(skip)]
    pub kind: ChartKind,
    pub data: Vec<Value>,
    pub layout: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

impl ChartSpec {
    /// The layout title, if any.
    pub fn title(&self) -> Option<&str> {
        self.layout
            .pointer("/title/text")
            .and_then(Value::as_str)
    }

    /// True when no trace carries any data point.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|trace| {
            ["x", "y", "z", "values"]
                .iter()
                .filter_map(|key| trace.get(*key).and_then(Value::as_array))
                .all(|points| points.is_empty())
        })
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
