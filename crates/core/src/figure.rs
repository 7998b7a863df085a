//! Chart specifications.
//!
//! A [`Figure`] serializes to the `{ "data": [...], "layout": {...} }`
//! document the browser's Plotly library draws. Rendering itself happens
//! client side; this module only decides traces, titles and colors.

use serde::{Deserialize, Serialize};

use crate::aggregate::{CorrelationView, ProportionView};
use crate::site::SiteSelection;

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Launch Outcome";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Category";

const FAILURE_COLOR: &str = "red";
const SUCCESS_COLOR: &str = "green";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    /// Keep slices in the order given instead of sorting by size.
    pub sort: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub legendgroup: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Text,
}

impl Figure {
    /// Total number of plotted values across all traces.
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Pie(pie) => pie.values.len(),
                Trace::Scatter(scatter) => scatter.x.len(),
            })
            .sum()
    }
}

pub fn proportion_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "All Sites Data: Successful Launches".into(),
        SiteSelection::Site(site) => format!("Site:{site} Failure vs Success"),
    }
}

pub fn correlation_title(selection: &SiteSelection) -> String {
    match selection {
        SiteSelection::All => "All Launch sites".into(),
        SiteSelection::Site(site) => format!("Launch Site:{site}"),
    }
}

/// Pie chart for a proportion view. Single-site views color failures red
/// and successes green.
pub fn proportion_figure(view: &ProportionView) -> Figure {
    let labels: Vec<String> = view.slices.iter().map(|s| s.label.clone()).collect();
    let values = view.slices.iter().map(|s| s.value).collect();

    let marker = match view.selection {
        SiteSelection::All => None,
        SiteSelection::Site(_) => Some(Marker {
            colors: labels
                .iter()
                .map(|label| {
                    if label == "Failure" {
                        FAILURE_COLOR.to_string()
                    } else {
                        SUCCESS_COLOR.to_string()
                    }
                })
                .collect(),
        }),
    };

    Figure {
        data: vec![Trace::Pie(PieTrace {
            labels,
            values,
            sort: false,
            marker,
        })],
        layout: Layout {
            title: Text::new(proportion_title(&view.selection)),
            xaxis: None,
            yaxis: None,
            legend: None,
        },
    }
}

/// Scatter chart for a correlation view: one marker trace per booster
/// category, in the order categories first appear.
pub fn correlation_figure(view: &CorrelationView<'_>) -> Figure {
    let mut traces: Vec<ScatterTrace> = Vec::new();
    for record in &view.points {
        let index = match traces
            .iter()
            .position(|t| t.name == record.booster_category)
        {
            Some(index) => index,
            None => {
                traces.push(ScatterTrace {
                    name: record.booster_category.clone(),
                    legendgroup: record.booster_category.clone(),
                    mode: "markers".into(),
                    x: Vec::new(),
                    y: Vec::new(),
                });
                traces.len() - 1
            }
        };
        traces[index].x.push(record.payload_mass_kg);
        traces[index].y.push(record.outcome.as_u8());
    }

    Figure {
        data: traces.into_iter().map(Trace::Scatter).collect(),
        layout: Layout {
            title: Text::new(correlation_title(&view.selection)),
            xaxis: Some(Axis {
                title: Text::new(PAYLOAD_AXIS_TITLE),
            }),
            yaxis: Some(Axis {
                title: Text::new(OUTCOME_AXIS_TITLE),
            }),
            legend: Some(Legend {
                title: Text::new(BOOSTER_LEGEND_TITLE),
            }),
        },
    }
}
