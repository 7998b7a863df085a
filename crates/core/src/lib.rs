//! # Launchboard Core
//!
//! Domain types, aggregations and reactive bindings for the launch records
//! dashboard. This crate has **no web framework dependencies**: it turns a
//! loaded dataset plus the current filter inputs into chart specifications,
//! and the gateway crate serves those to the browser.
//!
//! ## Layout
//!
//! - [`record`] / [`site`] / [`payload`]: the value types
//! - [`dataset`]: the immutable [`DashboardContext`] built once at startup
//! - [`aggregate`]: pure per-chart aggregations
//! - [`figure`]: aggregation results as Plotly figure documents
//! - [`controller`]: which input re-runs which chart

pub mod error;
pub mod record;
pub mod site;
pub mod payload;
pub mod dataset;
pub mod aggregate;
pub mod figure;
pub mod controller;

// Re-export key types at crate root for ergonomics
pub use error::{Error, Result, DatasetError};
pub use record::{LaunchRecord, OutcomeClass};
pub use site::{SiteOption, SiteSelection, ALL_SITES, build_site_options};
pub use payload::{PayloadBounds, PayloadRange};
pub use dataset::DashboardContext;
pub use aggregate::{CorrelationView, ProportionView, Slice, correlation, proportion};
pub use figure::Figure;
pub use controller::{
    BINDINGS, Binding, Controller, FigureUpdate, FilterState, InputChange, InputId, Interaction,
    OutputId,
};
