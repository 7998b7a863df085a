//! Reactive bindings between the dashboard inputs and its charts.
//!
//! Which input drives which chart is declared once in [`BINDINGS`]. An
//! interaction is an [`InputChange`] applied to the current [`FilterState`];
//! the resulting snapshot is the only thing the re-run bindings read, so a
//! chart never sees a fresh site together with a stale range.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregate::{correlation, proportion};
use crate::dataset::DashboardContext;
use crate::figure::{Figure, correlation_figure, proportion_figure};
use crate::payload::PayloadRange;
use crate::site::SiteSelection;

/// A user-controlled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputId {
    /// The site dropdown.
    Site,
    /// The payload range slider.
    Payload,
}

/// A chart on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputId {
    ProportionChart,
    CorrelationChart,
}

/// An output and the inputs it is recomputed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub output: OutputId,
    pub inputs: &'static [InputId],
}

impl Binding {
    pub fn depends_on(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }
}

/// The dashboard's dependency table.
pub const BINDINGS: &[Binding] = &[
    Binding {
        output: OutputId::ProportionChart,
        inputs: &[InputId::Site],
    },
    Binding {
        output: OutputId::CorrelationChart,
        inputs: &[InputId::Site, InputId::Payload],
    },
];

/// Bindings that must re-run when `input` changes.
pub fn bindings_for(input: InputId) -> impl Iterator<Item = &'static Binding> {
    BINDINGS.iter().filter(move |b| b.depends_on(input))
}

/// The current value of every input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterState {
    /// Copy of this state with one input replaced.
    pub fn with_change(&self, change: &InputChange) -> Self {
        let mut next = self.clone();
        match change {
            InputChange::Site(site) => next.site = site.clone(),
            InputChange::Payload(range) => next.payload = *range,
        }
        next
    }
}

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputChange {
    Site(SiteSelection),
    Payload(PayloadRange),
}

impl InputChange {
    pub fn input(&self) -> InputId {
        match self {
            Self::Site(_) => InputId::Site,
            Self::Payload(_) => InputId::Payload,
        }
    }
}

/// A replacement figure for one output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureUpdate {
    pub id: OutputId,
    pub figure: Figure,
}

/// The outcome of handling one interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub state: FilterState,
    pub outputs: Vec<FigureUpdate>,
}

/// Evaluates bindings against a shared, read-only [`DashboardContext`].
#[derive(Debug, Clone, Copy)]
pub struct Controller<'a> {
    context: &'a DashboardContext,
}

impl<'a> Controller<'a> {
    pub fn new(context: &'a DashboardContext) -> Self {
        Self { context }
    }

    /// Page-load state: all sites and the full payload range.
    pub fn initial_state(&self) -> FilterState {
        FilterState {
            site: SiteSelection::All,
            payload: self.context.bounds().full_range(),
        }
    }

    /// Compute one output from the given snapshot.
    pub fn evaluate(&self, output: OutputId, state: &FilterState) -> Figure {
        let records = self.context.records();
        match output {
            OutputId::ProportionChart => proportion_figure(&proportion(records, &state.site)),
            OutputId::CorrelationChart => {
                correlation_figure(&correlation(records, &state.site, state.payload))
            }
        }
    }

    /// Every output, used for the first render.
    pub fn render_all(&self, state: &FilterState) -> Vec<FigureUpdate> {
        BINDINGS
            .iter()
            .map(|b| FigureUpdate {
                id: b.output,
                figure: self.evaluate(b.output, state),
            })
            .collect()
    }

    /// Apply `change` to `state` and re-run only the bindings that depend
    /// on the changed input.
    pub fn handle(&self, state: &FilterState, change: InputChange) -> Interaction {
        let input = change.input();
        if let InputChange::Site(SiteSelection::Site(name)) = &change {
            if !self.context.has_site(name) {
                warn!(site = %name, "Unknown launch site selected; charts will be empty");
            }
        }
        let next = state.with_change(&change);
        let outputs: Vec<FigureUpdate> = bindings_for(input)
            .map(|b| FigureUpdate {
                id: b.output,
                figure: self.evaluate(b.output, &next),
            })
            .collect();

        debug!(
            input = ?input,
            site = %next.site,
            low = next.payload.low,
            high = next.payload.high,
            outputs = outputs.len(),
            "Dashboard interaction handled"
        );

        Interaction {
            state: next,
            outputs,
        }
    }
}
