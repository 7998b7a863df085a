//! Launch record domain types.
//!
//! A [`LaunchRecord`] is one row of the launch dataset. Records are loaded
//! once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Binary launch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    /// Numeric value as stored in the dataset's `class` column.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Display label used by the proportion chart.
    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.as_u8()
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Failure),
            1 => Ok(Self::Success),
            other => Err(format!("class must be 0 or 1, got {other}")),
        }
    }
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site name (e.g. "CCAFS LC-40")
    pub launch_site: String,

    /// Payload mass in kilograms, never negative
    pub payload_mass_kg: f64,

    /// Whether the launch succeeded
    pub outcome: OutcomeClass,

    /// Booster version category (e.g. "FT", "B5")
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: OutcomeClass,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}
