//! The dashboard context: the loaded dataset plus everything derived from
//! it at startup.
//!
//! Built exactly once and shared read-only afterwards. Loading reads a CSV
//! with the `Launch Site`, `Payload Mass (kg)`, `class` and
//! `Booster Version Category` columns; any other columns are ignored.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DatasetError, Result};
use crate::payload::PayloadBounds;
use crate::record::{LaunchRecord, OutcomeClass};
use crate::site::{ALL_SITES, SiteOption, build_site_options};

pub const COLUMN_SITE: &str = "Launch Site";
pub const COLUMN_PAYLOAD: &str = "Payload Mass (kg)";
pub const COLUMN_CLASS: &str = "class";
pub const COLUMN_BOOSTER: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [COLUMN_SITE, COLUMN_PAYLOAD, COLUMN_CLASS, COLUMN_BOOSTER];

/// A CSV row as it appears on disk.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRow {
    fn into_record(self) -> std::result::Result<LaunchRecord, String> {
        if self.launch_site == ALL_SITES {
            return Err(format!(
                "launch site '{ALL_SITES}' is reserved for the all-sites option"
            ));
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(format!(
                "payload mass must be a non-negative number, got {}",
                self.payload_mass_kg
            ));
        }
        let outcome = OutcomeClass::try_from(self.class)?;
        Ok(LaunchRecord::new(
            self.launch_site,
            self.payload_mass_kg,
            outcome,
            self.booster_category,
        ))
    }
}

/// Immutable process-wide state: records, site options and payload bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardContext {
    records: Vec<LaunchRecord>,
    options: Vec<SiteOption>,
    bounds: PayloadBounds,
}

impl DashboardContext {
    /// Build the context from records already in memory.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let options = build_site_options(&records);
        let bounds = PayloadBounds::from_records(&records);
        Self {
            records,
            options,
            bounds,
        }
    }

    /// Load the dataset from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| DatasetError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let context = Self::from_reader(file, &path.display().to_string())?;
        info!(
            path = %path.display(),
            records = context.records.len(),
            sites = context.site_count(),
            min_payload = context.bounds.min,
            max_payload = context.bounds.max,
            "Launch dataset loaded"
        );
        Ok(context)
    }

    /// Load the dataset from any CSV source. `source_name` is only used in
    /// error messages.
    pub fn from_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::Malformed {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?
            .clone();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn {
                    source_name: source_name.to_string(),
                    column: column.to_string(),
                }
                .into());
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| DatasetError::Malformed {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();

            let record = row
                .deserialize::<RawRow>(Some(&headers))
                .map_err(|e| e.to_string())
                .and_then(RawRow::into_record)
                .map_err(|reason| DatasetError::InvalidRow {
                    source_name: source_name.to_string(),
                    line,
                    reason,
                })?;
            records.push(record);
        }

        debug!(source = source_name, records = records.len(), "Parsed launch rows");
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Dropdown options, all-sites first.
    pub fn options(&self) -> &[SiteOption] {
        &self.options
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Number of distinct launch sites.
    pub fn site_count(&self) -> usize {
        self.options.len() - 1
    }

    pub fn has_site(&self, name: &str) -> bool {
        self.options
            .iter()
            .skip(1)
            .any(|o| o.value.as_str() == name)
    }
}
