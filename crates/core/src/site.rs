//! Site selector values and the option list built from the dataset.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::record::LaunchRecord;

/// Reserved selector value meaning "all sites".
pub const ALL_SITES: &str = "ALL";

/// Label shown for the [`ALL_SITES`] option.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The current value of the site selector.
///
/// On the wire this is a plain string: [`ALL_SITES`] or a site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        Self::Site(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Wire value of this selection.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }

    /// Whether a record passes this selection.
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(name) => record.launch_site == *name,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: SiteSelection,
}

impl SiteOption {
    pub fn all_sites() -> Self {
        Self {
            label: ALL_SITES_LABEL.into(),
            value: SiteSelection::All,
        }
    }

    pub fn for_site(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: SiteSelection::site(name),
        }
    }
}

/// Build the dropdown options: the all-sites option first, then every
/// distinct site in the order it first appears in `records`.
pub fn build_site_options(records: &[LaunchRecord]) -> Vec<SiteOption> {
    let mut seen = HashSet::new();
    let mut options = vec![SiteOption::all_sites()];
    for record in records {
        if seen.insert(record.launch_site.as_str()) {
            options.push(SiteOption::for_site(&record.launch_site));
        }
    }
    options
}
