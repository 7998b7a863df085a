//! Aggregations behind the two charts.
//!
//! Both functions are pure: the same records and inputs always produce the
//! same output, and a selection that matches no records produces an empty
//! result rather than an error.

use serde::{Deserialize, Serialize};

use crate::payload::PayloadRange;
use crate::record::{LaunchRecord, OutcomeClass};
use crate::site::SiteSelection;

/// A labelled count, one pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: u64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Data for the proportion chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProportionView {
    pub selection: SiteSelection,
    pub slices: Vec<Slice>,
}

/// Data for the payload/outcome correlation chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationView<'a> {
    pub selection: SiteSelection,
    pub range: PayloadRange,
    pub points: Vec<&'a LaunchRecord>,
}

/// Aggregate for the proportion chart.
///
/// For all sites: successful launches per site, one slice per distinct site
/// in first-seen order (failures only contribute zero). For a single site:
/// record count per outcome class, `Failure` before `Success`, omitting
/// classes that never occur.
pub fn proportion(records: &[LaunchRecord], selection: &SiteSelection) -> ProportionView {
    let slices = match selection {
        SiteSelection::All => successes_per_site(records),
        SiteSelection::Site(_) => outcomes_for(records, selection),
    };
    ProportionView {
        selection: selection.clone(),
        slices,
    }
}

fn successes_per_site(records: &[LaunchRecord]) -> Vec<Slice> {
    let mut slices: Vec<Slice> = Vec::new();
    for record in records {
        let success = u64::from(record.outcome.as_u8());
        match slices.iter_mut().find(|s| s.label == record.launch_site) {
            Some(slice) => slice.value += success,
            None => slices.push(Slice::new(record.launch_site.clone(), success)),
        }
    }
    slices
}

fn outcomes_for(records: &[LaunchRecord], selection: &SiteSelection) -> Vec<Slice> {
    let (failures, successes) = records
        .iter()
        .filter(|r| selection.matches(r))
        .fold((0u64, 0u64), |(f, s), r| match r.outcome {
            OutcomeClass::Failure => (f + 1, s),
            OutcomeClass::Success => (f, s + 1),
        });

    [
        (OutcomeClass::Failure, failures),
        (OutcomeClass::Success, successes),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(class, count)| Slice::new(class.label(), count))
    .collect()
}

/// Aggregate for the correlation chart: records inside `range` (inclusive)
/// AND matching `selection`, in dataset order.
pub fn correlation<'a>(
    records: &'a [LaunchRecord],
    selection: &SiteSelection,
    range: PayloadRange,
) -> CorrelationView<'a> {
    let points = records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(r))
        .collect();
    CorrelationView {
        selection: selection.clone(),
        range,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1"),
            LaunchRecord::new("A", 1500.0, OutcomeClass::Failure, "v1"),
            LaunchRecord::new("B", 2500.0, OutcomeClass::Success, "v2"),
        ]
    }

    fn larger() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 525.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, OutcomeClass::Failure, "v1.1"),
            LaunchRecord::new("KSC LC-39A", 2490.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 3170.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, OutcomeClass::Success, "FT"),
            LaunchRecord::new("CCAFS SLC-40", 3600.0, OutcomeClass::Success, "B4"),
            LaunchRecord::new("KSC LC-39A", 5300.0, OutcomeClass::Failure, "B4"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, OutcomeClass::Success, "FT"),
        ]
    }

    #[test]
    fn scenario_all_sites_proportion() {
        let view = proportion(&scenario(), &SiteSelection::All);
        assert_eq!(view.slices, vec![Slice::new("A", 1), Slice::new("B", 1)]);
    }

    #[test]
    fn scenario_single_site_proportion() {
        let view = proportion(&scenario(), &SiteSelection::site("A"));
        assert_eq!(
            view.slices,
            vec![Slice::new("Failure", 1), Slice::new("Success", 1)]
        );
    }

    #[test]
    fn scenario_correlation_range() {
        let records = scenario();
        let view = correlation(&records, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(view.points, vec![&records[0]]);
    }

    #[test]
    fn all_sites_counts_successes_per_distinct_site() {
        let records = larger();
        let view = proportion(&records, &SiteSelection::All);

        let labels: Vec<&str> = view.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        for slice in &view.slices {
            let expected = records
                .iter()
                .filter(|r| r.launch_site == slice.label && r.outcome == OutcomeClass::Success)
                .count() as u64;
            assert_eq!(slice.value, expected, "site {}", slice.label);
        }
    }

    #[test]
    fn all_sites_keeps_site_with_no_successes() {
        let records = vec![
            LaunchRecord::new("A", 100.0, OutcomeClass::Failure, "v1"),
            LaunchRecord::new("B", 100.0, OutcomeClass::Success, "v1"),
        ];
        let view = proportion(&records, &SiteSelection::All);
        assert_eq!(view.slices, vec![Slice::new("A", 0), Slice::new("B", 1)]);
    }

    #[test]
    fn single_site_counts_sum_to_site_total() {
        let records = larger();
        for site in ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"] {
            let view = proportion(&records, &SiteSelection::site(site));
            assert!(view.slices.len() <= 2);
            assert!(
                view.slices
                    .iter()
                    .all(|s| s.label == "Failure" || s.label == "Success")
            );
            let total: u64 = view.slices.iter().map(|s| s.value).sum();
            let expected = records.iter().filter(|r| r.launch_site == site).count() as u64;
            assert_eq!(total, expected, "site {site}");
        }
    }

    #[test]
    fn single_outcome_site_has_one_slice() {
        let view = proportion(&larger(), &SiteSelection::site("CCAFS SLC-40"));
        assert_eq!(view.slices, vec![Slice::new("Success", 1)]);
    }

    #[test]
    fn unknown_site_is_empty_not_error() {
        let records = larger();
        let view = proportion(&records, &SiteSelection::site("Boca Chica"));
        assert!(view.slices.is_empty());

        let view = correlation(
            &records,
            &SiteSelection::site("Boca Chica"),
            PayloadRange::new(0.0, 10_000.0),
        );
        assert!(view.points.is_empty());
    }

    #[test]
    fn empty_dataset() {
        assert!(proportion(&[], &SiteSelection::All).slices.is_empty());
        assert!(
            correlation(&[], &SiteSelection::All, PayloadRange::new(0.0, 1.0))
                .points
                .is_empty()
        );
    }

    #[test]
    fn correlation_is_range_and_site() {
        let records = larger();
        let range = PayloadRange::new(500.0, 5300.0);
        let selection = SiteSelection::site("KSC LC-39A");
        let view = correlation(&records, &selection, range);

        let expected: Vec<&LaunchRecord> = records
            .iter()
            .filter(|r| range.contains(r.payload_mass_kg) && r.launch_site == "KSC LC-39A")
            .collect();
        assert_eq!(view.points, expected);
        assert_eq!(view.points.len(), 3);
    }

    #[test]
    fn correlation_range_applies_with_specific_site() {
        let records = larger();
        let view = correlation(
            &records,
            &SiteSelection::site("VAFB SLC-4E"),
            PayloadRange::new(0.0, 1000.0),
        );
        assert_eq!(view.points.len(), 1);
        assert_eq!(view.points[0].payload_mass_kg, 500.0);
    }

    #[test]
    fn degenerate_range_keeps_exact_matches() {
        let records = larger();
        let view = correlation(&records, &SiteSelection::All, PayloadRange::new(5300.0, 5300.0));
        assert_eq!(view.points.len(), 2);
        assert!(view.points.iter().all(|r| r.payload_mass_kg == 5300.0));
    }

    #[test]
    fn aggregations_are_idempotent() {
        let records = larger();
        let selection = SiteSelection::site("CCAFS LC-40");
        assert_eq!(
            proportion(&records, &selection),
            proportion(&records, &selection)
        );
        let range = PayloadRange::new(0.0, 4000.0);
        assert_eq!(
            correlation(&records, &selection, range),
            correlation(&records, &selection, range)
        );
    }
}
