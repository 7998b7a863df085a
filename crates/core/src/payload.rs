//! Payload mass bounds and the user-chosen payload range.

use serde::{Deserialize, Serialize};

use crate::record::LaunchRecord;

/// Inclusive `[min, max]` payload mass over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Compute bounds from the records. An empty dataset gives `[0, 0]`.
    pub fn from_records(records: &[LaunchRecord]) -> Self {
        let mut masses = records.iter().map(|r| r.payload_mass_kg);
        let Some(first) = masses.next() else {
            return Self { min: 0.0, max: 0.0 };
        };
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Self { min, max }
    }

    /// The range covering every record; the range filter's default value.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }

    /// Bounds widened outward to multiples of `step`, used as the range
    /// control's domain.
    pub fn snapped(&self, step: f64) -> Self {
        if step <= 0.0 {
            return *self;
        }
        let min = (self.min / step).floor() * step;
        let mut max = (self.max / step).ceil() * step;
        if max <= min {
            max = min + step;
        }
        Self { min, max }
    }

    /// Tick positions from `min` to `max` inclusive, one every `step`.
    pub fn marks(&self, step: f64) -> Vec<f64> {
        if step <= 0.0 {
            return vec![self.min, self.max];
        }
        let count = ((self.max - self.min) / step).round() as usize;
        (0..=count).map(|i| self.min + step * i as f64).collect()
    }
}

/// A user-chosen inclusive payload range.
///
/// An inverted range (`low > high`) is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::OutcomeClass;

    fn record(payload: f64) -> LaunchRecord {
        LaunchRecord::new("A", payload, OutcomeClass::Failure, "v1")
    }

    #[test]
    fn bounds_from_records() {
        let records = vec![record(2500.0), record(500.0), record(9600.0)];
        let bounds = PayloadBounds::from_records(&records);
        assert_eq!(bounds, PayloadBounds { min: 500.0, max: 9600.0 });
        assert_eq!(bounds.full_range(), PayloadRange::new(500.0, 9600.0));
    }

    #[test]
    fn bounds_of_empty_dataset() {
        assert_eq!(
            PayloadBounds::from_records(&[]),
            PayloadBounds { min: 0.0, max: 0.0 }
        );
    }

    #[test]
    fn snapped_bounds_and_marks() {
        let bounds = PayloadBounds { min: 0.0, max: 9600.0 };
        let snapped = bounds.snapped(1000.0);
        assert_eq!(snapped, PayloadBounds { min: 0.0, max: 10000.0 });

        let marks = snapped.marks(1000.0);
        assert_eq!(marks.len(), 11);
        assert_eq!(marks[0], 0.0);
        assert_eq!(marks[10], 10000.0);
    }

    #[test]
    fn snapped_degenerate_bounds_still_span_a_step() {
        let bounds = PayloadBounds { min: 0.0, max: 0.0 };
        assert_eq!(bounds.snapped(1000.0), PayloadBounds { min: 0.0, max: 1000.0 });
    }

    #[test]
    fn range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 1000.0);
        assert!(range.contains(1000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(1000.1));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(!range.contains(3000.0));
        assert!(!range.contains(1000.0));
    }
}
