//! Reportable results: segments and their aggregates.

use tp_core::{LocationKey, TransportMode};

/// One materialized leg of a trip, with the edge's actual metrics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from:        LocationKey,
    pub to:          LocationKey,
    pub mode:        TransportMode,
    pub cost:        f64,
    pub time_h:      f64,
    pub distance_km: f64,
}

/// An ordered list of segments plus totals summed over them.
///
/// Totals are reported metrics only; they are not the search weight.  An
/// empty result means "nothing to report": either no route exists or the
/// start and end were the same location.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub segments:          Vec<Segment>,
    pub total_cost:        f64,
    pub total_time_h:      f64,
    pub total_distance_km: f64,
}

impl PathResult {
    /// The "no route" sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Append one segment and add its metrics to the totals.
    pub fn push(&mut self, segment: Segment) {
        self.total_cost += segment.cost;
        self.total_time_h += segment.time_h;
        self.total_distance_km += segment.distance_km;
        self.segments.push(segment);
    }

    /// Concatenate `other` after `self`, adding its totals.  Adjacent
    /// segments are never merged, even when they share a mode.
    pub fn append(&mut self, other: PathResult) {
        self.segments.extend(other.segments);
        self.total_cost += other.total_cost;
        self.total_time_h += other.total_time_h;
        self.total_distance_km += other.total_distance_km;
    }

    /// Modes in travel order, one per segment.
    pub fn modes(&self) -> impl Iterator<Item = TransportMode> + '_ {
        self.segments.iter().map(|s| s.mode)
    }
}
