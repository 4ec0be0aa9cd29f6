use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub date: NaiveDate,
    pub factor: f64,
}

/// Cumulative growth factors anchored at 1.0 on the series' first date.
///
/// Built only by the accumulator and the deflator, both of which reject
/// empty input, so the series is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthFactorSeries {
    points: Vec<GrowthPoint>,
}

impl GrowthFactorSeries {
    pub(crate) fn from_points(points: Vec<GrowthPoint>) -> Self {
        debug_assert!(!points.is_empty());
        Self { points }
    }

    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &GrowthPoint {
        self.points.first().expect("growth series is never empty")
    }

    pub fn last(&self) -> &GrowthPoint {
        self.points.last().expect("growth series is never empty")
    }

    /// Total cumulative return in percent, `(last_factor - 1) * 100`.
    pub fn total_pct(&self) -> f64 {
        (self.last().factor - 1.0) * 100.0
    }
}
