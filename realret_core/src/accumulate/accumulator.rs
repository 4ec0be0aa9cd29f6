use crate::common::error::{RealReturnError, SeriesKind};
use crate::series::growth::{GrowthFactorSeries, GrowthPoint};
use crate::series::normalized::NormalizedSeries;

/// Turns a normalized series into cumulative growth factors,
/// `factor[i] = value[i] / value[0]`, so `factor[0]` is exactly 1.0.
///
/// For prices this reads "what $1 at the start is worth at date i"; for the
/// inflation index, "how much prices rose since the start".
pub fn accumulate(
    series: &NormalizedSeries,
    kind: SeriesKind,
) -> Result<GrowthFactorSeries, RealReturnError> {
    let points = series.points();
    let base = match points.first() {
        Some(first) => first.value,
        None => return Err(RealReturnError::EmptySeries(kind)),
    };

    Ok(GrowthFactorSeries::from_points(
        points
            .iter()
            .map(|p| GrowthPoint {
                date: p.date,
                factor: p.value / base,
            })
            .collect(),
    ))
}
