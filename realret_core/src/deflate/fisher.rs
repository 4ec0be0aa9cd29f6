use crate::common::error::RealReturnError;
use crate::series::growth::{GrowthFactorSeries, GrowthPoint};

/// Deflates nominal growth by inflation growth via the Fisher equation.
///
/// On growth factors the relation `(1 + real) = (1 + nominal) / (1 + inflation)`
/// collapses to `real_factor[i] = nominal_factor[i] / inflation_factor[i]`,
/// which is the correct division of gross returns rather than the naive
/// rate subtraction. Both inputs must share one date axis; divergence means
/// a normalizer defect and fails with `MisalignedSeries`.
pub fn deflate(
    nominal: &GrowthFactorSeries,
    inflation: &GrowthFactorSeries,
) -> Result<GrowthFactorSeries, RealReturnError> {
    if nominal.len() != inflation.len() {
        return Err(RealReturnError::MisalignedSeries {
            index: nominal.len().min(inflation.len()),
            detail: format!(
                "nominal has {} points, inflation has {}",
                nominal.len(),
                inflation.len()
            ),
        });
    }

    let mut points = Vec::with_capacity(nominal.len());
    for (i, (n, f)) in nominal
        .points()
        .iter()
        .zip(inflation.points().iter())
        .enumerate()
    {
        if n.date != f.date {
            return Err(RealReturnError::MisalignedSeries {
                index: i,
                detail: format!("nominal {} vs inflation {}", n.date, f.date),
            });
        }
        points.push(GrowthPoint {
            date: n.date,
            factor: n.factor / f.factor,
        });
    }

    Ok(GrowthFactorSeries::from_points(points))
}
