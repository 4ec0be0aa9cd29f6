use crate::common::enums::Outcome;
use crate::normalize::normalizer::NormalizeWarning;
use crate::result::projection::CapitalProjection;
use crate::series::growth::GrowthFactorSeries;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs for one request: the three
/// factor series for charting, summary percentages, the qualitative
/// outcome, and any warnings recorded during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealReturnResult {
    pub nominal: GrowthFactorSeries,
    pub inflation: GrowthFactorSeries,
    pub real: GrowthFactorSeries,
    pub total_nominal_pct: f64,
    pub total_inflation_pct: f64,
    pub total_real_pct: f64,
    pub outcome: Outcome,
    pub warnings: Vec<NormalizeWarning>,
    pub projection: Option<CapitalProjection>,
}

impl RealReturnResult {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Classifies total real return against a break-even tolerance.
pub fn classify(total_real_pct: f64, tolerance: f64) -> Outcome {
    if total_real_pct.abs() < tolerance {
        Outcome::BreakEven
    } else if total_real_pct > 0.0 {
        Outcome::RealGain
    } else {
        Outcome::RealLoss
    }
}

/// Bundles the three series into a result. Totals are derived from the
/// series' own last factors, never recomputed another way.
pub fn assemble(
    nominal: GrowthFactorSeries,
    inflation: GrowthFactorSeries,
    real: GrowthFactorSeries,
    warnings: Vec<NormalizeWarning>,
    projection: Option<CapitalProjection>,
    break_even_tolerance: f64,
) -> RealReturnResult {
    let total_nominal_pct = nominal.total_pct();
    let total_inflation_pct = inflation.total_pct();
    let total_real_pct = real.total_pct();
    let outcome = classify(total_real_pct, break_even_tolerance);

    RealReturnResult {
        nominal,
        inflation,
        real,
        total_nominal_pct,
        total_inflation_pct,
        total_real_pct,
        outcome,
        warnings,
        projection,
    }
}
