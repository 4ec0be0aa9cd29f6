use serde::{Deserialize, Serialize};

/// Monetary projection of an initial invested amount.
///
/// `final_amount` is what the shares bought on day one are worth at the end
/// of the window; `inflation_adjusted_amount` is the break-even value the
/// money would need to reach just to keep its purchasing power.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalProjection {
    pub initial_amount: f64,
    pub final_amount: f64,
    pub inflation_adjusted_amount: f64,
}

impl CapitalProjection {
    pub fn from_factors(initial_amount: f64, nominal_last: f64, inflation_last: f64) -> Self {
        Self {
            initial_amount,
            final_amount: initial_amount * nominal_last,
            inflation_adjusted_amount: initial_amount * inflation_last,
        }
    }

    pub fn beat_inflation(&self) -> bool {
        self.final_amount > self.inflation_adjusted_amount
    }
}
