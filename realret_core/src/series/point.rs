use crate::common::period::Period;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day's dividend/split-adjusted closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub adjusted_close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, adjusted_close: f64) -> Self {
        Self {
            date,
            adjusted_close,
        }
    }

    /// A usable price is a finite, strictly positive number.
    pub fn is_valid(&self) -> bool {
        self.adjusted_close.is_finite() && self.adjusted_close > 0.0
    }
}

/// IPCA index level for one calendar month (a level, not a percentage).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InflationPoint {
    pub period: Period,
    pub index_value: f64,
}

impl InflationPoint {
    pub fn new(period: Period, index_value: f64) -> Self {
        Self {
            period,
            index_value,
        }
    }

    /// Builds index levels from monthly percentage rates, the shape the BCB
    /// SGS series 433 publishes IPCA in (0.53 means 0.53% for that month).
    ///
    /// `base` is the index level of the month preceding `first_rate_period`;
    /// each rate compounds onto the running level.
    pub fn index_from_monthly_rates(
        first_rate_period: Period,
        base: f64,
        monthly_rates_pct: &[f64],
    ) -> Vec<InflationPoint> {
        let mut period = first_rate_period;
        let mut level = base;
        let mut points = Vec::with_capacity(monthly_rates_pct.len());
        for rate_pct in monthly_rates_pct {
            level *= 1.0 + rate_pct / 100.0;
            points.push(InflationPoint::new(period, level));
            period = period.next();
        }
        points
    }
}
