use crate::common::error::RealReturnError;
use crate::series::point::{InflationPoint, PricePoint};
use chrono::NaiveDate;

/// Collaborator contract for adjusted-close price history.
///
/// Implementations map their own transport failures to `DataUnavailable`;
/// the core never retries.
pub trait StockPriceProvider {
    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, RealReturnError>;
}

/// Collaborator contract for monthly inflation index history.
///
/// Implementations must include enough lead data at or before `start`'s
/// month for the forward fill to anchor.
pub trait InflationIndexProvider {
    fn fetch(&self, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<InflationPoint>, RealReturnError>;
}

/// Appends the B3 `.SA` suffix to short local tickers (PETR4 -> PETR4.SA);
/// longer symbols and already-suffixed ones pass through unchanged.
pub fn normalize_b3_ticker(ticker: &str) -> String {
    let ticker = ticker.trim().to_uppercase();
    if !ticker.ends_with(".SA") && ticker.len() < 6 && !ticker.is_empty() {
        format!("{}.SA", ticker)
    } else {
        ticker
    }
}
