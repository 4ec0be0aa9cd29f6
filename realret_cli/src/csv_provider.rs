use chrono::NaiveDate;
use csv::{Reader, StringRecord};
use realret_core::provider::{InflationIndexProvider, StockPriceProvider};
use realret_core::{InflationPoint, Period, PricePoint, RealReturnError};
use std::path::PathBuf;

/// Adjusted-close history from a `date,adjusted_close` CSV.
///
/// Row parsing happens here at the collaborator boundary; only typed
/// points cross into the engine, which does its own window filtering.
pub struct CsvStockProvider {
    path: PathBuf,
}

impl CsvStockProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StockPriceProvider for CsvStockProvider {
    fn fetch(
        &self,
        ticker: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<PricePoint>, RealReturnError> {
        let source = format!("prices for {} ({})", ticker, self.path.display());
        let mut rdr = Reader::from_path(&self.path).map_err(|e| unavailable(&source, e))?;
        let mut points = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| unavailable(&source, e))?;
            points.push(
                parse_price_record(&record)
                    .map_err(|reason| unavailable(&source, reason))?,
            );
        }
        Ok(points)
    }
}

/// IPCA history from a CSV of either shape:
/// `period,index_value` (index levels) or `period,monthly_rate_pct`
/// (BCB SGS 433 monthly percentage rates, compounded onto a base of 100).
pub struct CsvInflationProvider {
    path: PathBuf,
}

impl CsvInflationProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InflationIndexProvider for CsvInflationProvider {
    fn fetch(
        &self,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<InflationPoint>, RealReturnError> {
        let source = format!("IPCA ({})", self.path.display());
        let mut rdr = Reader::from_path(&self.path).map_err(|e| unavailable(&source, e))?;

        let headers = rdr.headers().map_err(|e| unavailable(&source, e))?;
        let shape = detect_shape(headers).map_err(|reason| unavailable(&source, reason))?;

        let mut periods = Vec::new();
        let mut values = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| unavailable(&source, e))?;
            let (period, value) =
                parse_inflation_record(&record).map_err(|reason| unavailable(&source, reason))?;
            periods.push(period);
            values.push(value);
        }

        match shape {
            InflationShape::IndexLevel => Ok(periods
                .into_iter()
                .zip(values)
                .map(|(period, value)| InflationPoint::new(period, value))
                .collect()),
            InflationShape::MonthlyRatePct => build_index_from_rates(&periods, &values)
                .map_err(|reason| unavailable(&source, reason)),
        }
    }
}

/// Rates compound month over month, so the rows must cover consecutive
/// months; a gap would shift every later level onto the wrong month.
fn build_index_from_rates(
    periods: &[Period],
    rates_pct: &[f64],
) -> Result<Vec<InflationPoint>, String> {
    let Some(&first_period) = periods.first() else {
        return Ok(Vec::new());
    };
    let mut expected = first_period;
    for &period in periods {
        if period != expected {
            return Err(format!(
                "monthly rates must cover consecutive months: expected {}, got {}",
                expected, period
            ));
        }
        expected = expected.next();
    }
    Ok(InflationPoint::index_from_monthly_rates(
        first_period,
        100.0,
        rates_pct,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InflationShape {
    IndexLevel,
    MonthlyRatePct,
}

fn detect_shape(headers: &StringRecord) -> Result<InflationShape, String> {
    match headers.get(1).map(str::trim) {
        Some("index_value") => Ok(InflationShape::IndexLevel),
        Some("monthly_rate_pct") => Ok(InflationShape::MonthlyRatePct),
        other => Err(format!(
            "second column must be index_value or monthly_rate_pct, got {:?}",
            other
        )),
    }
}

fn parse_price_record(record: &StringRecord) -> Result<PricePoint, String> {
    let date = record.get(0).ok_or("missing date column")?;
    let close = record.get(1).ok_or("missing adjusted_close column")?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| e.to_string())?;
    let close: f64 = close.trim().parse().map_err(|_| {
        format!("adjusted_close on {} is not a number: {}", date, close)
    })?;
    Ok(PricePoint::new(date, close))
}

fn parse_inflation_record(record: &StringRecord) -> Result<(Period, f64), String> {
    let period = record.get(0).ok_or("missing period column")?;
    let value = record.get(1).ok_or("missing value column")?;
    let period = Period::from_str(period.trim())?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("value for {} is not a number: {}", period, value))?;
    Ok((period, value))
}

fn unavailable(source: &str, reason: impl ToString) -> RealReturnError {
    RealReturnError::DataUnavailable {
        provider: source.to_string(),
        reason: reason.to_string(),
    }
}
