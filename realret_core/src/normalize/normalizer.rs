use crate::common::error::{RealReturnError, SeriesKind};
use crate::common::period::Period;
use crate::config::engine_config::EngineConfig;
use crate::series::normalized::{NormalizedPoint, NormalizedSeries};
use crate::series::point::{InflationPoint, PricePoint};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Why a price point was dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropReason {
    NonPositiveClose,
    NonFiniteClose,
}

/// Non-fatal condition recorded while normalizing; carried into the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizeWarning {
    pub date: NaiveDate,
    pub reason: DropReason,
}

/// Price and inflation series on one shared, strictly increasing date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPair {
    pub nominal: NormalizedSeries,
    pub inflation: NormalizedSeries,
    pub warnings: Vec<NormalizeWarning>,
}

/// Aligns daily prices and monthly inflation onto the price calendar.
///
/// Both raw series are window-filtered inclusively; the monthly index is
/// then upsampled by step-function forward fill (the index for a month is
/// assumed constant within it and carries forward until the next published
/// value). The latest inflation point at or before the window start is kept
/// as the fill anchor even when its month precedes the window.
pub fn normalize(
    prices: &[PricePoint],
    inflation: &[InflationPoint],
    start: NaiveDate,
    end: NaiveDate,
    config: &EngineConfig,
) -> Result<NormalizedPair, RealReturnError> {
    if start > end {
        return Err(RealReturnError::InvalidInput(format!(
            "window start {} is after end {}",
            start, end
        )));
    }

    let prices = filter_prices(prices, start, end)?;
    let (prices, warnings) = drop_invalid_prices(prices, config)?;
    if prices.is_empty() {
        return Err(RealReturnError::EmptyRange {
            series: SeriesKind::Price,
            start,
            end,
        });
    }

    let inflation = filter_inflation(inflation, start, end)?;

    let first_price_date = prices[0].date;
    let first_period = inflation[0].period;
    if first_period.first_day() > first_price_date {
        return Err(RealReturnError::InsufficientLeadData {
            first_price_date,
            first_inflation_period: first_period,
        });
    }

    // Step-function forward fill: walk both series once, advancing the
    // inflation cursor to the latest period published on or before each
    // price date.
    let mut cursor = 0;
    let mut nominal_points = Vec::with_capacity(prices.len());
    let mut inflation_points = Vec::with_capacity(prices.len());
    for price in &prices {
        while cursor + 1 < inflation.len() && inflation[cursor + 1].period.first_day() <= price.date
        {
            cursor += 1;
        }
        nominal_points.push(NormalizedPoint {
            date: price.date,
            value: price.adjusted_close,
        });
        inflation_points.push(NormalizedPoint {
            date: price.date,
            value: inflation[cursor].index_value,
        });
    }

    Ok(NormalizedPair {
        nominal: NormalizedSeries::from_points(nominal_points)?,
        inflation: NormalizedSeries::from_points(inflation_points)?,
        warnings,
    })
}

fn filter_prices(
    prices: &[PricePoint],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PricePoint>, RealReturnError> {
    let mut kept: Vec<PricePoint> = prices
        .iter()
        .filter(|p| p.date >= start && p.date <= end)
        .copied()
        .collect();
    if kept.is_empty() {
        return Err(RealReturnError::EmptyRange {
            series: SeriesKind::Price,
            start,
            end,
        });
    }
    kept.sort_by_key(|p| p.date);
    kept.dedup_by_key(|p| p.date);
    Ok(kept)
}

fn drop_invalid_prices(
    prices: Vec<PricePoint>,
    config: &EngineConfig,
) -> Result<(Vec<PricePoint>, Vec<NormalizeWarning>), RealReturnError> {
    let mut kept = Vec::with_capacity(prices.len());
    let mut warnings = Vec::new();
    for price in prices {
        if price.is_valid() {
            kept.push(price);
            continue;
        }
        if !config.drop_invalid_prices {
            return Err(RealReturnError::InvalidInput(format!(
                "price on {} is not a positive finite number: {}",
                price.date, price.adjusted_close
            )));
        }
        let reason = if price.adjusted_close.is_finite() {
            DropReason::NonPositiveClose
        } else {
            DropReason::NonFiniteClose
        };
        warnings.push(NormalizeWarning {
            date: price.date,
            reason,
        });
    }
    Ok((kept, warnings))
}

fn filter_inflation(
    inflation: &[InflationPoint],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<InflationPoint>, RealReturnError> {
    let end_period = Period::from_date(end);
    let start_period = Period::from_date(start);

    let mut kept: Vec<InflationPoint> = inflation
        .iter()
        .filter(|p| p.period <= end_period)
        .copied()
        .collect();
    kept.sort_by_key(|p| p.period);
    kept.dedup_by_key(|p| p.period);

    // Lead months collapse to the single most recent anchor at the window start.
    if let Some(anchor) = kept.iter().rposition(|p| p.period <= start_period) {
        kept.drain(..anchor);
    }

    if kept.is_empty() {
        return Err(RealReturnError::EmptyRange {
            series: SeriesKind::Inflation,
            start,
            end,
        });
    }
    for point in &kept {
        if !point.index_value.is_finite() || point.index_value <= 0.0 {
            return Err(RealReturnError::InvalidInput(format!(
                "inflation index for {} is not a positive finite number: {}",
                point.period, point.index_value
            )));
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::period::Period;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn price(y: i32, m: u32, d: u32, close: f64) -> PricePoint {
        PricePoint::new(date(y, m, d), close)
    }

    fn index(y: i32, m: u32, value: f64) -> InflationPoint {
        InflationPoint::new(Period::new(y, m).unwrap(), value)
    }

    fn conf() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_forward_fill_skips_missing_month() {
        // Jan=100, Mar=102 (Feb missing); Feb price must carry Jan's value.
        let prices = vec![
            price(2024, 1, 15, 10.0),
            price(2024, 2, 10, 11.0),
            price(2024, 3, 20, 12.0),
        ];
        let inflation = vec![index(2024, 1, 100.0), index(2024, 3, 102.0)];
        let pair = normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 3, 31), &conf())
            .unwrap();

        let values: Vec<f64> = pair.inflation.points().iter().map(|p| p.value).collect();
        assert_eq!(values, vec![100.0, 100.0, 102.0]);
        assert!(pair.warnings.is_empty());
    }

    #[test]
    fn test_shared_date_axis() {
        let prices = vec![price(2024, 1, 2, 10.0), price(2024, 1, 3, 10.5)];
        let inflation = vec![index(2024, 1, 100.0)];
        let pair =
            normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 1, 31), &conf()).unwrap();

        let nominal_dates: Vec<NaiveDate> = pair.nominal.dates().collect();
        let inflation_dates: Vec<NaiveDate> = pair.inflation.dates().collect();
        assert_eq!(nominal_dates, inflation_dates);
    }

    #[test]
    fn test_window_filter_is_inclusive() {
        let prices = vec![
            price(2023, 12, 29, 9.0),
            price(2024, 1, 2, 10.0),
            price(2024, 1, 31, 11.0),
            price(2024, 2, 1, 12.0),
        ];
        let inflation = vec![index(2024, 1, 100.0)];
        let pair =
            normalize(&prices, &inflation, date(2024, 1, 2), date(2024, 1, 31), &conf()).unwrap();
        assert_eq!(pair.nominal.len(), 2);
        assert_eq!(pair.nominal.first().unwrap().date, date(2024, 1, 2));
        assert_eq!(pair.nominal.last().unwrap().date, date(2024, 1, 31));
    }

    #[test]
    fn test_lead_anchor_kept_from_before_window() {
        // Window opens mid-January before the January index exists; the
        // December point anchors the fill.
        let prices = vec![price(2024, 1, 15, 10.0)];
        let inflation = vec![index(2023, 12, 99.0)];
        let pair =
            normalize(&prices, &inflation, date(2024, 1, 10), date(2024, 1, 31), &conf()).unwrap();
        assert_eq!(pair.inflation.first().unwrap().value, 99.0);
    }

    #[test]
    fn test_insufficient_lead_data() {
        let prices = vec![price(2023, 11, 15, 10.0), price(2024, 1, 10, 11.0)];
        let inflation = vec![index(2024, 1, 100.0)];
        let err = normalize(&prices, &inflation, date(2023, 11, 1), date(2024, 1, 31), &conf())
            .unwrap_err();
        match err {
            RealReturnError::InsufficientLeadData {
                first_price_date,
                first_inflation_period,
            } => {
                assert_eq!(first_price_date, date(2023, 11, 15));
                assert_eq!(first_inflation_period, Period::new(2024, 1).unwrap());
            }
            other => panic!("expected InsufficientLeadData, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_price_window() {
        let prices = vec![price(2024, 6, 3, 10.0)];
        let inflation = vec![index(2024, 1, 100.0)];
        let err = normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 1, 31), &conf())
            .unwrap_err();
        assert!(matches!(
            err,
            RealReturnError::EmptyRange {
                series: SeriesKind::Price,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_inflation_window() {
        let prices = vec![price(2024, 1, 15, 10.0)];
        let inflation = vec![index(2024, 6, 100.0)];
        let err = normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 1, 31), &conf())
            .unwrap_err();
        assert!(matches!(
            err,
            RealReturnError::EmptyRange {
                series: SeriesKind::Inflation,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_price_dropped_with_warning() {
        let prices = vec![
            price(2024, 1, 2, 10.0),
            price(2024, 1, 3, 0.0),
            price(2024, 1, 4, f64::NAN),
            price(2024, 1, 5, 10.4),
        ];
        let inflation = vec![index(2024, 1, 100.0)];
        let pair =
            normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 1, 31), &conf()).unwrap();

        assert_eq!(pair.nominal.len(), 2);
        assert_eq!(pair.warnings.len(), 2);
        assert_eq!(pair.warnings[0].date, date(2024, 1, 3));
        assert_eq!(pair.warnings[0].reason, DropReason::NonPositiveClose);
        assert_eq!(pair.warnings[1].reason, DropReason::NonFiniteClose);
    }

    #[test]
    fn test_invalid_price_fatal_when_drop_disabled() {
        let prices = vec![price(2024, 1, 2, 10.0), price(2024, 1, 3, -1.0)];
        let inflation = vec![index(2024, 1, 100.0)];
        let config = EngineConfig {
            drop_invalid_prices: false,
            ..EngineConfig::default()
        };
        let err = normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 1, 31), &config)
            .unwrap_err();
        assert!(matches!(err, RealReturnError::InvalidInput(_)));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = normalize(&[], &[], date(2024, 2, 1), date(2024, 1, 1), &conf()).unwrap_err();
        assert!(matches!(err, RealReturnError::InvalidInput(_)));
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let prices = vec![price(2024, 1, 3, 11.0), price(2024, 1, 2, 10.0)];
        let inflation = vec![index(2024, 1, 100.0)];
        let pair =
            normalize(&prices, &inflation, date(2024, 1, 1), date(2024, 1, 31), &conf()).unwrap();
        assert_eq!(pair.nominal.first().unwrap().value, 10.0);
    }
}
