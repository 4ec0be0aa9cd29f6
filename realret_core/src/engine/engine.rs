use crate::accumulate::accumulator::accumulate;
use crate::common::error::{RealReturnError, SeriesKind};
use crate::config::engine_config::EngineConfig;
use crate::deflate::fisher::deflate;
use crate::normalize::normalizer::normalize;
use crate::result::assembler::{assemble, RealReturnResult};
use crate::result::projection::CapitalProjection;
use crate::series::point::{InflationPoint, PricePoint};
use chrono::NaiveDate;

/// Runs the full pipeline: normalize, accumulate both series, deflate,
/// assemble. Pure and synchronous; both inputs must already be in memory.
#[derive(Debug, Clone, Default)]
pub struct RealReturnEngine {
    config: EngineConfig,
}

impl RealReturnEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute(
        &self,
        prices: &[PricePoint],
        inflation: &[InflationPoint],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RealReturnResult, RealReturnError> {
        self.run(prices, inflation, start, end, None)
    }

    /// Same pipeline, additionally projecting an initial invested amount
    /// through the nominal and inflation factors.
    pub fn compute_with_projection(
        &self,
        prices: &[PricePoint],
        inflation: &[InflationPoint],
        start: NaiveDate,
        end: NaiveDate,
        initial_amount: f64,
    ) -> Result<RealReturnResult, RealReturnError> {
        if !initial_amount.is_finite() || initial_amount <= 0.0 {
            return Err(RealReturnError::InvalidInput(format!(
                "initial amount must be positive, got {}",
                initial_amount
            )));
        }
        self.run(prices, inflation, start, end, Some(initial_amount))
    }

    fn run(
        &self,
        prices: &[PricePoint],
        inflation: &[InflationPoint],
        start: NaiveDate,
        end: NaiveDate,
        initial_amount: Option<f64>,
    ) -> Result<RealReturnResult, RealReturnError> {
        let pair = normalize(prices, inflation, start, end, &self.config)?;
        let nominal = accumulate(&pair.nominal, SeriesKind::Nominal)?;
        let inflation = accumulate(&pair.inflation, SeriesKind::Inflation)?;
        let real = deflate(&nominal, &inflation)?;

        let projection = initial_amount.map(|amount| {
            CapitalProjection::from_factors(amount, nominal.last().factor, inflation.last().factor)
        });

        Ok(assemble(
            nominal,
            inflation,
            real,
            pair.warnings,
            projection,
            self.config.break_even_tolerance,
        ))
    }
}

/// The core's visible contract: default configuration, no projection.
pub fn compute_real_return(
    prices: &[PricePoint],
    inflation: &[InflationPoint],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RealReturnResult, RealReturnError> {
    RealReturnEngine::default().compute(prices, inflation, start, end)
}
