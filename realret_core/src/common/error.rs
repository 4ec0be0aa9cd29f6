use crate::common::period::Period;
use chrono::NaiveDate;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Which series an error message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SeriesKind {
    Price,
    Inflation,
    Nominal,
    Real,
}

#[derive(Debug, Error)]
pub enum RealReturnError {
    #[error("no {series} data points inside window {start}..={end}")]
    EmptyRange {
        series: SeriesKind,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("first price date {first_price_date} precedes first inflation period {first_inflation_period}, nothing to anchor the forward fill")]
    InsufficientLeadData {
        first_price_date: NaiveDate,
        first_inflation_period: Period,
    },

    #[error("cannot accumulate an empty {0} series")]
    EmptySeries(SeriesKind),

    #[error("growth series date axes diverge at index {index}: {detail}")]
    MisalignedSeries { index: usize, detail: String },

    #[error("{provider} data unavailable: {reason}")]
    DataUnavailable { provider: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RealReturnError {
    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            Self::EmptySeries(_) | Self::MisalignedSeries { .. }
        )
    }
}
