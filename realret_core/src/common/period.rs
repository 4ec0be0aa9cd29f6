use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar year-month, the publication granularity of the IPCA index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("month {} out of range 1..=12", month));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn from_str(s: &str) -> Result<Self, String> {
        // Supports "YYYY-MM" and "YYYY-MM-DD" (day ignored)
        let mut parts = s.splitn(3, '-');
        let year = parts
            .next()
            .ok_or_else(|| format!("invalid period: {}", s))?
            .parse::<i32>()
            .map_err(|e| e.to_string())?;
        let month = parts
            .next()
            .ok_or_else(|| format!("invalid period: {}", s))?
            .parse::<u32>()
            .map_err(|e| e.to_string())?;
        Self::new(year, month)
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month validated at construction")
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
