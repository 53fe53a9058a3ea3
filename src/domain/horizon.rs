use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{date::add_months, errors::ForecastError};

/// Inclusive calendar window that generators fill with events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ForecastError> {
        if start > end {
            return Err(ForecastError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window from `start` through the same day `months` months later.
    pub fn months_from(start: NaiveDate, months: u32) -> Self {
        let months = i32::try_from(months).unwrap_or(i32::MAX / 12);
        Self {
            start,
            end: add_months(start, months),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
