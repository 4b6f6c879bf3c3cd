//! Monthly land-surface temperature dataset.
//!
//! Wire format (camelCase JSON):
//!
//! ```json
//! {
//!   "baseTemperature": 8.66,
//!   "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }]
//! }
//! ```
//!
//! A dataset is validated once on construction and is immutable afterwards.

use crate::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One month's deviation from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u8,
    /// Signed deviation from the base temperature in °C
    pub variance: f64,
}

impl MonthlyRecord {
    /// Create a record.
    #[must_use]
    pub const fn new(year: i32, month: u8, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// Zero-based month index (0 = January).
    #[must_use]
    pub const fn month_index(&self) -> u8 {
        self.month.saturating_sub(1)
    }

    /// The calendar month, if `month` is in range.
    #[must_use]
    pub fn calendar_month(&self) -> Option<Month> {
        Month::from_number(self.month)
    }

    /// Temperature in °C given the dataset's base temperature.
    #[must_use]
    pub fn absolute_temperature(&self, base_temperature: f64) -> f64 {
        self.variance + base_temperature
    }
}

/// Errors produced while decoding or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Body is not JSON or lacks required fields.
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record's month is outside 1-12.
    #[error("record {index}: month {month} is outside 1-12")]
    MonthOutOfRange { index: usize, month: u8 },

    /// Two records share a (year, month) pair.
    #[error("record {index}: duplicate entry for {year}-{month:02}")]
    DuplicateEntry { index: usize, year: i32, month: u8 },

    /// The base temperature is NaN or infinite.
    #[error("base temperature is not finite")]
    NonFiniteBase,

    /// A record's variance is NaN or infinite.
    #[error("record {index}: variance is not finite")]
    NonFiniteVariance { index: usize },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DatasetWire {
    base_temperature: f64,
    monthly_variance: Vec<MonthlyRecord>,
}

/// Base temperature plus its monthly variance records, in received order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    base_temperature: f64,
    monthly_variance: Vec<MonthlyRecord>,
}

impl TemperatureDataset {
    /// Build a dataset, validating every record.
    pub fn new(base_temperature: f64, records: Vec<MonthlyRecord>) -> Result<Self, DatasetError> {
        if !base_temperature.is_finite() {
            return Err(DatasetError::NonFiniteBase);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.calendar_month().is_none() {
                return Err(DatasetError::MonthOutOfRange {
                    index,
                    month: record.month,
                });
            }
            if !record.variance.is_finite() {
                return Err(DatasetError::NonFiniteVariance { index });
            }
            if !seen.insert((record.year, record.month)) {
                return Err(DatasetError::DuplicateEntry {
                    index,
                    year: record.year,
                    month: record.month,
                });
            }
        }

        Ok(Self {
            base_temperature,
            monthly_variance: records,
        })
    }

    /// Decode and validate the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let wire: DatasetWire = serde_json::from_str(json)?;
        Self::new(wire.base_temperature, wire.monthly_variance)
    }

    /// Reference temperature in °C.
    #[must_use]
    pub const fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    /// Records in received order.
    #[must_use]
    pub fn records(&self) -> &[MonthlyRecord] {
        &self.monthly_variance
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Distinct years, ascending.
    #[must_use]
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.monthly_variance.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}
