//! CSV import of local market snapshots (median income and average rent per
//! place), with normalized lookup keys.

mod normalizer;
mod parser;

#[cfg(test)]
pub(crate) use normalizer::normalize_for_tests;
#[cfg(test)]
pub(crate) use parser::parse_amount_for_tests;

use std::io::Read;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{EconomicInputs, Location};

/// One imported row: where, the economics observed there, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub location: Location,
    pub economics: EconomicInputs,
    pub as_of: Option<NaiveDate>,
}

/// Normalized `(city, state)` key so lookups ignore case and stray whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarketKey {
    city: String,
    state: String,
}

impl MarketKey {
    pub fn new(location: &Location) -> Self {
        Self::from_parts(&location.city, &location.state)
    }

    pub fn from_parts(city: &str, state: &str) -> Self {
        Self {
            city: normalizer::normalize_place(city),
            state: normalizer::normalize_place(state),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

/// Errors raised while decoding a market CSV export.
#[derive(Debug, thiserror::Error)]
pub enum MarketImportError {
    #[error("failed to read market csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{value}' in column '{column}' is not a number")]
    InvalidAmount {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("line {line}: column '{column}' must hold a positive amount")]
    NonPositiveAmount { line: usize, column: &'static str },
}

/// Decode market snapshots from a CSV export.
pub fn import_snapshots<R: Read>(reader: R) -> Result<Vec<MarketSnapshot>, MarketImportError> {
    parser::parse_snapshots(reader)
}
