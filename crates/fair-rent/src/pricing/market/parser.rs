use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{EconomicInputs, Location};
use super::{MarketImportError, MarketSnapshot};

pub(crate) fn parse_snapshots<R: Read>(
    reader: R,
) -> Result<Vec<MarketSnapshot>, MarketImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut snapshots = Vec::new();

    for (index, record) in csv_reader.deserialize::<MarketRow>().enumerate() {
        let row = record?;
        // Header row is line 1, so the first data row reports as line 2.
        let line = index + 2;

        let local_median_income = parse_amount(&row.median_income, line, "Median Household Income")?;
        let area_average_rent = parse_amount(&row.average_rent, line, "Average Rent")?;
        let as_of = row.as_of_date();

        snapshots.push(MarketSnapshot {
            location: Location::new(row.city, row.state),
            economics: EconomicInputs {
                local_median_income,
                area_average_rent,
            },
            as_of,
        });
    }

    Ok(snapshots)
}

#[derive(Debug, Deserialize)]
struct MarketRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Median Household Income")]
    median_income: String,
    #[serde(rename = "Average Rent")]
    average_rent: String,
    #[serde(rename = "As Of", default, deserialize_with = "empty_string_as_none")]
    as_of: Option<String>,
}

impl MarketRow {
    fn as_of_date(&self) -> Option<NaiveDate> {
        self.as_of.as_deref().and_then(parse_date)
    }
}

fn parse_amount(value: &str, line: usize, column: &'static str) -> Result<f64, MarketImportError> {
    let stripped: String = value
        .chars()
        .filter(|ch| !matches!(ch, '$' | ',' | ' '))
        .collect();

    let amount = stripped
        .parse::<f64>()
        .map_err(|_| MarketImportError::InvalidAmount {
            line,
            column,
            value: value.to_string(),
        })?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(MarketImportError::NonPositiveAmount { line, column });
    }

    Ok(amount)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_amount_for_tests(value: &str) -> Result<f64, MarketImportError> {
    parse_amount(value, 2, "Median Household Income")
}
