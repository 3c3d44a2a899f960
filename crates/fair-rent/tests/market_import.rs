//! Integration coverage for the market snapshot CSV importer.

use std::io::Cursor;

use chrono::NaiveDate;
use fair_rent::pricing::market::{import_snapshots, MarketImportError};

fn csv(rows: &[&str]) -> String {
    let mut lines = vec!["City,State,Median Household Income,Average Rent,As Of"];
    lines.extend_from_slice(rows);
    lines.join("\n")
}

#[test]
fn importer_reads_currency_formatted_exports() {
    let snapshots = import_snapshots(Cursor::new(csv(&[
        "Des Moines,IA,\"$75,000\",\"$2,000\",2025-06-01",
        "Cedar Rapids,IA,61250,1375,2025-06-01T00:00:00Z",
    ])))
    .expect("csv parses");

    assert_eq!(snapshots.len(), 2);
    assert!((snapshots[0].economics.local_median_income - 75_000.0).abs() < 1e-6);
    assert_eq!(
        snapshots[1].as_of,
        Some(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"))
    );
}

#[test]
fn importer_tolerates_missing_dates() {
    let snapshots = import_snapshots(Cursor::new(csv(&["Ames,IA,52000,1150,"])))
        .expect("csv parses");

    assert_eq!(snapshots[0].as_of, None);
}

#[test]
fn importer_rejects_garbled_amounts_with_position() {
    let result = import_snapshots(Cursor::new(csv(&[
        "Ames,IA,52000,1150,",
        "Waterloo,IA,not-a-number,980,",
    ])));

    match result {
        Err(MarketImportError::InvalidAmount { line, column, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(column, "Median Household Income");
        }
        other => panic!("expected invalid amount, got {other:?}"),
    }
}

#[test]
fn importer_rejects_zero_rents() {
    let result = import_snapshots(Cursor::new(csv(&["Ames,IA,52000,0,"])));

    assert!(matches!(
        result,
        Err(MarketImportError::NonPositiveAmount { line: 2, .. })
    ));
}

#[test]
fn importer_surfaces_structural_csv_failures() {
    let result = import_snapshots(Cursor::new("City,State\nAmes,IA\n"));

    assert!(matches!(result, Err(MarketImportError::Csv(_))));
}
