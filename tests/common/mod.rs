//! Shared fixtures for the integration tests
//!
//! Provides:
//! - a small telco churn table with a few missing values
//! - config files written to a temporary directory

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use churn_eda::{Column, Table};
use tempfile::TempDir;

/// Eight customers. `TotalCharges` is missing for rows 4 and 7.
pub fn churn_table() -> Table {
    Table::new()
        .with_column(
            "gender",
            Column::categorical(vec!["Female", "Male", "Male", "Female", "Female", "Male", "Female", "Male"]),
        )
        .unwrap()
        .with_column("SeniorCitizen", Column::numeric(vec![0, 0, 1, 0, 1, 0, 0, 1]))
        .unwrap()
        .with_column("tenure", Column::numeric(vec![1, 34, 2, 45, 8, 22, 10, 72]))
        .unwrap()
        .with_column(
            "MonthlyCharges",
            Column::numeric(vec![29.85, 56.95, 53.85, 42.30, 70.70, 89.10, 29.75, 104.80]),
        )
        .unwrap()
        .with_column(
            "TotalCharges",
            Column::numeric_opt(vec![
                Some(29.85),
                Some(1889.50),
                Some(108.15),
                Some(1840.75),
                None,
                Some(1949.40),
                Some(302.35),
                None,
            ]),
        )
        .unwrap()
        .with_column(
            "Contract",
            Column::categorical(vec![
                "Month-to-month",
                "One year",
                "Month-to-month",
                "One year",
                "Month-to-month",
                "Month-to-month",
                "Month-to-month",
                "Two year",
            ]),
        )
        .unwrap()
        .with_column("Churn", Column::categorical(vec!["No", "No", "Yes", "No", "Yes", "No", "No", "No"]))
        .unwrap()
}

/// Writes `contents` to `name` inside a fresh temporary directory.
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_config(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Asserts two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
