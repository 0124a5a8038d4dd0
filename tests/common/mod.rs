// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use budget_tracker::application::BudgetService;
use budget_tracker::Repository;
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

/// Helper to create a service backed by a data file in a temporary directory
pub fn test_service() -> Result<(BudgetService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = BudgetService::new(Repository::new(data_path(&temp_dir)));
    Ok((service, temp_dir))
}

/// Path of the data file inside a test directory
pub fn data_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("budget_data.json")
}

/// Helper to build a timestamp from "YYYY-MM-DD HH:MM:SS"
pub fn parse_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Helper to build a midnight timestamp from "YYYY-MM-DD"
pub fn parse_date(s: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
