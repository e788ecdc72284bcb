#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use dashboard_core::domain::DashboardAggregate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Writes `aggregate` as feed JSON and returns the file path.
pub fn write_aggregate(aggregate: &DashboardAggregate) -> PathBuf {
    let path = scratch_dir().join("aggregate.json");
    let json = serde_json::to_string_pretty(aggregate).expect("serialize aggregate");
    std::fs::write(&path, json).expect("write aggregate");
    path
}

/// The feed document exactly as a backend would send it.
pub const SAMPLE_FEED: &str = r#"{
  "monthSummary": { "incomes": 3200, "expense": 2150, "netSavings": 1050 },
  "weekSummary": { "incomes": 800, "expense": 520, "netSavings": 280 },
  "weeklySpending": [
    { "day": "MONDAY", "total": 85 },
    { "day": "TUESDAY", "total": 120 },
    { "day": "WEDNESDAY", "total": 65 },
    { "day": "THURSDAY", "total": 95 },
    { "day": "FRIDAY", "total": 180 },
    { "day": "SATURDAY", "total": 220 },
    { "day": "SUNDAY", "total": 110 }
  ],
  "spendingByCategory": [
    { "category": "FOOD", "total": 650 },
    { "category": "TRANSPORT", "total": 380 },
    { "category": "ENTERTAINMENT", "total": 420 },
    { "category": "SHOPPING", "total": 290 },
    { "category": "UTILITIES", "total": 180 },
    { "category": "HEALTHCARE", "total": 230 }
  ]
}"#;
