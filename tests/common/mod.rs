#![allow(dead_code)]

use std::{fs, path::PathBuf, sync::Mutex};

use ledger_insights::Transaction;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Writes `contents` to `name` inside a fresh scratch directory.
pub fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = scratch_dir().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// A small bank statement spanning three days.
pub const STATEMENT_JSON: &str = r#"{
  "transactions": [
    {"id": 1, "date": "2026-02-10", "description": "Client invoice", "category": "Sales", "amount": 50000, "type": "CREDIT"},
    {"id": 2, "date": "2026-01-01", "description": "Office rent", "category": "Rent", "amount": "18000", "type": "DEBIT"},
    {"id": 3, "date": "2026-01-15", "description": "Cloud hosting", "category": "Software", "amount": 2499.5, "type": "DEBIT"},
    {"id": "4", "date": null, "description": "", "category": "", "amount": "n/a", "type": "DEBIT"}
  ]
}"#;

pub fn categorized(category: &str, amount: f64) -> Transaction {
    Transaction::debit(amount).with_category(category)
}
