mod common;

use std::fs;

use ledger_insights::{
    aggregate,
    utils::persistence::{load_document, parse_document, read_document, save_report},
    InsightsError,
};

use common::{scratch_dir, write_fixture, STATEMENT_JSON};

#[test]
fn loads_envelope_documents() {
    let path = write_fixture("statement.json", STATEMENT_JSON);
    let document = load_document(&path).expect("load statement");
    assert_eq!(document.transactions.len(), 4);

    let result = aggregate(&document.transactions);
    assert_eq!(result.summary.total_income, 50000.0);
    assert_eq!(result.summary.total_expense, 20499.5);
    assert_eq!(result.summary.max_transaction.description, "Client invoice");
    assert_eq!(result.timeline.len(), 3);
    assert!(!result.is_single_date);
    assert!(result
        .asset_totals
        .iter()
        .any(|entry| entry.name == "Unknown Item" && entry.value == 0.0));
    assert!(result
        .category_totals
        .iter()
        .any(|entry| entry.name == "Uncategorized"));
}

#[test]
fn accepts_bare_arrays_and_missing_lists() {
    let bare = parse_document(r#"[{"amount": 5, "type": "CREDIT"}]"#).expect("bare array");
    assert_eq!(bare.transactions.len(), 1);

    let missing = parse_document(r#"{"status": "PROCESSED"}"#).expect("no transactions key");
    assert!(missing.transactions.is_empty());
    assert_eq!(aggregate(&missing.transactions), aggregate(&[]));
}

#[test]
fn null_or_non_array_transaction_lists_read_as_empty() {
    for payload in [
        r#"{"transactions": null}"#,
        r#"{"transactions": {"id": 1}}"#,
        r#"{"transactions": "pending"}"#,
    ] {
        let document = parse_document(payload).expect(payload);
        assert!(document.transactions.is_empty(), "{payload}");
        assert_eq!(aggregate(&document.transactions), aggregate(&[]));
    }
}

#[test]
fn rejects_scalar_payloads() {
    let err = parse_document("42").expect_err("scalar payload");
    assert!(matches!(err, InsightsError::InvalidInput(_)));
    assert!(err.to_string().contains("a number"));
}

#[test]
fn reports_malformed_json() {
    let err = read_document("{ broken".as_bytes()).expect_err("broken json");
    assert!(matches!(err, InsightsError::Serde(_)));
}

#[test]
fn missing_files_surface_io_errors() {
    let err = load_document(&scratch_dir().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, InsightsError::Io(_)));
}

#[test]
fn saved_reports_are_pretty_json() {
    let document = parse_document(STATEMENT_JSON).expect("parse statement");
    let report = aggregate(&document.transactions);
    let path = scratch_dir().join("reports").join("statement-report.json");

    save_report(&path, &report).expect("save report");

    let written = fs::read_to_string(&path).expect("read report");
    let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
    assert_eq!(value["transactionCount"], 4);
    assert_eq!(value["summary"]["netFlow"], 29500.5);
    assert!(written.contains('\n'));
}
