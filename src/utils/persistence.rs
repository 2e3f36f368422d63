use std::{fs, io::Read, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::{
    analytics::AggregationResult,
    config::write_atomic,
    domain::{Transaction, TransactionDocument},
    errors::{InsightsError, Result},
};

/// Parses a document payload: either the `{"transactions": [...]}` envelope
/// or a bare array of transactions. An envelope without `transactions`
/// yields an empty document.
pub fn parse_document(data: &str) -> Result<TransactionDocument> {
    match serde_json::from_str::<Value>(data)? {
        Value::Array(items) => {
            let transactions: Vec<Transaction> = serde_json::from_value(Value::Array(items))?;
            Ok(TransactionDocument { transactions })
        }
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        other => Err(InsightsError::InvalidInput(format!(
            "expected an object or array of transactions, found {}",
            json_kind(&other)
        ))),
    }
}

pub fn read_document(mut reader: impl Read) -> Result<TransactionDocument> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_document(&buffer)
}

pub fn load_document(path: &Path) -> Result<TransactionDocument> {
    let data = fs::read_to_string(path)?;
    let document = parse_document(&data)?;
    debug!(
        path = %path.display(),
        transactions = document.transactions.len(),
        "loaded document"
    );
    Ok(document)
}

/// Writes the report as pretty JSON, replacing `path` atomically.
pub fn save_report(path: &Path, report: &AggregationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_atomic(path, &json)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
