//! Ledger entries as delivered by the document-extraction endpoint.
//!
//! Upstream data is loosely typed: amounts arrive as numbers or numeric
//! strings, labels may be missing or empty, and dates may be absent. The
//! model keeps the raw values and resolves them lazily so the aggregation
//! rules live in one place.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

pub const UNKNOWN_DESCRIPTION: &str = "Unknown Item";
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Opaque identifier; only used as a display key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(number) => write!(f, "{number}"),
            TransactionId::Text(text) => f.write_str(text),
        }
    }
}

/// Direction tag. Only the exact string `CREDIT` is an inflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    Credit,
    #[default]
    Debit,
}

impl Serialize for TransactionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            TransactionKind::Credit => "CREDIT",
            TransactionKind::Debit => "DEBIT",
        })
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(tag) if tag == "CREDIT" => TransactionKind::Credit,
            _ => TransactionKind::Debit,
        })
    }
}

/// Amount exactly as received. Resolved with [`RawAmount::value`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAmount(Value);

impl RawAmount {
    /// Numeric value of the amount, or `0.0` when nothing numeric can be read.
    ///
    /// Strings use leading-prefix parsing, so `"12.5 INR"` reads as `12.5`.
    pub fn value(&self) -> f64 {
        let parsed = match &self.0 {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_numeric_prefix(text),
            _ => None,
        };
        match parsed {
            Some(amount) if !amount.is_nan() => amount,
            _ => 0.0,
        }
    }

    /// True when [`RawAmount::value`] had to fall back to zero.
    pub fn is_coerced(&self) -> bool {
        match &self.0 {
            Value::Number(_) => false,
            Value::String(text) => parse_numeric_prefix(text).is_none(),
            _ => true,
        }
    }
}

impl From<f64> for RawAmount {
    fn from(amount: f64) -> Self {
        Self(Value::from(amount))
    }
}

impl From<&str> for RawAmount {
    fn from(amount: &str) -> Self {
        Self(Value::String(amount.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: RawAmount,
    #[serde(rename = "type", default)]
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: impl Into<RawAmount>) -> Self {
        Self {
            kind,
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn credit(amount: impl Into<RawAmount>) -> Self {
        Self::new(TransactionKind::Credit, amount)
    }

    pub fn debit(amount: impl Into<RawAmount>) -> Self {
        Self::new(TransactionKind::Debit, amount)
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    pub fn amount_value(&self) -> f64 {
        self.amount.value()
    }

    /// Grouping key for asset/liability totals.
    pub fn description_label(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(UNKNOWN_DESCRIPTION)
    }

    /// Grouping key for expense category totals.
    pub fn category_label(&self) -> &str {
        non_empty(self.category.as_deref()).unwrap_or(UNCATEGORIZED)
    }

    /// Calendar date of the entry, or `None` when the date is missing or
    /// cannot be read. Timestamps keep the date of their own offset.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        non_empty(self.date.as_deref()).and_then(parse_calendar_date)
    }

    /// Whether a non-empty date string was supplied, readable or not.
    pub fn has_date(&self) -> bool {
        non_empty(self.date.as_deref()).is_some()
    }
}

/// Envelope returned for a processed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDocument {
    /// `null` or any non-array value reads as an empty list.
    #[serde(default, deserialize_with = "lenient_list")]
    pub transactions: Vec<Transaction>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(stamp.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Reads the longest numeric prefix of `text`, ignoring leading whitespace.
/// Returns `None` when no digits are found.
pub fn parse_numeric_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let magnitude = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -magnitude } else { magnitude });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => serde_json::from_value(items).map_err(serde::de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_prefix_matches_loose_parsing() {
        assert_eq!(parse_numeric_prefix("42"), Some(42.0));
        assert_eq!(parse_numeric_prefix("  -3.5kg"), Some(-3.5));
        assert_eq!(parse_numeric_prefix(".5"), Some(0.5));
        assert_eq!(parse_numeric_prefix("7."), Some(7.0));
        assert_eq!(parse_numeric_prefix("1e3x"), Some(1000.0));
        assert_eq!(parse_numeric_prefix("2e"), Some(2.0));
        assert_eq!(parse_numeric_prefix("1,234"), Some(1.0));
        assert_eq!(parse_numeric_prefix("abc"), None);
        assert_eq!(parse_numeric_prefix("-"), None);
        assert_eq!(parse_numeric_prefix(""), None);
    }

    #[test]
    fn raw_amount_coerces_non_numeric_to_zero() {
        let parsed: Transaction =
            serde_json::from_str(r#"{"amount": "abc", "type": "DEBIT"}"#).expect("parse");
        assert_eq!(parsed.amount_value(), 0.0);
        assert!(parsed.amount.is_coerced());

        let missing: Transaction = serde_json::from_str("{}").expect("parse");
        assert_eq!(missing.amount_value(), 0.0);
        assert_eq!(missing.kind, TransactionKind::Debit);
    }

    #[test]
    fn only_exact_credit_tag_is_credit() {
        let credit: Transaction = serde_json::from_str(r#"{"type": "CREDIT"}"#).expect("parse");
        let lower: Transaction = serde_json::from_str(r#"{"type": "credit"}"#).expect("parse");
        let numeric: Transaction = serde_json::from_str(r#"{"type": 1}"#).expect("parse");
        assert!(credit.is_credit());
        assert!(!lower.is_credit());
        assert!(!numeric.is_credit());
    }

    #[test]
    fn labels_fall_back_when_missing_or_empty() {
        let txn: Transaction =
            serde_json::from_str(r#"{"description": "", "category": null}"#).expect("parse");
        assert_eq!(txn.description_label(), UNKNOWN_DESCRIPTION);
        assert_eq!(txn.category_label(), UNCATEGORIZED);

        let numbered: Transaction =
            serde_json::from_str(r#"{"description": 1042, "category": "Rent"}"#).expect("parse");
        assert_eq!(numbered.description_label(), "1042");
        assert_eq!(numbered.category_label(), "Rent");
    }

    #[test]
    fn calendar_date_accepts_iso_variants() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        for raw in [
            "2026-01-05",
            "2026-01-05T23:59:00",
            "2026-01-05 08:00:00",
            "2026-01-05T23:30:00+05:30",
            "2026-01-05T10:00:00.000Z",
            "2026-01-05T10:00:00.000+0000",
            "2026-01-05T22:15:00-0300",
        ] {
            let txn = Transaction::debit(1.0).with_date(raw);
            assert_eq!(txn.calendar_date(), Some(expected), "{raw}");
        }
        assert_eq!(Transaction::debit(1.0).with_date("soon").calendar_date(), None);
        assert!(Transaction::debit(1.0).with_date("soon").has_date());
        assert!(!Transaction::debit(1.0).with_date("").has_date());
    }

    #[test]
    fn ids_accept_numbers_and_strings() {
        let doc: TransactionDocument =
            serde_json::from_str(r#"{"transactions": [{"id": 7}, {"id": "tx-8"}]}"#)
                .expect("parse");
        let ids: Vec<String> = doc
            .transactions
            .iter()
            .filter_map(|txn| txn.id.as_ref().map(ToString::to_string))
            .collect();
        assert_eq!(ids, vec!["7", "tx-8"]);
    }
}
