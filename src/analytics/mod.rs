//! Transaction analytics for processed documents.
//!
//! [`aggregate`] turns a flat list of ledger entries into everything the
//! document insights view renders: ranked category and description totals,
//! credit/debit flow, a per-day timeline, headline metrics and the
//! snapshot-vs-history classification.

pub mod aggregator;
pub mod narrative;
pub mod ranking;
pub mod timeline;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use aggregator::{aggregate, aggregate_with, is_single_date};
pub use narrative::{summary_text, summary_tiles, SummaryTile};

pub const CREDITS_LABEL: &str = "Credits";
pub const DEBITS_LABEL: &str = "Debits";
pub const NO_MAX_DESCRIPTION: &str = "None";

/// Caps applied when ranking totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationLimits {
    pub categories: usize,
    pub assets: usize,
    pub liabilities: usize,
}

impl Default for AggregationLimits {
    fn default() -> Self {
        Self {
            categories: 6,
            assets: 5,
            liabilities: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTotal {
    pub name: String,
    pub value: f64,
}

impl NamedTotal {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One timeline point. `anchor` is the earliest calendar date grouped under
/// the label and drives ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBucket {
    pub date: String,
    pub income: f64,
    pub debit: f64,
    #[serde(skip)]
    pub anchor: NaiveDate,
}

impl TimelineBucket {
    pub fn new(date: String, anchor: NaiveDate) -> Self {
        Self {
            date,
            income: 0.0,
            debit: 0.0,
            anchor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxTransaction {
    pub amount: f64,
    pub description: String,
}

impl Default for MaxTransaction {
    fn default() -> Self {
        Self {
            amount: 0.0,
            description: NO_MAX_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_flow: f64,
    pub avg_transaction: f64,
    pub max_transaction: MaxTransaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    pub category_totals: Vec<NamedTotal>,
    pub asset_totals: Vec<NamedTotal>,
    pub liability_totals: Vec<NamedTotal>,
    pub flow_totals: [NamedTotal; 2],
    pub timeline: Vec<TimelineBucket>,
    pub summary: SummaryMetrics,
    pub is_single_date: bool,
    pub transaction_count: usize,
}

impl AggregationResult {
    /// Neutral result for a document without entries.
    pub fn empty() -> Self {
        Self {
            category_totals: Vec::new(),
            asset_totals: Vec::new(),
            liability_totals: Vec::new(),
            flow_totals: flow_totals(0.0, 0.0),
            timeline: Vec::new(),
            summary: SummaryMetrics::default(),
            is_single_date: false,
            transaction_count: 0,
        }
    }

    pub fn total_credits(&self) -> f64 {
        self.flow_totals[0].value
    }

    pub fn total_debits(&self) -> f64 {
        self.flow_totals[1].value
    }

    pub fn top_category(&self) -> Option<&NamedTotal> {
        self.category_totals.first()
    }
}

impl Default for AggregationResult {
    fn default() -> Self {
        Self::empty()
    }
}

pub(crate) fn flow_totals(credits: f64, debits: f64) -> [NamedTotal; 2] {
    [
        NamedTotal::new(CREDITS_LABEL, credits),
        NamedTotal::new(DEBITS_LABEL, debits),
    ]
}
