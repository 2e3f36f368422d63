//! Text and headline tiles shown above the charts.

use serde::Serialize;

use crate::currency::CurrencyFormatter;

use super::AggregationResult;

pub const EMPTY_DOCUMENT_TEXT: &str = "No valid transaction entries were detected in this document.";
const FALLBACK_OUTFLOW: &str = "uncategorized operations";

/// One-sentence executive summary. Snapshot documents report the credit and
/// debit totals; transaction histories report their span and top outflow.
pub fn summary_text(result: &AggregationResult, formatter: &CurrencyFormatter) -> String {
    if result.transaction_count == 0 {
        return EMPTY_DOCUMENT_TEXT.to_string();
    }
    if result.is_single_date {
        return format!(
            "Snapshot: a single-point financial state with {} in total credits/liabilities and {} in assets/debits.",
            formatter.format(result.summary.total_income),
            formatter.format(result.summary.total_expense),
        );
    }
    let outflow = result
        .top_category()
        .map(|category| category.name.as_str())
        .unwrap_or(FALLBACK_OUTFLOW);
    format!(
        "Temporal analysis: {} entries across {} active dates. Primary outflow identified in {}.",
        result.transaction_count,
        result.timeline.len(),
        outflow,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTile {
    pub label: &'static str,
    pub value: f64,
    /// False when the tile should be rendered as a loss.
    pub positive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Headline tiles in display order. Net position is shown as a magnitude
/// with its direction carried by `positive`.
pub fn summary_tiles(result: &AggregationResult) -> [SummaryTile; 4] {
    let summary = &result.summary;
    [
        SummaryTile {
            label: "Total Inflow",
            value: summary.total_income,
            positive: true,
            detail: None,
        },
        SummaryTile {
            label: "Total Outflow",
            value: summary.total_expense,
            positive: false,
            detail: None,
        },
        SummaryTile {
            label: "Net Position",
            value: summary.net_flow.abs(),
            positive: summary.net_flow >= 0.0,
            detail: None,
        },
        SummaryTile {
            label: "Peak Transaction",
            value: summary.max_transaction.amount,
            positive: true,
            detail: Some(summary.max_transaction.description.clone()),
        },
    ]
}
