use std::collections::HashSet;

use tracing::{debug, trace};

use crate::domain::Transaction;

use super::{
    flow_totals, ranking::OrderedTotals, timeline::build_timeline, AggregationLimits,
    AggregationResult, MaxTransaction, SummaryMetrics,
};

/// Aggregates with the default caps (6 categories, 5 assets, 5 liabilities).
pub fn aggregate(transactions: &[Transaction]) -> AggregationResult {
    aggregate_with(transactions, &AggregationLimits::default())
}

/// Builds a fresh [`AggregationResult`] from `transactions`.
///
/// Never fails: unreadable amounts count as zero, missing labels take their
/// defaults and undated entries only drop out of the timeline.
pub fn aggregate_with(transactions: &[Transaction], limits: &AggregationLimits) -> AggregationResult {
    if transactions.is_empty() {
        debug!("no transactions to aggregate");
        return AggregationResult::empty();
    }

    let single_date = is_single_date(transactions);

    let mut total_credit = 0.0;
    let mut total_debit = 0.0;
    let mut max_transaction = MaxTransaction::default();
    let mut expenses = OrderedTotals::default();
    let mut assets = OrderedTotals::default();
    let mut liabilities = OrderedTotals::default();

    for (position, txn) in transactions.iter().enumerate() {
        if txn.amount.is_coerced() {
            trace!(position, amount = ?txn.amount, "amount is not numeric; counting as zero");
        }
        if txn.has_date() && txn.calendar_date().is_none() {
            trace!(position, date = ?txn.date, "date is unreadable; treating as undated");
        }
        let amount = txn.amount_value();
        let description = txn.description_label();

        if txn.is_credit() {
            total_credit += amount;
            liabilities.add(description, amount);
        } else {
            total_debit += amount;
            expenses.add(txn.category_label(), amount);
            assets.add(description, amount);
        }

        if amount > max_transaction.amount {
            max_transaction = MaxTransaction {
                amount,
                description: description.to_string(),
            };
        }
    }

    let timeline = build_timeline(transactions);
    let count = transactions.len();

    debug!(
        transactions = count,
        categories = expenses.len(),
        assets = assets.len(),
        liabilities = liabilities.len(),
        timeline_days = timeline.len(),
        single_date,
        "aggregated transactions"
    );

    AggregationResult {
        category_totals: expenses.into_top(limits.categories),
        asset_totals: assets.into_top(limits.assets),
        liability_totals: liabilities.into_top(limits.liabilities),
        flow_totals: flow_totals(total_credit, total_debit),
        timeline,
        summary: SummaryMetrics {
            total_income: total_credit,
            total_expense: total_debit,
            net_flow: total_credit - total_debit,
            avg_transaction: (total_credit + total_debit) / count.max(1) as f64,
            max_transaction,
        },
        is_single_date: single_date,
        transaction_count: count,
    }
}

/// True when the entries span at most one calendar day. Entries with a
/// missing or unreadable date all share one extra "unknown" day, so a list
/// of only undated entries counts as a single date. An empty list does not.
pub fn is_single_date(transactions: &[Transaction]) -> bool {
    if transactions.is_empty() {
        return false;
    }
    let days: HashSet<_> = transactions.iter().map(Transaction::calendar_date).collect();
    days.len() <= 1
}
