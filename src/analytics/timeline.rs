use std::collections::HashMap;

use crate::currency::format_day_month;
use crate::domain::Transaction;

use super::TimelineBucket;

/// Groups dated transactions by their `DD Mon` label and orders the buckets
/// chronologically by the earliest date that landed in each one.
///
/// Entries without a readable date are skipped.
pub fn build_timeline(transactions: &[Transaction]) -> Vec<TimelineBucket> {
    let mut buckets: Vec<TimelineBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for txn in transactions {
        let Some(date) = txn.calendar_date() else {
            continue;
        };
        let label = format_day_month(date);
        let slot = *index.entry(label.clone()).or_insert_with(|| {
            buckets.push(TimelineBucket::new(label, date));
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        bucket.anchor = bucket.anchor.min(date);

        let amount = txn.amount_value();
        if txn.is_credit() {
            bucket.income += amount;
        } else {
            bucket.debit += amount;
        }
    }

    buckets.sort_by_key(|bucket| bucket.anchor);
    buckets
}
