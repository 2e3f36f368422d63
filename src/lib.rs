#![doc(test(attr(deny(warnings))))]

//! Ledger Insights aggregates the transactions extracted from financial
//! documents into the totals, rankings, timeline and summary shown on the
//! document insights view.

pub mod analytics;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

pub use analytics::{aggregate, aggregate_with, AggregationLimits, AggregationResult};
pub use domain::{Transaction, TransactionDocument, TransactionKind};
pub use errors::{InsightsError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Ledger Insights tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
