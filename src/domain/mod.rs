pub mod transaction;

pub use transaction::{
    RawAmount, Transaction, TransactionDocument, TransactionId, TransactionKind, UNCATEGORIZED,
    UNKNOWN_DESCRIPTION,
};
