//! Report aggregation error types.

use thiserror::Error;

/// Errors that can occur while aggregating a report over a ledger source.
#[derive(Debug, Error)]
pub enum AggregationError<E> {
    /// The ledger source failed; its error is passed through unchanged.
    #[error(transparent)]
    Source(E),

    /// Summing an account's lines, or adding it to its group, overflowed.
    #[error("Amount overflow while totalling account {account_code}")]
    AmountOverflow {
        /// Code of the account being totalled.
        account_code: String,
    },
}

