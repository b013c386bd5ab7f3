//! Ledger line and journal types.

use chrono::NaiveDate;
use monthend_shared::types::{AccountId, JournalId, LedgerLineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Posting state of the transaction a ledger line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostingState {
    /// Transaction is still being edited.
    Draft,
    /// Transaction is final and counts towards balances.
    Posted,
    /// Transaction was cancelled.
    Cancelled,
}

/// A single debit/credit line in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// Unique identifier.
    pub id: LedgerLineId,
    /// Account the line posts to.
    pub account_id: AccountId,
    /// Journal the parent transaction was recorded in.
    pub journal_id: Option<JournalId>,
    /// Accounting date.
    pub date: NaiveDate,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Posting state of the parent transaction.
    pub state: PostingState,
}

impl LedgerLine {
    /// Returns true if the parent transaction is posted.
    #[must_use]
    pub fn is_posted(&self) -> bool {
        self.state == PostingState::Posted
    }
}

/// Journal reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Journal name.
    pub name: String,
}
