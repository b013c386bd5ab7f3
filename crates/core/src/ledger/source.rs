//! Query interfaces the report aggregator reads through.
//!
//! Any storage backend (a database snapshot, an in-memory fixture) exposes
//! the chart of accounts and ledger lines through [`LedgerSource`]. The
//! aggregator never mutates what it reads.

use chrono::NaiveDate;
use monthend_shared::types::{AccountId, JournalId, ReportContextId};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::entry::{Journal, LedgerLine, PostingState};
use crate::reports::ReportContext;

/// Read access to accounts, ledger lines, journals and saved report contexts.
pub trait LedgerSource {
    /// Error surfaced by the backend. Returned to callers unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lists the whole chart of accounts in display order.
    fn list_accounts(&self) -> Result<Vec<Account>, Self::Error>;

    /// Lists ledger lines matching the filter.
    fn list_ledger_lines(&self, filter: &LedgerLineFilter) -> Result<Vec<LedgerLine>, Self::Error>;

    /// Lists all journals.
    fn list_journals(&self) -> Result<Vec<Journal>, Self::Error>;

    /// Looks up a saved report context.
    fn find_report_context(
        &self,
        id: ReportContextId,
    ) -> Result<Option<ReportContext>, Self::Error>;
}

/// Filter for ledger line queries.
///
/// Every set field must match. `date_before` is exclusive, `date_from` and
/// `date_to` are inclusive. A journal restriction never matches lines
/// without a journal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLineFilter {
    /// Only lines posting to this account.
    pub account_id: Option<AccountId>,
    /// Only lines whose parent transaction is in this state.
    pub state: Option<PostingState>,
    /// Only lines dated on or after this date.
    pub date_from: Option<NaiveDate>,
    /// Only lines dated on or before this date.
    pub date_to: Option<NaiveDate>,
    /// Only lines dated strictly before this date.
    pub date_before: Option<NaiveDate>,
    /// Only lines recorded in one of these journals.
    pub journal_ids: Option<Vec<JournalId>>,
}

impl LedgerLineFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to one account.
    #[must_use]
    pub fn for_account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Restricts the filter to posted lines.
    #[must_use]
    pub fn posted(mut self) -> Self {
        self.state = Some(PostingState::Posted);
        self
    }

    /// Restricts the filter to lines dated strictly before `date`.
    #[must_use]
    pub fn before(mut self, date: NaiveDate) -> Self {
        self.date_before = Some(date);
        self
    }

    /// Restricts the filter to lines dated within `[from, to]`.
    #[must_use]
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Restricts the filter to lines in `journal_ids`. An empty selection
    /// leaves the filter unrestricted.
    #[must_use]
    pub fn in_journals(mut self, journal_ids: &[JournalId]) -> Self {
        self.journal_ids = (!journal_ids.is_empty()).then(|| journal_ids.to_vec());
        self
    }

    /// Returns true if the line satisfies every condition of the filter.
    #[must_use]
    pub fn matches(&self, line: &LedgerLine) -> bool {
        self.account_id.is_none_or(|id| line.account_id == id)
            && self.state.is_none_or(|state| line.state == state)
            && self.date_from.is_none_or(|from| line.date >= from)
            && self.date_to.is_none_or(|to| line.date <= to)
            && self.date_before.is_none_or(|before| line.date < before)
            && self.journal_ids.as_ref().is_none_or(|ids| {
                line.journal_id.is_some_and(|journal| ids.contains(&journal))
            })
    }
}
