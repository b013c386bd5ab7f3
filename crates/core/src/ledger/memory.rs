//! In-memory ledger backend.

use std::collections::HashMap;
use std::convert::Infallible;

use monthend_shared::types::ReportContextId;

use super::account::Account;
use super::entry::{Journal, LedgerLine};
use super::source::{LedgerLineFilter, LedgerSource};
use crate::reports::ReportContext;

/// A fully materialized ledger.
///
/// Used as the fixture backend in tests and as the snapshot the database
/// layer loads before a report runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    accounts: Vec<Account>,
    lines: Vec<LedgerLine>,
    journals: Vec<Journal>,
    contexts: HashMap<ReportContextId, ReportContext>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account. Accounts are listed in insertion order.
    #[must_use]
    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// Adds a ledger line.
    #[must_use]
    pub fn with_line(mut self, line: LedgerLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Adds a journal.
    #[must_use]
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journals.push(journal);
        self
    }

    /// Adds a saved report context.
    #[must_use]
    pub fn with_context(mut self, context: ReportContext) -> Self {
        self.contexts.insert(context.id, context);
        self
    }

    /// Extends the ledger with many accounts.
    pub fn extend_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) {
        self.accounts.extend(accounts);
    }

    /// Extends the ledger with many lines.
    pub fn extend_lines(&mut self, lines: impl IntoIterator<Item = LedgerLine>) {
        self.lines.extend(lines);
    }

    /// Extends the ledger with many journals.
    pub fn extend_journals(&mut self, journals: impl IntoIterator<Item = Journal>) {
        self.journals.extend(journals);
    }
}

impl LedgerSource for InMemoryLedger {
    type Error = Infallible;

    fn list_accounts(&self) -> Result<Vec<Account>, Self::Error> {
        Ok(self.accounts.clone())
    }

    fn list_ledger_lines(&self, filter: &LedgerLineFilter) -> Result<Vec<LedgerLine>, Self::Error> {
        Ok(self
            .lines
            .iter()
            .filter(|line| filter.matches(line))
            .cloned()
            .collect())
    }

    fn list_journals(&self) -> Result<Vec<Journal>, Self::Error> {
        Ok(self.journals.clone())
    }

    fn find_report_context(
        &self,
        id: ReportContextId,
    ) -> Result<Option<ReportContext>, Self::Error> {
        Ok(self.contexts.get(&id).cloned())
    }
}
