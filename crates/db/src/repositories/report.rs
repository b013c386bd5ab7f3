//! Report repository.
//!
//! Loads a consistent snapshot of the ledger for one report run. The core
//! aggregator then runs over the snapshot without touching the database.

use monthend_core::fiscal::ReportPeriod;
use monthend_core::ledger::{
    Account, AccountGroup, AccountType, InMemoryLedger, Journal, LedgerLine, PostingState,
};
use monthend_core::reports::{ReportContext, ReportRequest};
use monthend_shared::types::{
    AccountGroupId, AccountId, JournalId, LedgerLineId, ReportContextId,
};
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IsolationLevel, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::debug;

use crate::entities::{
    account_groups, accounts, journals, ledger_lines, report_contexts, sea_orm_active_enums,
};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for report data.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a saved report context by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_report_context(
        &self,
        id: ReportContextId,
    ) -> Result<Option<ReportContext>, ReportError> {
        Ok(find_context(&self.db, id).await?)
    }

    /// Loads everything a report for `request` needs.
    ///
    /// Reads the context, the chart of accounts, the journals and every
    /// posted line dated on or before the end of the reporting period,
    /// limited to the selected journals when the request names any. All
    /// reads share one read-only repeatable-read transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any database query fails.
    pub async fn load_snapshot(&self, request: &ReportRequest) -> Result<InMemoryLedger, ReportError> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?;

        let context = match request.context_id {
            Some(id) => find_context(&txn, id).await?,
            None => None,
        };
        let period = ReportPeriod::month_containing(request.effective_date(context.as_ref()));

        let account_rows = accounts::Entity::find()
            .find_also_related(account_groups::Entity)
            .order_by_asc(accounts::Column::Code)
            .all(&txn)
            .await?;

        let journal_rows = journals::Entity::find()
            .order_by_asc(journals::Column::Name)
            .all(&txn)
            .await?;

        let mut line_query = ledger_lines::Entity::find()
            .filter(ledger_lines::Column::PostingState.eq(sea_orm_active_enums::PostingState::Posted))
            .filter(ledger_lines::Column::Date.lte(period.end));
        if !request.journal_ids.is_empty() {
            line_query = line_query.filter(
                ledger_lines::Column::JournalId
                    .is_in(request.journal_ids.iter().copied().map(JournalId::into_inner)),
            );
        }
        let line_rows = line_query
            .order_by_asc(ledger_lines::Column::Date)
            .all(&txn)
            .await?;

        txn.commit().await?;

        debug!(
            start = %period.start,
            end = %period.end,
            accounts = account_rows.len(),
            journals = journal_rows.len(),
            lines = line_rows.len(),
            selected_journals = request.journal_ids.len(),
            "Loaded ledger snapshot"
        );

        let mut ledger = InMemoryLedger::new();
        ledger.extend_accounts(
            account_rows
                .into_iter()
                .map(|(account, group)| account_from_model(account, group)),
        );
        ledger.extend_journals(journal_rows.into_iter().map(journal_from_model));
        ledger.extend_lines(line_rows.into_iter().map(line_from_model));

        Ok(match context {
            Some(context) => ledger.with_context(context),
            None => ledger,
        })
    }
}

async fn find_context<C: ConnectionTrait>(
    conn: &C,
    id: ReportContextId,
) -> Result<Option<ReportContext>, DbErr> {
    let row = report_contexts::Entity::find_by_id(id.into_inner())
        .one(conn)
        .await?;
    Ok(row.map(context_from_model))
}

// ============================================================================
// Model conversions
// ============================================================================

/// Converts an account row and its optional group row.
pub(crate) fn account_from_model(
    account: accounts::Model,
    group: Option<account_groups::Model>,
) -> Account {
    Account {
        id: AccountId::from_uuid(account.id),
        name: account.name,
        code: account.code,
        account_type: AccountType::from(account.account_type),
        group: group.map(|g| AccountGroup {
            id: AccountGroupId::from_uuid(g.id),
            name: g.name,
        }),
    }
}

pub(crate) fn journal_from_model(journal: journals::Model) -> Journal {
    Journal {
        id: JournalId::from_uuid(journal.id),
        name: journal.name,
    }
}

pub(crate) fn line_from_model(line: ledger_lines::Model) -> LedgerLine {
    LedgerLine {
        id: LedgerLineId::from_uuid(line.id),
        account_id: AccountId::from_uuid(line.account_id),
        journal_id: line.journal_id.map(JournalId::from_uuid),
        date: line.date,
        debit: line.debit,
        credit: line.credit,
        state: posting_state_from_db(line.posting_state),
    }
}

pub(crate) fn context_from_model(context: report_contexts::Model) -> ReportContext {
    ReportContext {
        id: ReportContextId::from_uuid(context.id),
        name: context.name,
        reference_date: context.reference_date,
    }
}

pub(crate) const fn posting_state_from_db(state: sea_orm_active_enums::PostingState) -> PostingState {
    match state {
        sea_orm_active_enums::PostingState::Draft => PostingState::Draft,
        sea_orm_active_enums::PostingState::Posted => PostingState::Posted,
        sea_orm_active_enums::PostingState::Cancelled => PostingState::Cancelled,
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
