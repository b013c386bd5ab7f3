//! Report generation service.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::context::{ReportContext, ReportRequest};
use super::error::AggregationError;
use super::types::{
    AccountRow, GroupKey, GroupRow, JournalIndex, PeriodBalanceReport, ReportVariant,
};
use crate::fiscal::ReportPeriod;
use crate::ledger::{Account, DebitCredit, LedgerLineFilter, LedgerSource, PeriodBalance};

/// Service for generating period balance reports.
pub struct ReportService;

/// Running totals for one group while accounts are visited.
struct GroupAccumulator {
    key: GroupKey,
    name: String,
    accounts: Vec<AccountRow>,
    totals: PeriodBalance,
}

impl ReportService {
    /// Generates the Trial Balance: grouped rows plus the journal list.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged if any query fails, or
    /// [`AggregationError::AmountOverflow`] if a total overflows.
    pub fn trial_balance<S: LedgerSource>(
        source: &S,
        request: &ReportRequest,
    ) -> Result<(Vec<GroupRow>, JournalIndex), AggregationError<S::Error>> {
        let report = Self::aggregate(source, request, ReportVariant::TrialBalance)?;
        Ok((report.groups, report.journals.unwrap_or_default()))
    }

    /// Generates the Profit & Loss / Balance Sheet rows.
    ///
    /// # Errors
    ///
    /// Same as [`Self::trial_balance`].
    pub fn profit_and_loss<S: LedgerSource>(
        source: &S,
        request: &ReportRequest,
    ) -> Result<Vec<GroupRow>, AggregationError<S::Error>> {
        Self::aggregate(source, request, ReportVariant::ProfitAndLoss).map(|report| report.groups)
    }

    /// Resolves the request's context handle and returns the period to report on.
    ///
    /// An unknown handle is logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged if the lookup fails.
    pub fn resolve_period<S: LedgerSource>(
        source: &S,
        request: &ReportRequest,
    ) -> Result<ReportPeriod, S::Error> {
        let context: Option<ReportContext> = match request.context_id {
            Some(id) => {
                let found = source.find_report_context(id)?;
                if found.is_none() {
                    warn!(context_id = %id, "Report context not found, using bound reference date");
                }
                found
            }
            None => None,
        };

        Ok(ReportPeriod::month_containing(
            request.effective_date(context.as_ref()),
        ))
    }

    /// Builds the grouped report for the month containing the request's
    /// effective reference date.
    ///
    /// Accounts with no posted activity before or during the period are
    /// left out. Groups are sorted by name; groups sharing a name keep the
    /// order in which their first account appears. A journal selection on
    /// the request limits which lines count.
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged if any query fails, or
    /// [`AggregationError::AmountOverflow`] if a total overflows.
    pub fn aggregate<S: LedgerSource>(
        source: &S,
        request: &ReportRequest,
        variant: ReportVariant,
    ) -> Result<PeriodBalanceReport, AggregationError<S::Error>> {
        let period = Self::resolve_period(source, request).map_err(AggregationError::Source)?;
        debug!(
            report = variant.as_str(),
            start = %period.start,
            end = %period.end,
            "Resolved report period"
        );

        let accounts = source.list_accounts().map_err(AggregationError::Source)?;
        let mut groups: Vec<GroupAccumulator> = Vec::new();
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut skipped = 0usize;

        for account in &accounts {
            let base = LedgerLineFilter::new()
                .for_account(account.id)
                .posted()
                .in_journals(&request.journal_ids);

            let initial_lines = source
                .list_ledger_lines(&base.clone().before(period.start))
                .map_err(AggregationError::Source)?;
            let current_lines = source
                .list_ledger_lines(&base.between(period.start, period.end))
                .map_err(AggregationError::Source)?;

            let balance = DebitCredit::checked_sum(&initial_lines)
                .zip(DebitCredit::checked_sum(&current_lines))
                .and_then(|(initial, current)| {
                    PeriodBalance::compute(account.account_type.normal_balance(), initial, current)
                })
                .ok_or_else(|| overflow(account))?;

            if balance.is_inactive() {
                debug!(account_code = %account.code, "Skipping account without activity");
                skipped += 1;
                continue;
            }

            let row = AccountRow::new(account, &balance);
            let (key, name) = GroupKey::of(account.group.as_ref());

            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(GroupAccumulator {
                    key,
                    name,
                    accounts: Vec::new(),
                    totals: PeriodBalance::default(),
                });
                groups.len() - 1
            });

            let group = &mut groups[slot];
            group.totals = group
                .totals
                .checked_add(balance)
                .ok_or_else(|| overflow(account))?;
            group.accounts.push(row);
        }

        let mut rows: Vec<GroupRow> = groups
            .into_iter()
            .map(|g| GroupRow::new(g.key, g.name, g.accounts, g.totals))
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        let journals = if variant.includes_journals() {
            Some(JournalIndex {
                journal_ids: source.list_journals().map_err(AggregationError::Source)?,
            })
        } else {
            None
        };

        info!(
            report = variant.as_str(),
            accounts = accounts.len(),
            skipped,
            groups = rows.len(),
            "Generated period balance report"
        );

        Ok(PeriodBalanceReport {
            period,
            groups: rows,
            journals,
        })
    }
}

fn overflow<E>(account: &Account) -> AggregationError<E> {
    warn!(account_code = %account.code, "Amount overflow while totalling account");
    AggregationError::AmountOverflow {
        account_code: account.code.clone(),
    }
}
