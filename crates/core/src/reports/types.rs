//! Report data types.
//!
//! Field names on the serialized rows are the ones the rendering layer reads,
//! which is why group rows keep the `account_type` / `account_type_name` keys
//! for what is really the group key and group name.

use std::fmt;

use monthend_shared::types::{AccountGroupId, AccountId};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::format::format_amount;
use crate::fiscal::ReportPeriod;
use crate::ledger::{Account, AccountGroup, DebitCredit, Journal, PeriodBalance};

/// Display name of the bucket for accounts without a group.
pub const UNGROUPED_NAME: &str = "Ungrouped";

/// Key of the bucket for accounts without a group.
pub const UNGROUPED_KEY: &str = "ungrouped";

/// Which report an aggregation run feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportVariant {
    /// Trial Balance: grouped rows plus the journal list.
    TrialBalance,
    /// Profit & Loss / Balance Sheet: grouped rows only.
    ProfitAndLoss,
}

impl ReportVariant {
    /// Returns true if the variant carries the journal side-channel.
    #[must_use]
    pub const fn includes_journals(self) -> bool {
        matches!(self, Self::TrialBalance)
    }

    /// Returns the variant name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrialBalance => "trial_balance",
            Self::ProfitAndLoss => "profit_and_loss",
        }
    }
}

/// Key accounts are grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// An account group.
    Group(AccountGroupId),
    /// Accounts without a group.
    Ungrouped,
}

impl GroupKey {
    /// Returns the key and display name for an account's bucket.
    #[must_use]
    pub fn of(group: Option<&AccountGroup>) -> (Self, String) {
        match group {
            Some(group) => (Self::Group(group.id), group.name.clone()),
            None => (Self::Ungrouped, UNGROUPED_NAME.to_string()),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(id) => write!(f, "{id}"),
            Self::Ungrouped => f.write_str(UNGROUPED_KEY),
        }
    }
}

impl Serialize for GroupKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Group(id) => id.serialize(serializer),
            Self::Ungrouped => serializer.serialize_str(UNGROUPED_KEY),
        }
    }
}

/// Per-account report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRow {
    /// Account display name.
    pub account: String,
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub account_code: String,

    /// Formatted debit before the period.
    pub initial_total_debit: String,
    /// Formatted credit before the period.
    pub initial_total_credit: String,
    /// Formatted debit within the period.
    pub period_debit: String,
    /// Formatted credit within the period.
    pub period_credit: String,
    /// Formatted ending debit.
    pub end_total_debit: String,
    /// Formatted ending credit.
    pub end_total_credit: String,

    /// Raw debit before the period.
    pub raw_initial_debit: Decimal,
    /// Raw credit before the period.
    pub raw_initial_credit: Decimal,
    /// Raw debit within the period.
    pub raw_period_debit: Decimal,
    /// Raw credit within the period.
    pub raw_period_credit: Decimal,
    /// Raw ending debit.
    pub raw_end_debit: Decimal,
    /// Raw ending credit.
    pub raw_end_credit: Decimal,
}

impl AccountRow {
    /// Builds the row for an account from its computed balance.
    #[must_use]
    pub fn new(account: &Account, balance: &PeriodBalance) -> Self {
        Self {
            account: account.display_name(),
            account_id: account.id,
            account_code: account.code.clone(),
            initial_total_debit: format_amount(balance.initial.debit),
            initial_total_credit: format_amount(balance.initial.credit),
            period_debit: format_amount(balance.period.debit),
            period_credit: format_amount(balance.period.credit),
            end_total_debit: format_amount(balance.ending.debit),
            end_total_credit: format_amount(balance.ending.credit),
            raw_initial_debit: balance.initial.debit,
            raw_initial_credit: balance.initial.credit,
            raw_period_debit: balance.period.debit,
            raw_period_credit: balance.period.credit,
            raw_end_debit: balance.ending.debit,
            raw_end_credit: balance.ending.credit,
        }
    }

    /// Returns the raw figures carried by this row.
    #[must_use]
    pub fn raw_balance(&self) -> PeriodBalance {
        PeriodBalance {
            initial: DebitCredit::new(self.raw_initial_debit, self.raw_initial_credit),
            period: DebitCredit::new(self.raw_period_debit, self.raw_period_credit),
            ending: DebitCredit::new(self.raw_end_debit, self.raw_end_credit),
        }
    }
}

/// Aggregated row for all accounts sharing a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRow {
    /// Group key.
    #[serde(rename = "account_type")]
    pub key: GroupKey,
    /// Group display name.
    #[serde(rename = "account_type_name")]
    pub name: String,
    /// Member account rows, in chart of accounts order.
    pub accounts: Vec<AccountRow>,

    /// Formatted debit before the period.
    pub initial_total_debit: String,
    /// Formatted credit before the period.
    pub initial_total_credit: String,
    /// Formatted debit within the period.
    pub period_total_debit: String,
    /// Formatted credit within the period.
    pub period_total_credit: String,
    /// Formatted ending debit.
    pub end_total_debit: String,
    /// Formatted ending credit.
    pub end_total_credit: String,

    /// Raw group totals.
    #[serde(skip)]
    pub totals: PeriodBalance,
}

impl GroupRow {
    /// Builds a group row from its members and summed totals.
    #[must_use]
    pub fn new(key: GroupKey, name: String, accounts: Vec<AccountRow>, totals: PeriodBalance) -> Self {
        Self {
            key,
            name,
            accounts,
            initial_total_debit: format_amount(totals.initial.debit),
            initial_total_credit: format_amount(totals.initial.credit),
            period_total_debit: format_amount(totals.period.debit),
            period_total_credit: format_amount(totals.period.credit),
            end_total_debit: format_amount(totals.ending.debit),
            end_total_credit: format_amount(totals.ending.credit),
            totals,
        }
    }
}

/// Journal side-channel of the Trial Balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JournalIndex {
    /// All journals, as `{id, name}` pairs.
    pub journal_ids: Vec<Journal>,
}

/// Output of one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodBalanceReport {
    /// Period the report covers.
    pub period: ReportPeriod,
    /// Group rows sorted by group name.
    pub groups: Vec<GroupRow>,
    /// Journal list, present for the Trial Balance only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journals: Option<JournalIndex>,
}
