//! Chart of accounts types.

use std::fmt;
use std::str::FromStr;

use monthend_shared::types::{AccountGroupId, AccountId};
use serde::{Deserialize, Serialize};

use super::balance::NormalBalance;

/// Account type tag.
///
/// The known tags form a fixed enumeration. Tags outside it are kept verbatim
/// in [`AccountType::Other`] so that a chart of accounts carrying custom
/// types still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    /// Receivable.
    AssetReceivable,
    /// Bank and cash.
    AssetCash,
    /// Current assets.
    AssetCurrent,
    /// Non-current assets.
    AssetNonCurrent,
    /// Prepayments.
    AssetPrepayments,
    /// Fixed assets.
    AssetFixed,
    /// Payable.
    LiabilityPayable,
    /// Credit card.
    LiabilityCreditCard,
    /// Current liabilities.
    LiabilityCurrent,
    /// Non-current liabilities.
    LiabilityNonCurrent,
    /// Equity.
    Equity,
    /// Current year earnings.
    EquityUnaffected,
    /// Income.
    Income,
    /// Other income.
    IncomeOther,
    /// Expenses.
    Expense,
    /// Depreciation.
    ExpenseDepreciation,
    /// Cost of revenue.
    ExpenseDirectCost,
    /// Off-balance sheet.
    OffBalance,
    /// Any tag not listed above.
    Other(String),
}

impl AccountType {
    /// Returns the tag string for this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AssetReceivable => "asset_receivable",
            Self::AssetCash => "asset_cash",
            Self::AssetCurrent => "asset_current",
            Self::AssetNonCurrent => "asset_non_current",
            Self::AssetPrepayments => "asset_prepayments",
            Self::AssetFixed => "asset_fixed",
            Self::LiabilityPayable => "liability_payable",
            Self::LiabilityCreditCard => "liability_credit_card",
            Self::LiabilityCurrent => "liability_current",
            Self::LiabilityNonCurrent => "liability_non_current",
            Self::Equity => "equity",
            Self::EquityUnaffected => "equity_unaffected",
            Self::Income => "income",
            Self::IncomeOther => "income_other",
            Self::Expense => "expense",
            Self::ExpenseDepreciation => "expense_depreciation",
            Self::ExpenseDirectCost => "expense_direct_cost",
            Self::OffBalance => "off_balance",
            Self::Other(tag) => tag,
        }
    }

    /// Returns the side on which a positive balance of this type is shown.
    ///
    /// Asset and expense types are debit-natured. Everything else, including
    /// off-balance and unknown tags, is credit-natured.
    #[must_use]
    pub const fn normal_balance(&self) -> NormalBalance {
        match self {
            Self::AssetReceivable
            | Self::AssetCash
            | Self::AssetCurrent
            | Self::AssetNonCurrent
            | Self::AssetPrepayments
            | Self::AssetFixed
            | Self::Expense
            | Self::ExpenseDepreciation
            | Self::ExpenseDirectCost => NormalBalance::Debit,
            _ => NormalBalance::Credit,
        }
    }
}

impl FromStr for AccountType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "asset_receivable" => Self::AssetReceivable,
            "asset_cash" => Self::AssetCash,
            "asset_current" => Self::AssetCurrent,
            "asset_non_current" => Self::AssetNonCurrent,
            "asset_prepayments" => Self::AssetPrepayments,
            "asset_fixed" => Self::AssetFixed,
            "liability_payable" => Self::LiabilityPayable,
            "liability_credit_card" => Self::LiabilityCreditCard,
            "liability_current" => Self::LiabilityCurrent,
            "liability_non_current" => Self::LiabilityNonCurrent,
            "equity" => Self::Equity,
            "equity_unaffected" => Self::EquityUnaffected,
            "income" => Self::Income,
            "income_other" => Self::IncomeOther,
            "expense" => Self::Expense,
            "expense_depreciation" => Self::ExpenseDepreciation,
            "expense_direct_cost" => Self::ExpenseDirectCost,
            "off_balance" => Self::OffBalance,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for AccountType {
    fn from(tag: String) -> Self {
        let Ok(account_type) = tag.parse();
        account_type
    }
}

impl From<AccountType> for String {
    fn from(account_type: AccountType) -> Self {
        account_type.as_str().to_string()
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account group used to bucket accounts in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountGroup {
    /// Unique identifier.
    pub id: AccountGroupId,
    /// Group display name.
    pub name: String,
}

/// Chart of accounts entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account name.
    pub name: String,
    /// Account code (e.g., "101000").
    pub code: String,
    /// Account type tag.
    pub account_type: AccountType,
    /// Group this account belongs to, if any.
    pub group: Option<AccountGroup>,
}

impl Account {
    /// Returns the name shown in reports: code and name, or the bare name
    /// when the account has no code.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.code.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.code, self.name)
        }
    }
}
