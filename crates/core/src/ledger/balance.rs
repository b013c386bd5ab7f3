//! Account balance calculations.
//!
//! A report shows each account's balance on exactly one side. Which side
//! absorbs the net balance depends on the sign of `debit - credit` and on
//! whether the account type carries a natural debit or credit balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::LedgerLine;

/// Side on which a positive balance is conventionally shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-natured accounts (assets, expenses).
    Debit,
    /// Credit-natured accounts (liabilities, equity, income).
    Credit,
}

impl NormalBalance {
    /// Splits a net balance (`total_debit - total_credit`) into
    /// `(ending_debit, ending_credit)`.
    ///
    /// At most one side is non-zero. A zero balance lands as zero on both
    /// sides either way; the tie goes to the debit branch for debit-natured
    /// accounts and to the credit branch for credit-natured ones.
    #[must_use]
    pub fn split_ending(self, balance: Decimal) -> (Decimal, Decimal) {
        match self {
            Self::Debit => {
                if balance >= Decimal::ZERO {
                    (balance, Decimal::ZERO)
                } else {
                    (Decimal::ZERO, balance.abs())
                }
            }
            Self::Credit => {
                if balance <= Decimal::ZERO {
                    (Decimal::ZERO, balance.abs())
                } else {
                    (balance, Decimal::ZERO)
                }
            }
        }
    }
}

/// Debit and credit sums over a set of ledger lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitCredit {
    /// Sum of debits.
    pub debit: Decimal,
    /// Sum of credits.
    pub credit: Decimal,
}

impl DebitCredit {
    /// Creates a new pair.
    #[must_use]
    pub const fn new(debit: Decimal, credit: Decimal) -> Self {
        Self { debit, credit }
    }

    /// Returns true if both sides are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }

    /// Net balance, `debit - credit`, or `None` on overflow.
    #[must_use]
    pub fn net(&self) -> Option<Decimal> {
        self.debit.checked_sub(self.credit)
    }

    /// Adds both sides, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            debit: self.debit.checked_add(rhs.debit)?,
            credit: self.credit.checked_add(rhs.credit)?,
        })
    }

    /// Sums the debits and credits of `lines`, returning `None` on overflow.
    #[must_use]
    pub fn checked_sum<'a, I>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LedgerLine>,
    {
        lines.into_iter().try_fold(Self::default(), |acc, line| {
            acc.checked_add(Self::new(line.debit, line.credit))
        })
    }
}

/// Raw balance figures for one account, or summed over a group of accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBalance {
    /// Sums of lines dated before the period.
    pub initial: DebitCredit,
    /// Sums of lines dated within the period.
    pub period: DebitCredit,
    /// Ending balance split by normal side.
    pub ending: DebitCredit,
}

impl PeriodBalance {
    /// Computes an account's figures from its initial and period sums.
    ///
    /// Returns `None` if the combined sums overflow.
    #[must_use]
    pub fn compute(normal: NormalBalance, initial: DebitCredit, period: DebitCredit) -> Option<Self> {
        let total = initial.checked_add(period)?;
        let (debit, credit) = normal.split_ending(total.net()?);

        Some(Self {
            initial,
            period,
            ending: DebitCredit::new(debit, credit),
        })
    }

    /// Returns true if the account saw no activity in either window.
    #[must_use]
    pub fn is_inactive(&self) -> bool {
        self.initial.is_zero() && self.period.is_zero()
    }

    /// Adds every field, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            initial: self.initial.checked_add(rhs.initial)?,
            period: self.period.checked_add(rhs.period)?,
            ending: self.ending.checked_add(rhs.ending)?,
        })
    }
}
