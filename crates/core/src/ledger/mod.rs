//! Ledger domain types and the read interfaces reports are built on.
//!
//! This module provides:
//! - Chart of accounts types and account-type classification
//! - Ledger lines, posting states and journals
//! - Ending-balance calculation by normal side
//! - The [`LedgerSource`] query seam and an in-memory implementation

pub mod account;
pub mod balance;
pub mod entry;
pub mod memory;
pub mod source;

pub use account::{Account, AccountGroup, AccountType};
pub use balance::{DebitCredit, NormalBalance, PeriodBalance};
pub use entry::{Journal, LedgerLine, PostingState};
pub use memory::InMemoryLedger;
pub use source::{LedgerLineFilter, LedgerSource};
