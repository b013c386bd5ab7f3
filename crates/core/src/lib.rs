//! Core reporting logic for Monthend.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, balance rules, and report aggregation live here.
//!
//! # Modules
//!
//! - `ledger` - Accounts, ledger lines, balance rules and the query seam
//! - `fiscal` - Calendar-month reporting periods
//! - `reports` - Trial Balance and Profit & Loss aggregation

pub mod fiscal;
pub mod ledger;
pub mod reports;
