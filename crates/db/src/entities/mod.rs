//! `SeaORM` entity definitions.

pub mod account_groups;
pub mod accounts;
pub mod journals;
pub mod ledger_lines;
pub mod report_contexts;
pub mod sea_orm_active_enums;
