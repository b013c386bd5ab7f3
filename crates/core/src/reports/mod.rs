//! Period balance reports.
//!
//! This module provides pure business logic for the two month-to-date
//! ledger reports:
//! - Trial Balance (grouped rows plus the journal list)
//! - Profit & Loss / Balance Sheet (grouped rows only)
//!
//! Both are produced by one aggregation pass over a [`LedgerSource`].
//!
//! [`LedgerSource`]: crate::ledger::LedgerSource

pub mod context;
pub mod error;
pub mod format;
pub mod service;
pub mod types;


pub use context::{ReportContext, ReportRequest};
pub use error::AggregationError;
pub use format::{format_amount, parse_amount};
pub use service::ReportService;
pub use types::*;
