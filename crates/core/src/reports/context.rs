//! Report invocation context.

use chrono::NaiveDate;
use monthend_shared::types::{JournalId, ReportContextId};
use serde::{Deserialize, Serialize};

/// A saved set of report options an invocation can be bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    /// Unique identifier.
    pub id: ReportContextId,
    /// Context name.
    pub name: String,
    /// Date whose calendar month the report covers. `None` means "today".
    pub reference_date: Option<NaiveDate>,
}

/// Parameters of one report invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The date the caller is bound to, normally today.
    pub reference_date: NaiveDate,
    /// Optional handle to a saved context.
    pub context_id: Option<ReportContextId>,
    /// Journals to restrict the report to. Empty means every journal.
    #[serde(default)]
    pub journal_ids: Vec<JournalId>,
}

impl ReportRequest {
    /// Creates a request bound to `reference_date` with no context handle.
    #[must_use]
    pub const fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            context_id: None,
            journal_ids: Vec::new(),
        }
    }

    /// Attaches a context handle.
    #[must_use]
    pub fn with_context(mut self, context_id: ReportContextId) -> Self {
        self.context_id = Some(context_id);
        self
    }

    /// Restricts the report to lines recorded in the given journals.
    #[must_use]
    pub fn with_journals(mut self, journal_ids: impl IntoIterator<Item = JournalId>) -> Self {
        self.journal_ids = journal_ids.into_iter().collect();
        self
    }

    /// Returns the date the report period is derived from.
    ///
    /// A resolved context carrying a date wins; anything else falls back to
    /// the bound reference date.
    #[must_use]
    pub fn effective_date(&self, context: Option<&ReportContext>) -> NaiveDate {
        context
            .and_then(|ctx| ctx.reference_date)
            .unwrap_or(self.reference_date)
    }
}
