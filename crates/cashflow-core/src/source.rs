//! Read contract for the external cash-item store.

use cashflow_domain::{CashItem, DateSpan, MonthKey};

use crate::SourceError;

/// Read-only access to dated cash records. The engine only queries through
/// this interface; it never mutates records and never retries a failed call.
pub trait CashItemSource: Send + Sync {
    /// Items with `span.start <= due_date < span.end`, ascending by due date
    /// with ties broken by insertion order.
    fn items_in_range(&self, span: DateSpan) -> Result<Vec<CashItem>, SourceError>;

    /// Items due inside `month`. Equivalent to [`Self::items_in_range`] over
    /// the month's span.
    fn items_in_month(&self, month: MonthKey) -> Result<Vec<CashItem>, SourceError> {
        self.items_in_range(month.span())
    }

    /// Stored opening balance for the account, or `None` when unset.
    fn opening_balance(&self) -> Result<Option<f64>, SourceError>;
}

/// Canonical result ordering: ascending due date, then insertion timestamp.
/// Backends apply this before returning query results.
pub fn order_items(items: &mut [CashItem]) {
    items.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}
