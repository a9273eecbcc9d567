//! Single-month ledger totals, independent of the projection engine.

use cashflow_domain::{CashItem, Flow, MonthKey, MonthLedger};
use tracing::debug;

use crate::{projection_service::ensure_amount, source::CashItemSource, CoreError};

pub struct LedgerService;

impl LedgerService {
    /// Totals for one month over `items`, keeping the rows for display.
    /// Status filtering is a view concern ([`MonthLedger::visible_items`]);
    /// it never re-sums these totals.
    pub fn summarize(month: MonthKey, items: Vec<CashItem>) -> Result<MonthLedger, CoreError> {
        let mut inflow = 0.0;
        let mut outflow = 0.0;
        for item in &items {
            ensure_amount(item)?;
            match item.flow {
                Flow::In => inflow += item.amount,
                Flow::Out => outflow += item.amount,
            }
        }
        Ok(MonthLedger {
            month,
            inflow,
            outflow,
            net: inflow - outflow,
            items,
        })
    }

    /// Queries the month's rows from `source` and summarizes them.
    pub fn month_report(
        source: &dyn CashItemSource,
        month: MonthKey,
    ) -> Result<MonthLedger, CoreError> {
        let items = source.items_in_month(month)?;
        debug!(month = %month, items = items.len(), "building month ledger");
        Self::summarize(month, items)
    }
}
