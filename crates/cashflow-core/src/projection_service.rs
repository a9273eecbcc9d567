//! Calendar-bucketed aggregation and running-balance projection.

use cashflow_domain::{CashItem, CashflowReport, MonthBucket, MonthKey};
use tracing::debug;

use crate::{source::CashItemSource, CoreError};

pub struct ProjectionService;

impl ProjectionService {
    /// Buckets `items` into `months` consecutive calendar months starting at
    /// `start`. Buckets come back chronological with zeroed ending balances.
    /// Items due outside the window are ignored, so a caller may hand over a
    /// wider query result than the window itself covers.
    pub fn aggregate(
        start: MonthKey,
        months: u32,
        items: &[CashItem],
    ) -> Result<Vec<MonthBucket>, CoreError> {
        ensure_window(months)?;
        let mut buckets: Vec<MonthBucket> = (0..months as i32)
            .map(|offset| MonthBucket::empty(start.add_months(offset)))
            .collect();
        for item in items {
            ensure_amount(item)?;
            let offset = MonthKey::from_date(item.due_date).months_since(start);
            if offset < 0 || offset >= months as i32 {
                continue;
            }
            buckets[offset as usize].add(item.flow, item.amount);
        }
        Ok(buckets)
    }

    /// Folds `opening_balance` through `buckets`, filling `net` and
    /// `ending_balance` in place.
    ///
    /// Precondition: `buckets` is chronological and gap-free, as produced by
    /// [`Self::aggregate`]. The fold is order-sensitive and does not re-sort.
    pub fn project(buckets: &mut [MonthBucket], opening_balance: f64) {
        let mut balance = opening_balance;
        for bucket in buckets.iter_mut() {
            bucket.net = bucket.inflow - bucket.outflow;
            balance += bucket.net;
            bucket.ending_balance = balance;
        }
    }

    /// Full projection for a window: one range query covering every month,
    /// aggregation, then the balance fold. The opening balance comes from the
    /// source, falling back to `opening_default` when unset. Either the whole
    /// window is produced or an error is returned; never a partial result.
    pub fn window_report(
        source: &dyn CashItemSource,
        start: MonthKey,
        months: u32,
        opening_default: f64,
    ) -> Result<CashflowReport, CoreError> {
        ensure_window(months)?;
        let opening_balance = source.opening_balance()?.unwrap_or(opening_default);
        let items = source.items_in_range(start.window_span(months))?;
        debug!(start = %start, months, items = items.len(), "building cash-flow projection");
        let mut buckets = Self::aggregate(start, months, &items)?;
        Self::project(&mut buckets, opening_balance);
        Ok(CashflowReport {
            opening_balance,
            buckets,
        })
    }
}

fn ensure_window(months: u32) -> Result<(), CoreError> {
    if months == 0 {
        return Err(CoreError::Validation(
            "projection window must cover at least one month".into(),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_amount(item: &CashItem) -> Result<(), CoreError> {
    if !item.amount.is_finite() || item.amount < 0.0 {
        return Err(CoreError::Validation(format!(
            "cash item {} has invalid amount {}",
            item.id, item.amount
        )));
    }
    Ok(())
}
