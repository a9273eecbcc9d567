//! Derived cash-flow views: projection buckets and single-month ledgers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    item::{CashItem, Flow, ItemStatus},
    month::MonthKey,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Aggregated totals for one calendar month of a projection window.
pub struct MonthBucket {
    pub month: MonthKey,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
    pub ending_balance: f64,
}

impl MonthBucket {
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            inflow: 0.0,
            outflow: 0.0,
            net: 0.0,
            ending_balance: 0.0,
        }
    }

    /// Adds `amount` to the side of the bucket selected by `flow`.
    pub fn add(&mut self, flow: Flow, amount: f64) {
        match flow {
            Flow::In => self.inflow += amount,
            Flow::Out => self.outflow += amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Complete projection for a window: opening balance plus one bucket per
/// consecutive month, each carrying its running ending balance.
pub struct CashflowReport {
    pub opening_balance: f64,
    pub buckets: Vec<MonthBucket>,
}

impl CashflowReport {
    /// Balance after the last bucket, or the opening balance for an empty
    /// window.
    pub fn closing_balance(&self) -> f64 {
        self.buckets
            .last()
            .map(|bucket| bucket.ending_balance)
            .unwrap_or(self.opening_balance)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Totals and rows for a single month, independent of any opening balance.
pub struct MonthLedger {
    pub month: MonthKey,
    pub inflow: f64,
    pub outflow: f64,
    pub net: f64,
    pub items: Vec<CashItem>,
}

impl MonthLedger {
    /// Rows visible under `filter`. Filtering narrows the display only;
    /// `inflow`, `outflow` and `net` always cover every item in the month.
    pub fn visible_items(&self, filter: LedgerFilter) -> Vec<&CashItem> {
        self.items
            .iter()
            .filter(|item| filter.shows(item.status))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Presentation filter for ledger rows.
pub enum LedgerFilter {
    #[default]
    All,
    ConfirmedOnly,
}

impl LedgerFilter {
    pub fn shows(self, status: ItemStatus) -> bool {
        match self {
            LedgerFilter::All => true,
            LedgerFilter::ConfirmedOnly => status.is_confirmed(),
        }
    }
}

impl fmt::Display for LedgerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LedgerFilter::All => "All",
            LedgerFilter::ConfirmedOnly => "Confirmed Only",
        };
        f.write_str(label)
    }
}
