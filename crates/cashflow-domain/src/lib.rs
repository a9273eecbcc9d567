//! cashflow-domain
//!
//! Pure domain models (CashItem, MonthKey, MonthBucket, ledger views).
//! No I/O, no storage. Only data types and calendar arithmetic.

pub mod item;
pub mod month;
pub mod report;

pub use item::*;
pub use month::*;
pub use report::*;
