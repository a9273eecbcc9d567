//! cashflow-core
//!
//! Aggregation, projection, and ledger services for the cash-flow engine.
//! Depends on cashflow-domain. No terminal I/O, no direct storage interactions.

pub mod error;
pub mod format;
pub mod ledger_service;
pub mod projection_service;
pub mod source;
pub mod time;


pub use error::{CoreError, SourceError};
pub use format::*;
pub use ledger_service::*;
pub use projection_service::*;
pub use source::*;
pub use time::*;
