//! cashflow-config
//!
//! Explicit configuration for the cash-flow engine, replacing ambient
//! globals: opening-balance default, projection window length, display
//! locale. Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
