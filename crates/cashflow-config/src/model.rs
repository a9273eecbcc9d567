use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User-configurable settings for projections and display.
///
/// Nothing here is read from ambient globals; callers load a `Config` and
/// pass the values they need into the services explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Opening balance assumed when the store has none saved.
    #[serde(default)]
    pub opening_balance_default: f64,
    /// Number of consecutive months a projection covers.
    #[serde(default = "Config::default_projection_months_value")]
    pub projection_months: u32,
    /// Thousands separator used at display time.
    #[serde(default = "Config::default_group_separator_value")]
    pub group_separator: char,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for the item store. Defaults to
    /// `<data dir>/Cashflow`.
    pub default_store_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "ja-JP".into(),
            currency: "JPY".into(),
            opening_balance_default: 0.0,
            projection_months: Self::default_projection_months_value(),
            group_separator: Self::default_group_separator_value(),
            default_store_root: None,
        }
    }
}

impl Config {
    pub fn default_projection_months_value() -> u32 {
        12
    }

    pub fn default_group_separator_value() -> char {
        ','
    }

    pub fn resolve_default_store_root(&self) -> PathBuf {
        if let Some(path) = &self.default_store_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Cashflow")
    }
}
