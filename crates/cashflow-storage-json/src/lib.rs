//! cashflow-storage-json
//!
//! Filesystem-backed JSON persistence for cash items and account settings.
//! Implements the core's read contract (`CashItemSource`) and the write
//! operations the projection engine itself never performs.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cashflow_core::{order_items, CashItemSource, CoreError, SourceError};
use cashflow_domain::{CashItem, DateSpan, Flow, ItemStatus};

const ITEMS_FILE: &str = "cash_items.json";
const SETTINGS_FILE: &str = "settings.json";
const TMP_SUFFIX: &str = "tmp";

/// Account-level settings persisted beside the items.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opening_balance: Option<f64>,
}

/// Input shape for a new record; the store assigns identity and the
/// insertion timestamp.
#[derive(Debug, Clone)]
pub struct NewCashItem {
    pub entry_date: NaiveDate,
    pub due_date: NaiveDate,
    pub flow: Flow,
    pub amount: f64,
    pub status: ItemStatus,
    pub item_name: String,
    pub partner: Option<String>,
    pub closing_day: Option<u32>,
    pub note: Option<String>,
    pub memo: Option<String>,
}

impl NewCashItem {
    fn into_item(self) -> CashItem {
        CashItem {
            id: Uuid::new_v4(),
            entry_date: self.entry_date,
            due_date: self.due_date,
            flow: self.flow,
            amount: self.amount,
            status: self.status,
            item_name: self.item_name,
            partner: self.partner,
            closing_day: self.closing_day,
            note: self.note,
            memo: self.memo,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Filesystem-backed JSON store for cash items and the opening balance.
#[derive(Debug, Clone)]
pub struct JsonCashStore {
    root: PathBuf,
}

impl JsonCashStore {
    pub fn new(root: PathBuf) -> Result<Self, SourceError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn items_path(&self) -> PathBuf {
        self.root.join(ITEMS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Validates and persists a new record, returning the stored item.
    pub fn add_item(&self, draft: NewCashItem) -> Result<CashItem, CoreError> {
        validate_entry(&draft.item_name, draft.amount, draft.closing_day)?;
        let item = draft.into_item();
        let mut items = self.load_items()?;
        items.push(item.clone());
        self.save_items(&items)?;
        Ok(item)
    }

    /// Applies `update` to the stored item and refreshes its update
    /// timestamp.
    pub fn update_item(
        &self,
        id: Uuid,
        update: impl FnOnce(&mut CashItem),
    ) -> Result<CashItem, CoreError> {
        let mut items = self.load_items()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;
        update(item);
        item.updated_at = Some(Utc::now());
        validate_entry(&item.item_name, item.amount, item.closing_day)?;
        let updated = item.clone();
        self.save_items(&items)?;
        Ok(updated)
    }

    pub fn delete_item(&self, id: Uuid) -> Result<(), CoreError> {
        let mut items = self.load_items()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(CoreError::ItemNotFound(id));
        }
        self.save_items(&items)?;
        Ok(())
    }

    pub fn get_item(&self, id: Uuid) -> Result<CashItem, CoreError> {
        self.load_items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))
    }

    /// All stored items in canonical query order.
    pub fn list_items(&self) -> Result<Vec<CashItem>, SourceError> {
        let mut items = self.load_items()?;
        order_items(&mut items);
        Ok(items)
    }

    pub fn set_opening_balance(&self, value: f64) -> Result<(), CoreError> {
        if !value.is_finite() {
            return Err(CoreError::Validation(format!(
                "opening balance {} is not a finite number",
                value
            )));
        }
        let mut settings = self.load_settings()?;
        settings.opening_balance = Some(value);
        self.save_settings(&settings)?;
        Ok(())
    }

    fn load_items(&self) -> Result<Vec<CashItem>, SourceError> {
        let path = self.items_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| SourceError::Serde(err.to_string()))
    }

    fn save_items(&self, items: &[CashItem]) -> Result<(), SourceError> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|err| SourceError::Serde(err.to_string()))?;
        write_atomic(&self.items_path(), &json)
    }

    fn load_settings(&self) -> Result<Settings, SourceError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| SourceError::Serde(err.to_string()))
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), SourceError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|err| SourceError::Serde(err.to_string()))?;
        write_atomic(&self.settings_path(), &json)
    }
}

impl CashItemSource for JsonCashStore {
    fn items_in_range(&self, span: DateSpan) -> Result<Vec<CashItem>, SourceError> {
        let mut rows: Vec<CashItem> = self
            .load_items()?
            .into_iter()
            .filter(|item| span.contains(item.due_date))
            .collect();
        order_items(&mut rows);
        Ok(rows)
    }

    fn opening_balance(&self) -> Result<Option<f64>, SourceError> {
        Ok(self.load_settings()?.opening_balance)
    }
}

fn validate_entry(item_name: &str, amount: f64, closing_day: Option<u32>) -> Result<(), CoreError> {
    if item_name.trim().is_empty() {
        return Err(CoreError::Validation("item name is required".into()));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoreError::Validation(format!(
            "amount {} must be a non-negative finite number",
            amount
        )));
    }
    if let Some(day) = closing_day {
        if !(1..=31).contains(&day) {
            return Err(CoreError::Validation(format!(
                "closing day {} is outside 1..=31",
                day
            )));
        }
    }
    Ok(())
}

fn write_atomic(path: &Path, data: &str) -> Result<(), SourceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
