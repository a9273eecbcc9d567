//! Domain models for dated cash inflow/outflow records.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::Deserializer, Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashItem {
    pub id: Uuid,
    /// Date the record was entered, distinct from the date the cash moves.
    pub entry_date: NaiveDate,
    /// Date the cash actually moves; the sole bucketing key.
    pub due_date: NaiveDate,
    pub flow: Flow,
    /// Non-negative magnitude; direction comes from `flow`.
    pub amount: f64,
    pub status: ItemStatus,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Insertion timestamp, the tie-break ordering key for equal due dates.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CashItem {
    pub fn new(
        entry_date: NaiveDate,
        due_date: NaiveDate,
        flow: Flow,
        item_name: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entry_date,
            due_date,
            flow,
            amount,
            status: ItemStatus::Forecast,
            item_name: item_name.into(),
            partner: None,
            closing_day: None,
            note: None,
            memo: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_partner(mut self, partner: impl Into<String>) -> Self {
        self.partner = Some(partner.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Direction of a cash item: receipt or payment.
pub enum Flow {
    In,
    Out,
}

impl Flow {
    pub fn parse(value: &str) -> Result<Self, UnknownValueError> {
        match value {
            "in" => Ok(Flow::In),
            "out" => Ok(Flow::Out),
            other => Err(UnknownValueError::new("flow", other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flow::In => "in",
            Flow::Out => "out",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored data with a flow outside the known set is a data-integrity failure,
// so decoding rejects it instead of coercing to a default.
impl<'de> Deserialize<'de> for Flow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Flow::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
/// Settlement state of a cash item. A display filter, not an aggregation
/// input: totals never depend on it.
pub enum ItemStatus {
    #[default]
    Forecast,
    Confirmed,
}

impl ItemStatus {
    pub fn parse(value: &str) -> Result<Self, UnknownValueError> {
        match value {
            "forecast" => Ok(ItemStatus::Forecast),
            "confirmed" => Ok(ItemStatus::Confirmed),
            other => Err(UnknownValueError::new("status", other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Forecast => "forecast",
            ItemStatus::Confirmed => "confirmed",
        }
    }

    pub fn is_confirmed(self) -> bool {
        matches!(self, ItemStatus::Confirmed)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ItemStatus::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a stored enum field holds a value outside the known set.
pub struct UnknownValueError {
    pub field: &'static str,
    pub value: String,
}

impl UnknownValueError {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for UnknownValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value `{}`", self.field, self.value)
    }
}

impl std::error::Error for UnknownValueError {}
