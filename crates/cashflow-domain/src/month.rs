//! Calendar-month identity and boundary arithmetic.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{de::Deserializer, Deserialize, Serialize, Serializer};

/// Identifies a single calendar month, the unit of cash-flow bucketing.
///
/// Displays and parses as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// One-based month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the month `delta` positions away, wrapping across year
    /// boundaries in both directions.
    pub fn add_months(self, delta: i32) -> MonthKey {
        let index = self.index() + delta;
        MonthKey {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Signed number of months from `other` to `self`.
    pub fn months_since(self, other: MonthKey) -> i32 {
        self.index() - other.index()
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Half-open day range covering exactly this month. The end bound is the
    /// first day of the following month, so `span(m).end == span(m+1).start`
    /// and consecutive months tile the calendar without gaps.
    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.first_day(),
            end: self.add_months(1).first_day(),
        }
    }

    /// Half-open day range covering `months` consecutive months starting here.
    pub fn window_span(self, months: u32) -> DateSpan {
        DateSpan {
            start: self.first_day(),
            end: self.add_months(months as i32).first_day(),
        }
    }

    fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthKeyError::Malformed(value.to_string());
        let (year_part, month_part) = value.split_once('-').ok_or_else(&malformed)?;
        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(malformed());
        }
        let year: i32 = year_part.parse().map_err(|_| malformed())?;
        let month: u32 = month_part.parse().map_err(|_| malformed())?;
        MonthKey::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised when constructing or parsing [`MonthKey`] values.
pub enum MonthKeyError {
    Malformed(String),
    MonthOutOfRange(u32),
}

impl fmt::Display for MonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyError::Malformed(value) => {
                write!(f, "month key `{}` is not in YYYY-MM form", value)
            }
            MonthKeyError::MonthOutOfRange(month) => {
                write!(f, "month number {} is outside 1..=12", month)
            }
        }
    }
}

impl std::error::Error for MonthKeyError {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Half-open calendar-day range: `start` inclusive, `end` exclusive.
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateSpanError> {
        if end <= start {
            return Err(DateSpanError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateSpan`] values.
pub enum DateSpanError {
    InvalidRange,
}

impl fmt::Display for DateSpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSpanError::InvalidRange => f.write_str("date span end must be after start"),
        }
    }
}

impl std::error::Error for DateSpanError {}
