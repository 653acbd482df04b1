//! Month bucketing for spending aggregation
//!
//! A [`MonthKey`] identifies the calendar month a date falls into and is the
//! grouping key for "this month" and "by month" views. Its rendered form is
//! `YYYY-MM`, whose lexicographic ordering is chronological.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month used as an aggregation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key from year and month (1-12)
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month a date falls into, using the date's calendar fields
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in the user's local timezone
    ///
    /// Uses local calendar fields, not UTC, so dates near midnight bucket
    /// the way the user expects. Callers comparing against expense dates
    /// must use this same function for "today's month".
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Get the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Get the month (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    /// Parse a month key from a string
    ///
    /// Accepts a bare `YYYY-MM` key, an ISO date (`YYYY-MM-DD`), or an ISO
    /// datetime, whose time-of-day component is ignored.
    pub fn parse(s: &str) -> Result<Self, MonthKeyParseError> {
        let s = s.trim();

        // ISO date or datetime: take the date portion
        if let Some(date_part) = s.get(..10) {
            if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
                // Anything after the date must be a time-of-day separator
                let rest = &s[10..];
                if rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ') {
                    return Ok(Self::from_date(date));
                }
                return Err(MonthKeyParseError::InvalidFormat(s.to_string()));
            }
        }

        // Bare YYYY-MM key
        if let Some((year, month)) = s.split_once('-') {
            let year: i32 = year
                .parse()
                .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = month
                .parse()
                .map_err(|_| MonthKeyParseError::InvalidFormat(s.to_string()))?;

            if !(1..=12).contains(&month) {
                return Err(MonthKeyParseError::InvalidMonth(month));
            }

            return Ok(Self { year, month });
        }

        Err(MonthKeyParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthKeyParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthKeyParseError::InvalidFormat(s) => write!(f, "Invalid month key: {}", s),
            MonthKeyParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthKeyParseError {}
