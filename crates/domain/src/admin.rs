//! Admin metadata — declarative descriptions of how each model is listed,
//! filtered, searched and acted upon in the management surface.
//!
//! Per-model configuration lives in submodules as typed constants. All of
//! them produce the same [`ChangeList`] shape so a single renderer can draw
//! any model.

pub mod amenity;
pub mod room;

use std::str::FromStr;

use chrono::Duration;
use serde::Serialize;

use crate::error::ValidationError;
use crate::time::{Timestamp, start_of_day, start_of_month, start_of_year};

/// One rendered table of records plus the controls that apply to it.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeList {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<ChangeListRow>,
    pub filters: Vec<&'static str>,
    pub search_fields: Vec<&'static str>,
    pub actions: Vec<ActionInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangeListRow {
    pub id: String,
    pub cells: Vec<String>,
}

/// A bulk action offered on a change list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Date-range choices offered by timestamp filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Today,
    PastSevenDays,
    ThisMonth,
    ThisYear,
}

impl DateFilter {
    /// Whether `ts` falls inside the range, relative to `now`.
    #[must_use]
    pub fn matches(self, ts: Timestamp, now: Timestamp) -> bool {
        let since = match self {
            Self::Today => start_of_day(now),
            Self::PastSevenDays => start_of_day(now) - Duration::days(7),
            Self::ThisMonth => start_of_month(now),
            Self::ThisYear => start_of_year(now),
        };
        ts >= since && ts <= now
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::PastSevenDays => "past_7_days",
            Self::ThisMonth => "this_month",
            Self::ThisYear => "this_year",
        }
    }
}

impl FromStr for DateFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Self::Today),
            "past_7_days" => Ok(Self::PastSevenDays),
            "this_month" => Ok(Self::ThisMonth),
            "this_year" => Ok(Self::ThisYear),
            other => Err(ValidationError::InvalidFilter {
                field: "date",
                value: other.to_string(),
            }),
        }
    }
}

/// Format a timestamp for a change-list cell.
#[must_use]
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
