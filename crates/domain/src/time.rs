//! Time and timestamp helpers.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// UTC timestamp used for `created_at` / `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Midnight (UTC) of the day containing `ts`.
#[must_use]
pub fn start_of_day(ts: Timestamp) -> Timestamp {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Midnight (UTC) of the first day of the month containing `ts`.
#[must_use]
pub fn start_of_month(ts: Timestamp) -> Timestamp {
    NaiveDate::from_ymd_opt(ts.year(), ts.month(), 1)
        .map_or(ts, |date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Midnight (UTC) of January 1st of the year containing `ts`.
#[must_use]
pub fn start_of_year(ts: Timestamp) -> Timestamp {
    NaiveDate::from_ymd_opt(ts.year(), 1, 1)
        .map_or(ts, |date| date.and_time(NaiveTime::MIN).and_utc())
}
