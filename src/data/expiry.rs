//! Weekly expiry calendar
//!
//! Index options on NSE list weekly expiries on Thursdays. Labels are
//! formatted `DD-Mon-YYYY` (e.g. `25-Jan-2024`).

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Label format for expiry dates
pub const EXPIRY_FORMAT: &str = "%d-%b-%Y";

/// The next `count` dates falling on `weekday`, starting at `from` inclusive
pub fn next_weekly_expiries(from: NaiveDate, count: usize, weekday: Weekday) -> Vec<NaiveDate> {
    let offset = (7 + weekday.num_days_from_monday() as i64
        - from.weekday().num_days_from_monday() as i64)
        % 7;
    let first = from + Duration::days(offset);

    (0..count as i64)
        .map(|week| first + Duration::weeks(week))
        .collect()
}

pub fn format_expiry(date: NaiveDate) -> String {
    date.format(EXPIRY_FORMAT).to_string()
}

pub fn parse_expiry(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(label, EXPIRY_FORMAT).ok()
}

/// Labels for the next `count` Thursday expiries
pub fn expiry_labels(from: NaiveDate, count: usize) -> Vec<String> {
    next_weekly_expiries(from, count, Weekday::Thu)
        .into_iter()
        .map(format_expiry)
        .collect()
}

/// Calendar days from `from` to `expiry`, floored at zero
pub fn days_until(from: NaiveDate, expiry: NaiveDate) -> i64 {
    (expiry - from).num_days().max(0)
}
