//! Calendar-day arithmetic used by the schedule generators and view helpers.
//!
//! Every function works on [`NaiveDate`] values; there is no time-of-day or
//! timezone component anywhere in the forecast.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

const ISO_FORMAT: &str = "%Y-%m-%d";
const MONTH_KEY_FORMAT: &str = "%Y-%m";

/// Truncates a timestamp to its calendar date.
pub fn start_of_day(moment: NaiveDateTime) -> NaiveDate {
    moment.date()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` string by splitting on `-`.
///
/// Returns `None` for anything that does not name a real calendar date, so
/// callers check validity once at the boundary.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns the `YYYY-MM` key used to group rows by month.
pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_KEY_FORMAT).to_string()
}

/// Shifts by whole days; out-of-range results leave `date` unchanged.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(date)
}

/// Shifts by whole months, clamping the day to the end of the target month.
///
/// Out-of-range results leave `date` unchanged.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let Some(index) = date
        .year()
        .checked_mul(12)
        .and_then(|base| base.checked_add(date.month0() as i32))
        .and_then(|base| base.checked_add(months))
    else {
        return date;
    };
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

/// Shifts by whole years, clamping Feb 29 to Feb 28 in non-leap years.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    match years.checked_mul(12) {
        Some(months) => add_months(date, months),
        None => date,
    }
}

/// Whole days from `earlier` to `later` (negative when `later` precedes `earlier`).
pub fn difference_in_days(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
