//! The one place that reads the wall clock. Everything downstream works on
//! the `chrono` values produced here, so domain logic stays pure and
//! testable off-browser.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use js_sys::Date;

/// Current local date and time as a naive clock value.
pub fn now_local() -> NaiveDateTime {
    let now = Date::new_0();
    let date = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1, // JavaScript months are 0-indexed
        now.get_date() as u32,
    );
    let time = NaiveTime::from_hms_opt(
        now.get_hours() as u32,
        now.get_minutes() as u32,
        now.get_seconds() as u32,
    );
    match (date, time) {
        (Some(date), Some(time)) => date.and_time(time),
        // The browser clock produced out-of-range components; fall back to
        // the epoch rather than panic.
        _ => NaiveDateTime::UNIX_EPOCH,
    }
}

pub fn today() -> NaiveDate {
    now_local().date()
}

/// Day key used by the shopping list storage, `YYYY-MM-DD`.
pub fn today_key() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// First and last day of the current month as `YYYY-MM-DD`, the default
/// dashboard range.
pub fn current_month_range() -> (String, String) {
    let today = today();
    let year = today.year();
    let month = today.month();
    let first = format!("{year:04}-{month:02}-01");
    let last_day = days_in_month(year, month);
    let last = format!("{year:04}-{month:02}-{last_day:02}");
    (first, last)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
