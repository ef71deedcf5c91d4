// Date utility functions
// Calendar-day arithmetic and labels used by the board

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::date_key::DateKey;

/// `None` when the result falls outside the representable calendar.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
}

/// Monday of the week containing `date`, or `date` itself when that Monday
/// predates the calendar.
pub fn start_of_week_monday(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    add_days(date, -offset).unwrap_or(date)
}

/// The seven consecutive days of the Monday-starting week containing `date`.
///
/// Clamped to the calendar, so the first and last weeks may be shorter.
pub fn week_of(date: NaiveDate) -> Vec<NaiveDate> {
    let monday = start_of_week_monday(date);
    (0..7).filter_map(|offset| add_days(monday, offset)).collect()
}

pub fn date_key(date: NaiveDate) -> DateKey {
    DateKey::from(date)
}

/// Full weekday name, e.g. "Monday"
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Abbreviated weekday and day-of-month used by the date strip tabs
pub fn tab_labels(date: NaiveDate) -> (String, String) {
    (date.format("%a").to_string(), date.format("%-d").to_string())
}

/// e.g. "Mar 11"
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
