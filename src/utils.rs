use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

/// The last second of the given calendar day. Date-range filters treat the
/// end bound as inclusive through 23:59:59.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}


/// Formats a month bucket as an abbreviated month name plus year, e.g.
/// "Feb 2018".
pub fn month_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}
