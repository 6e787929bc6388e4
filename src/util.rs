use chrono::{DateTime, Local, NaiveDate, Utc};

/// Local wall-clock calendar day of a timestamp.
pub fn local_day(timestamp: &DateTime<Utc>) -> NaiveDate {
    timestamp.with_timezone(&Local).date_naive()
}

/// Short English month name, e.g. `Jan`.
pub fn short_month(date: NaiveDate) -> String {
    date.format("%b").to_string()
}
