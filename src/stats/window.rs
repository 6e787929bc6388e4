//! Day-bucket arithmetic for the trailing contribution window.
//!
//! A bucket index is the number of whole local calendar days between a
//! commit and today, shifted by [`alignment_offset`] so that every run of
//! seven consecutive buckets starting at a multiple of 7 is one Monday..Sunday
//! calendar week.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// Fixed trailing period anchored at a single captured "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    today: NaiveDate,
    days: usize,
}

impl Window {
    pub fn new(today: NaiveDate, days: usize) -> Self {
        Self { today, days }
    }

    /// Reads the local clock once; every bucket of the run is computed against it.
    pub fn capture(days: usize) -> Self {
        Self::new(Local::now().date_naive(), days)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn days(&self) -> usize {
        self.days
    }

    /// Oldest day still inside the window.
    pub fn start(&self) -> NaiveDate {
        self.today - Duration::days(self.days as i64)
    }

    pub fn offset(&self) -> usize {
        alignment_offset(self.today.weekday())
    }

    pub fn days_since(&self, date: NaiveDate) -> Option<usize> {
        days_since(date, self.today, self.days)
    }

    /// Histogram key for `date`, `None` when the day is outside the window.
    pub fn bucket(&self, date: NaiveDate) -> Option<usize> {
        self.days_since(date).map(|days| days + self.offset())
    }

    /// Inverse of [`Window::bucket`].
    pub fn date_of_bucket(&self, bucket: usize) -> Option<NaiveDate> {
        let days_ago = bucket.checked_sub(self.offset())?;
        Some(self.today - Duration::days(days_ago as i64))
    }

    /// Week columns needed to cover every histogram key `0..=days`.
    pub fn columns(&self) -> usize {
        (self.days + 7) / 7
    }
}

/// Whole calendar days from `date` forward to `today`.
///
/// Returns `None` (out of range) for dates after `today` and for dates more
/// than `window_days` days back.
pub fn days_since(date: NaiveDate, today: NaiveDate, window_days: usize) -> Option<usize> {
    let days = today.signed_duration_since(date).num_days();
    if days < 0 {
        return None;
    }
    let days = days as usize;
    if days > window_days {
        None
    } else {
        Some(days)
    }
}

/// Shift that puts the current week's Sunday at bucket position 0.
///
/// Counts weekdays from Sunday = 0; Sunday itself yields 7 rather than 0.
pub fn alignment_offset(weekday: Weekday) -> usize {
    match weekday.num_days_from_sunday() {
        0 => 7,
        n => 7 - n as usize,
    }
}
