//! Week-major view of the histogram.
//!
//! Week index 0 holds buckets `0..7` and is the current calendar week; higher
//! indices go back in time. Inside a week, position `bucket % 7` runs from
//! Sunday (0) back to Monday (6). Rendering walks weeks from the highest index
//! down to 0 so the current week ends up in the rightmost column.

use super::aggregate::Histogram;
use super::window::Window;
use std::collections::BTreeMap;

pub const DAYS_IN_WEEK: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    weeks: BTreeMap<usize, [u32; DAYS_IN_WEEK]>,
}

impl Grid {
    /// Groups ascending buckets by seven. A week is only stored once all seven
    /// of its buckets have been seen; a trailing partial group is dropped.
    pub fn build(histogram: &Histogram) -> Self {
        let mut weeks = BTreeMap::new();
        let mut column = [0u32; DAYS_IN_WEEK];

        for (bucket, count) in histogram.iter() {
            let week = bucket / DAYS_IN_WEEK;
            let day = bucket % DAYS_IN_WEEK;

            if day == 0 {
                column = [0; DAYS_IN_WEEK];
            }
            column[day] = count;
            if day == DAYS_IN_WEEK - 1 {
                weeks.insert(week, column);
            }
        }

        Self { weeks }
    }

    pub fn week(&self, week: usize) -> Option<&[u32; DAYS_IN_WEEK]> {
        self.weeks.get(&week)
    }

    /// Count at `(week, position)`; weeks that were never completed read as zero.
    pub fn count(&self, week: usize, position: usize) -> u32 {
        self.weeks
            .get(&week)
            .and_then(|days| days.get(position))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn weeks(&self) -> impl Iterator<Item = (usize, &[u32; DAYS_IN_WEEK])> + '_ {
        self.weeks.iter().map(|(&week, days)| (week, days))
    }
}

/// `(week, position)` of the cell that carries today's commits.
pub fn today_cell(window: &Window) -> (usize, usize) {
    let bucket = window.offset();
    (bucket / DAYS_IN_WEEK, bucket % DAYS_IN_WEEK)
}
