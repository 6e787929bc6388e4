use super::window::Window;
use crate::git::CommitSource;
use crate::model::{CommitRecord, RepoFailure};
use crate::util::local_day;
use indicatif::ProgressBar;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Dense commit counts keyed by bucket index `0..=window days`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u32>,
}

impl Histogram {
    pub fn new(window: &Window) -> Self {
        Self {
            counts: vec![0; window.days() + 1],
        }
    }

    /// Adds one commit at `bucket`. Keys outside the histogram are ignored.
    pub fn increment(&mut self, bucket: usize) -> bool {
        match self.counts.get_mut(bucket) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, bucket: usize) -> u32 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(bucket, count)` pairs in ascending bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

#[derive(Debug, Clone)]
pub struct Aggregation {
    pub histogram: Histogram,
    /// Commits by the author that landed in a bucket.
    pub matched: u64,
    pub failures: Vec<RepoFailure>,
}

/// Accumulates one author's commits from any number of repositories.
pub struct Aggregator<'a> {
    window: &'a Window,
    author: &'a str,
    histogram: Histogram,
    matched: u64,
}

impl<'a> Aggregator<'a> {
    pub fn new(window: &'a Window, author: &'a str) -> Self {
        Self {
            window,
            author,
            histogram: Histogram::new(window),
            matched: 0,
        }
    }

    /// Returns how many of `records` were counted.
    pub fn add_commits<'r>(&mut self, records: impl IntoIterator<Item = &'r CommitRecord>) -> u64 {
        let mut counted = 0;
        for record in records {
            if record.author_email != self.author {
                continue;
            }
            let Some(bucket) = self.window.bucket(local_day(&record.timestamp)) else {
                continue;
            };
            if self.histogram.increment(bucket) {
                counted += 1;
            }
        }
        self.matched += counted;
        counted
    }

    pub fn finish(self) -> (Histogram, u64) {
        (self.histogram, self.matched)
    }
}

/// Reads every repository in order and builds the author's histogram.
///
/// A repository that cannot be read is recorded in `failures` and skipped.
pub fn aggregate<S: CommitSource + ?Sized>(
    source: &S,
    repos: &[PathBuf],
    author: &str,
    window: &Window,
    progress: &ProgressBar,
) -> Aggregation {
    let mut aggregator = Aggregator::new(window, author);
    let mut failures = Vec::new();

    for repo in repos {
        progress.set_message(repo.display().to_string());
        match source.commits(repo) {
            Ok(records) => {
                let counted = aggregator.add_commits(&records);
                debug!(repo = %repo.display(), commits = records.len(), counted, "repository read");
            }
            Err(e) => {
                warn!(repo = %repo.display(), error = %e, "skipping unreadable repository");
                failures.push(RepoFailure {
                    path: repo.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
        progress.inc(1);
    }

    let (histogram, matched) = aggregator.finish();
    Aggregation {
        histogram,
        matched,
        failures,
    }
}
