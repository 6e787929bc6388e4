use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Length of the trailing window in days when `--days` is not given.
pub const DEFAULT_WINDOW_DAYS: usize = 183;

/// Directory names never descended into while scanning for repositories.
pub const DEFAULT_EXCLUDES: [&str; 2] = ["vendor", "node_modules"];

/// The part of a commit the contribution calendar cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub author_name: String,
    pub author_email: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub days_ago: usize,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoFailure {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub author: String,
    pub window_days: usize,
    pub today: NaiveDate,
    pub total_commits: u64,
    pub days: Vec<DayCount>,
    pub failures: Vec<RepoFailure>,
}
