#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDate, TimeZone, Utc};
use gitlocalstats::error::{Result, StatsError};
use gitlocalstats::git::CommitSource;
use gitlocalstats::model::CommitRecord;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

pub const ME: &str = "me@example.com";

/// 2024-05-15 is a Wednesday.
pub fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

/// 2024-05-19 is a Sunday.
pub fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 19).unwrap()
}

pub fn commit_on(email: &str, date: NaiveDate) -> CommitRecord {
    let noon = date.and_hms_opt(12, 0, 0).unwrap();
    let timestamp = Local
        .from_local_datetime(&noon)
        .earliest()
        .unwrap()
        .with_timezone(&Utc);
    CommitRecord {
        author_name: email.split('@').next().unwrap().to_string(),
        author_email: email.to_string(),
        timestamp,
    }
}

pub fn commit_days_ago(email: &str, today: NaiveDate, days: i64) -> CommitRecord {
    commit_on(email, today - Duration::days(days))
}

/// In-memory repositories; any path not registered fails to open.
#[derive(Default)]
pub struct FakeSource {
    repos: HashMap<PathBuf, Vec<CommitRecord>>,
}

impl FakeSource {
    pub fn with_repo(mut self, path: &str, commits: Vec<CommitRecord>) -> Self {
        self.repos.insert(PathBuf::from(path), commits);
        self
    }
}

impl CommitSource for FakeSource {
    fn commits(&self, repo: &Path) -> Result<Vec<CommitRecord>> {
        self.repos
            .get(repo)
            .cloned()
            .ok_or_else(|| {
                StatsError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("not a repository: {}", repo.display()),
                ))
            })
    }
}

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
