use super::CommitSource;
use crate::error::{Result, StatsError};
use crate::model::CommitRecord;
use chrono::DateTime;
use gix::{ObjectId, Repository};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = gix::open(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every commit reachable from HEAD, visited once. An unborn HEAD has none.
    pub fn collect_commits(&self) -> Result<Vec<CommitRecord>> {
        let mut head = self.repo.head()?;
        if head.is_unborn() {
            return Ok(Vec::new());
        }
        let head_commit = head.peel_to_commit_in_place()?;

        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = vec![head_commit.id];

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let author = commit.author()?;
            // Author date, so rebased or amended commits stay on the day they were written
            let secs = author.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| StatsError::InvalidDate(format!("Invalid timestamp: {secs}")))?;

            commits.push(CommitRecord {
                author_name: author.name.to_string(),
                author_email: author.email.to_string(),
                timestamp,
            });

            stack.extend(commit.parent_ids().map(|id| ObjectId::from(id)));
        }

        Ok(commits)
    }
}

/// Reads commits straight from the object database with `gix`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GixSource;

impl CommitSource for GixSource {
    fn commits(&self, repo: &Path) -> Result<Vec<CommitRecord>> {
        GitRepo::open(repo)?.collect_commits()
    }
}
