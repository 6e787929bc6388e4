pub mod repo;

pub use repo::{GitRepo, GixSource};

use crate::error::Result;
use crate::model::CommitRecord;
use std::path::Path;

/// Anything that can list the commits reachable in a repository.
pub trait CommitSource {
    fn commits(&self, repo: &Path) -> Result<Vec<CommitRecord>>;
}
