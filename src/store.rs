use crate::error::{Result, StatsError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const LIST_FILE_NAME: &str = ".gitlocalstats";

/// Newline-delimited list of repository roots, one absolute path per line.
#[derive(Debug, Clone)]
pub struct RepoList {
    path: PathBuf,
}

impl RepoList {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.gitlocalstats`
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or(StatsError::HomeDir)?;
        Ok(Self::new(home.join(LIST_FILE_NAME)))
    }

    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored paths in file order. A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Adds paths not already stored and rewrites the file. Returns how many were new.
    pub fn append(&self, new_repos: &[PathBuf]) -> Result<usize> {
        let mut repos = self.load()?;
        let before = repos.len();
        merge_unique(&mut repos, new_repos);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        for repo in &repos {
            content.push_str(&repo.to_string_lossy());
            content.push('\n');
        }
        fs::write(&self.path, content)?;

        Ok(repos.len() - before)
    }
}

/// Appends each item of `new_items` missing from `existing`, keeping first-seen order.
pub fn merge_unique(existing: &mut Vec<PathBuf>, new_items: &[PathBuf]) {
    for item in new_items {
        if !existing.contains(item) {
            existing.push(item.clone());
        }
    }
}
