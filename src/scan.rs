use crate::cli::CommonArgs;
use crate::error::{Result, StatsError};
use crate::store::RepoList;
use anyhow::Context;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const GIT_FOLDERNAME: &str = ".git";

pub fn exec(common: CommonArgs, folder: PathBuf, excludes: Vec<String>) -> anyhow::Result<()> {
    println!("{}\n", style("Found folders:").green().bright());
    let repos = scan_repositories(&folder, &excludes)?;
    for repo in &repos {
        println!("{}", style(repo.display()).green().bright());
    }

    let list = RepoList::resolve(common.list.as_deref())
        .context("Failed to locate repository list")?;
    let added = list
        .append(&repos)
        .with_context(|| format!("Failed to update repository list at {}", list.path().display()))?;

    println!(
        "\n{} ({} new, {} found)\n",
        style("Successfully added!").green().bright(),
        added,
        repos.len()
    );
    Ok(())
}

/// Absolute paths of the repository roots under `root`.
///
/// A directory holding a `.git` directory is reported and not descended
/// into. Directories named in `excludes` and symlinks are skipped.
pub fn scan_repositories(root: &Path, excludes: &[String]) -> Result<Vec<PathBuf>> {
    fs::read_dir(root).map_err(|source| StatsError::ReadFolder {
        path: root.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    let mut it = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded(entry, excludes));

    while let Some(entry) = it.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.path().join(GIT_FOLDERNAME).is_dir() {
            let repo = fs::canonicalize(entry.path())?;
            debug!(repo = %repo.display(), "found repository");
            found.push(repo);
            it.skip_current_dir();
        }
    }

    Ok(found)
}

fn is_excluded(entry: &DirEntry, excludes: &[String]) -> bool {
    let excluded = entry.file_type().is_dir()
        && excludes.iter().any(|ex| entry.file_name() == ex.as_str());
    if excluded {
        debug!(dir = %entry.path().display(), "excluded");
    }
    excluded
}
