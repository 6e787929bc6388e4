use super::{aggregate, output_calendar, output_json, Window};
use crate::cli::CommonArgs;
use crate::git::GixSource;
use crate::store::RepoList;
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

pub fn exec(common: CommonArgs, email: String, json: bool, no_color: bool) -> anyhow::Result<()> {
    let list = RepoList::resolve(common.list.as_deref())
        .context("Failed to locate repository list")?;
    let repos = list
        .load()
        .with_context(|| format!("Failed to read repository list at {}", list.path().display()))?;

    let window = Window::capture(common.days);
    info!(repos = repos.len(), today = %window.today(), days = window.days(), "aggregating");

    // Keep stdout clean for JSON consumers
    let pb = if json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(repos.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let aggregation = aggregate(&GixSource, &repos, &email, &window, &pb);
    pb.finish_and_clear();

    if json {
        output_json(&aggregation, &window, &email)?;
    } else {
        let color = !no_color && console::colors_enabled();
        output_calendar(&aggregation, &window, color)?;
    }

    for failure in &aggregation.failures {
        eprintln!(
            "{}",
            style(format!("Error processing repo at {}: {}", failure.path, failure.reason)).red()
        );
    }

    Ok(())
}
