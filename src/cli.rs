use crate::model::{DEFAULT_EXCLUDES, DEFAULT_WINDOW_DAYS};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitlocalstats")]
#[command(about = "Contribution calendar built from your local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to the repository list (default: ~/.gitlocalstats)")]
    pub list: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_WINDOW_DAYS,
        value_parser = parse_days,
        help = "Number of trailing days to chart"
    )]
    pub days: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new folder to scan for git repositories
    #[command(visible_alias = "add")]
    Scan {
        #[arg(help = "Folder to search for repositories")]
        folder: PathBuf,

        #[arg(
            long,
            help = "Directory names to skip",
            default_values = DEFAULT_EXCLUDES
        )]
        exclude: Vec<String>,
    },
    /// Show the contribution calendar for an author email
    #[command(visible_alias = "email")]
    Stats {
        #[arg(help = "Author email to match exactly")]
        email: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Disable colored cells")]
        no_color: bool,
    },
}

fn parse_days(input: &str) -> std::result::Result<usize, String> {
    let days: usize = input
        .parse()
        .map_err(|_| format!("'{input}' is not a number of days"))?;
    if (7..=3660).contains(&days) {
        Ok(days)
    } else {
        Err(format!("days must be between 7 and 3660, got {days}"))
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default log filter for the given `-v` count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Scan { folder, exclude } => crate::scan::exec(self.common, folder, exclude),
            Commands::Stats { email, json, no_color } => {
                crate::stats::exec(self.common, email, json, no_color)
            }
        }
    }
}
