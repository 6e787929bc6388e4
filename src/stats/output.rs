use super::aggregate::Aggregation;
use super::grid::{today_cell, Grid, DAYS_IN_WEEK};
use super::window::Window;
use crate::model::{DayCount, StatsOutput, SCHEMA_VERSION};
use crate::util::short_month;
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use console::Style;

const GUTTER: &str = "     ";
const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Today,
    Empty,
    Low,
    Medium,
    High,
}

impl CellStyle {
    pub fn classify(count: u32, is_today: bool) -> Self {
        if is_today {
            CellStyle::Today
        } else if count == 0 {
            CellStyle::Empty
        } else if count < 5 {
            CellStyle::Low
        } else if count < 10 {
            CellStyle::Medium
        } else {
            CellStyle::High
        }
    }

    pub fn style(self) -> Style {
        match self {
            CellStyle::Today => Style::new().on_magenta().white().bold(),
            CellStyle::Empty => Style::new().on_black().green(),
            CellStyle::Low => Style::new().on_color256(8).black(),
            CellStyle::Medium => Style::new().on_yellow().black(),
            CellStyle::High => Style::new().on_green().black(),
        }
    }
}

/// Fixed-width text of one cell.
pub fn cell_text(count: u32) -> String {
    match count {
        0 => "  - ".to_string(),
        1..=9 => format!("  {count} "),
        10..=99 => format!(" {count} "),
        _ => format!("{count} "),
    }
}

fn day_label(position: usize) -> &'static str {
    match position {
        6 => " Mon ",
        4 => " Wed ",
        2 => " Fri ",
        _ => GUTTER,
    }
}

/// Monday of the calendar week shown in column `week`.
fn column_monday(window: &Window, week: usize) -> NaiveDate {
    let days_ago = (week * DAYS_IN_WEEK + DAYS_IN_WEEK - 1) as i64 - window.offset() as i64;
    window.today() - Duration::days(days_ago)
}

/// Header row with a month name above the first column of each new month.
pub fn render_months(window: &Window) -> String {
    let mut line = String::from(GUTTER);
    let mut month = window.start().month();

    for week in (0..window.columns()).rev() {
        // The oldest column can begin a few days before the window does
        let monday = column_monday(window, week).max(window.start());
        if monday <= window.today() && monday.month() != month {
            line.push_str(&format!("{:<width$}", short_month(monday), width = CELL_WIDTH));
            month = monday.month();
        } else {
            line.push_str(&" ".repeat(CELL_WIDTH));
        }
    }

    line.trim_end().to_string()
}

/// Month header followed by seven rows, Monday on top, oldest week on the left.
pub fn render(grid: &Grid, window: &Window, color: bool) -> String {
    let label_style = Style::new().dim().force_styling(color);
    let today = today_cell(window);

    let mut out = render_months(window);
    out.push('\n');

    for position in (0..DAYS_IN_WEEK).rev() {
        out.push_str(&label_style.apply_to(day_label(position)).to_string());
        for week in (0..window.columns()).rev() {
            let count = grid.count(week, position);
            let style = CellStyle::classify(count, (week, position) == today)
                .style()
                .force_styling(color);
            out.push_str(&style.apply_to(cell_text(count)).to_string());
        }
        out.push('\n');
    }

    out
}

pub fn stats_output(aggregation: &Aggregation, window: &Window, author: &str) -> StatsOutput {
    let days = (0..=window.days())
        .rev()
        .map(|days_ago| DayCount {
            date: window.today() - Duration::days(days_ago as i64),
            days_ago,
            count: aggregation.histogram.get(days_ago + window.offset()),
        })
        .collect();

    StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        author: author.to_string(),
        window_days: window.days(),
        today: window.today(),
        total_commits: aggregation.histogram.total(),
        days,
        failures: aggregation.failures.clone(),
    }
}

pub fn output_json(aggregation: &Aggregation, window: &Window, author: &str) -> Result<()> {
    let output = stats_output(aggregation, window, author);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_calendar(aggregation: &Aggregation, window: &Window, color: bool) -> Result<()> {
    let grid = Grid::build(&aggregation.histogram);
    print!("{}", render(&grid, window, color));
    Ok(())
}
