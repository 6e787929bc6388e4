pub mod aggregate;
pub mod exec;
pub mod grid;
pub mod output;
pub mod window;

pub use aggregate::{aggregate, Aggregation, Aggregator, Histogram};
pub use exec::exec;
pub use grid::{today_cell, Grid, DAYS_IN_WEEK};
pub use output::{cell_text, output_calendar, output_json, render, render_months, stats_output, CellStyle};
pub use window::{alignment_offset, days_since, Window};
