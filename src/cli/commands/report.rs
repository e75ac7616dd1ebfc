//! Plain-text rendering of the dashboard for the terminal.

use anyhow::Result;
use common::{DashboardView, ObservationTableDto, SeriesOutcome, TableSection, TrendSection};
use compute::{DataContext, build_dashboard};
use std::fmt::Write;
use tracing::{debug, info};

use crate::config::load_settings;

pub fn report(year: i32, month: u32, seed: Option<u64>) -> Result<()> {
    let settings = load_settings()?.with_overrides(None, seed);
    let context = DataContext::generate(&settings.generator_settings())?;
    info!(year, month, "Rendering report");

    let view = build_dashboard(&context, year, month);
    print!("{}", render_dashboard(&view)?);
    Ok(())
}

/// Renders the full view: title, selections, trends, then the overall tables.
pub fn render_dashboard(view: &DashboardView) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", "=".repeat(view.title.len()))?;
    writeln!(out)?;
    writeln!(out, "Selected year: {}  month: {}", view.year, view.month)?;

    for section in &view.selections {
        writeln!(out)?;
        render_section(&mut out, section)?;
    }
    for trend in &view.trends {
        writeln!(out)?;
        render_trend(&mut out, trend)?;
    }
    for section in &view.overall {
        writeln!(out)?;
        render_section(&mut out, section)?;
    }

    debug!("Rendered {} bytes", out.len());
    Ok(out)
}

fn render_section(out: &mut String, section: &TableSection) -> Result<()> {
    writeln!(out, "## {}", section.table.title)?;
    match &section.message {
        Some(message) => writeln!(out, "{}", message)?,
        None => render_table(out, &section.table)?,
    }
    Ok(())
}

fn render_table(out: &mut String, table: &ObservationTableDto) -> Result<()> {
    write!(out, "{:>6} {:>5}", "Year", "Month")?;
    for field in &table.fields {
        write!(out, " {:>16}", field)?;
    }
    writeln!(out)?;

    for row in &table.rows {
        write!(out, "{:>6} {:>5}", row.year, row.month)?;
        for field in &table.fields {
            match row.value(field) {
                Some(value) => write!(out, " {:>16.2}", value)?,
                None => write!(out, " {:>16}", "-")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_trend(out: &mut String, trend: &TrendSection) -> Result<()> {
    writeln!(out, "## {}", trend.title)?;
    if let Some(message) = &trend.message {
        writeln!(out, "{}", message)?;
    }

    for outcome in &trend.charts {
        match outcome {
            SeriesOutcome::Chart { series } => {
                writeln!(out, "### {}", series.field)?;
                for point in &series.points {
                    writeln!(out, "{}  {:.2}", point.date, point.value)?;
                }
            }
            SeriesOutcome::Error { field, message } => {
                writeln!(out, "### {}", field)?;
                writeln!(out, "{}", message)?;
            }
        }
    }
    Ok(())
}
