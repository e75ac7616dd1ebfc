//! Assembles the full dashboard for one (year, month) selection.
//!
//! Each table, selection and chart is produced independently: a failure in one
//! becomes a message in its own slot and never aborts the rest of the view.

use common::{
    DashboardView, MonthlySeries, ObservationTableDto, SeriesOutcome, TableSection, TrendSection,
};
use model::TableKind;
use tracing::{instrument, warn};

use crate::context::DataContext;
use crate::query::{monthly_mean_series, select_exact};
use crate::table::ObservationTable;

/// Builds every section of the dashboard page.
#[instrument(skip(context))]
pub fn build_dashboard(context: &DataContext, year: i32, month: u32) -> DashboardView {
    DashboardView {
        title: context.title(),
        year,
        month,
        selections: TableKind::ALL
            .iter()
            .map(|&kind| selection_section(context, kind, year, month))
            .collect(),
        trends: TableKind::ALL
            .iter()
            .map(|&kind| trend_section(context, kind))
            .collect(),
        overall: TableKind::ALL
            .iter()
            .map(|&kind| overall_section(context, kind))
            .collect(),
    }
}

/// Exact-match rows of one table, or the placeholder message when none match.
pub fn selection_section(
    context: &DataContext,
    kind: TableKind,
    year: i32,
    month: u32,
) -> TableSection {
    let table = context.table(kind);
    match select_exact(table, year, month).and_then(|selected| selected.to_dto(kind)) {
        Ok(dto) if dto.is_empty() => TableSection::new(dto, Some(no_selection_message(kind))),
        Ok(dto) => TableSection::new(dto, None),
        Err(err) => {
            warn!(%kind, year, month, %err, "Selection failed");
            TableSection::new(
                empty_dto(kind, table),
                Some(format!("Error selecting {} data: {}", kind, err)),
            )
        }
    }
}

/// One chart per field of the table, each rendered on its own.
pub fn trend_section(context: &DataContext, kind: TableKind) -> TrendSection {
    let table = context.table(kind);
    if table.is_empty() {
        return TrendSection {
            kind: kind.slug().to_string(),
            title: kind.trends_title().to_string(),
            charts: Vec::new(),
            message: Some(format!("No {} data to plot.", kind)),
        };
    }

    let charts = table
        .fields()
        .iter()
        .map(|spec| series_outcome(table, kind, spec.name))
        .collect();

    TrendSection {
        kind: kind.slug().to_string(),
        title: kind.trends_title().to_string(),
        charts,
        message: None,
    }
}

/// Renders a single chart, turning an engine error into its inline message.
pub fn series_outcome(table: &ObservationTable, kind: TableKind, field: &str) -> SeriesOutcome {
    match monthly_mean_series(table, field) {
        Ok(points) => SeriesOutcome::Chart {
            series: MonthlySeries::new(kind.slug().to_string(), field.to_string(), points),
        },
        Err(err) => {
            warn!(%kind, field, %err, "Chart failed");
            SeriesOutcome::Error {
                field: field.to_string(),
                message: format!("Error plotting {} data: {}", kind, err),
            }
        }
    }
}

/// The unfiltered table, titled with the span it covers.
pub fn overall_section(context: &DataContext, kind: TableKind) -> TableSection {
    let table = context.table(kind);
    let title = overall_title(context, kind);
    match table.to_dto(kind) {
        Ok(mut dto) => {
            dto.title = title;
            TableSection::new(dto, None)
        }
        Err(err) => {
            warn!(%kind, %err, "Overall table failed");
            let mut dto = empty_dto(kind, table);
            dto.title = title;
            TableSection::new(dto, Some(format!("Error loading {} data: {}", kind, err)))
        }
    }
}

/// e.g. "Weather Data (Last 10 Years)"
pub fn overall_title(context: &DataContext, kind: TableKind) -> String {
    format!("{} (Last {} Years)", kind.title(), context.years().len())
}

pub fn no_selection_message(kind: TableKind) -> String {
    format!("No {} data available for the selected year and month.", kind)
}

fn empty_dto(kind: TableKind, table: &ObservationTable) -> ObservationTableDto {
    ObservationTableDto::empty(
        kind.slug().to_string(),
        kind.title().to_string(),
        table.field_names(),
    )
}
