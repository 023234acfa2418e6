//! Text grids and JSON reports for a session.
//!
//! Each table prints with the full header. Rows run from the earliest year at
//! the top down to row 1, the current year.

use serde::Serialize;

use crate::domain::RowAggregates;
use crate::error::Violation;
use crate::fields::Field;
use crate::session::{Outcome, Session};
use crate::ui::{colors, format};
use crate::workbook::{row_entry, RowEntry};

const MIN_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CellKind {
    Year,
    Value,
    Derived,
    Empty,
}

fn cell_text(
    session: &Session,
    table: usize,
    row: usize,
    field: Field,
    marker: &str,
) -> (String, CellKind) {
    let value = match field {
        Field::Year => return (session.year_for(row).to_string(), CellKind::Year),
        Field::Month(month) => session.values().get(table, row, month),
        Field::Quarter(_) | Field::Ytd => session
            .aggregates()
            .and_then(|aggregates| aggregates.get(table, row, field)),
    };
    match value {
        Some(value) if field.is_derived() => (format::number(value), CellKind::Derived),
        Some(value) => (format::number(value), CellKind::Value),
        None => (marker.to_string(), CellKind::Empty),
    }
}

/// Render one table as an aligned grid.
pub fn render_table(session: &Session, table: usize, marker: &str) -> String {
    let header = Field::header();
    let row_count = session.model().row_counts().get(table).copied().unwrap_or(0);

    let rows: Vec<Vec<(String, CellKind)>> = (1..=row_count)
        .rev()
        .map(|row| {
            header
                .iter()
                .map(|&field| cell_text(session, table, row, field, marker))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, field)| {
            rows.iter()
                .map(|cells| cells[col].0.chars().count())
                .chain(std::iter::once(field.to_string().len()))
                .max()
                .unwrap_or(0)
                .max(MIN_WIDTH)
        })
        .collect();

    let mut output = vec![colors::identifier(&format!("Table {}", table)).to_string()];

    let header_line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(field, &width)| {
            colors::heading(&format::pad(&field.to_string(), width)).to_string()
        })
        .collect();
    output.push(header_line.join(" "));
    let total_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
    output.push(format::separator(total_width));

    for cells in &rows {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|((text, kind), &width)| {
                let padded = format::pad(text, width);
                match kind {
                    CellKind::Year => colors::identifier(&padded).to_string(),
                    CellKind::Value => padded,
                    CellKind::Derived => colors::derived(&padded).to_string(),
                    CellKind::Empty => colors::secondary(&padded).to_string(),
                }
            })
            .collect();
        output.push(line.join(" "));
    }

    output.join("\n")
}

/// Render every table of the session, separated by blank lines.
pub fn render_session(session: &Session, marker: &str) -> String {
    (0..session.model().table_count())
        .map(|table| render_table(session, table, marker))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowReport {
    pub row: usize,
    pub year: i32,
    pub values: RowEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregates: Option<RowAggregates>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: usize,
    pub rows: Vec<RowReport>,
}

/// Machine-readable result of a submit.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub status: ReportStatus,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
    pub tables: Vec<TableReport>,
}

impl Report {
    pub fn new(session: &Session, outcome: &Outcome) -> Self {
        let (status, violation) = match outcome {
            Outcome::Rebuilt => (ReportStatus::Pending, None),
            Outcome::Valid(_) => (ReportStatus::Valid, None),
            Outcome::Invalid(violation) => (ReportStatus::Invalid, Some(*violation)),
        };

        let tables = session
            .model()
            .row_counts()
            .iter()
            .enumerate()
            .map(|(table, &count)| TableReport {
                table,
                rows: (1..=count)
                    .map(|row| RowReport {
                        row,
                        year: session.year_for(row),
                        values: row_entry(session.values(), table, row),
                        aggregates: session
                            .aggregates()
                            .and_then(|aggregates| aggregates.row(table, row))
                            .copied(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            status,
            year: session.current_year(),
            violation,
            tables,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
