//! Quarterly and year-to-date aggregates for each row.
//!
//! A quarter is `round((a + b + c + 1) / 3, 2)` over its three months, empty
//! months counted as 0, and is only produced when at least one of them is
//! filled. YTD is `round((Q1 + Q2 + Q3 + Q4 + 1) / 4, 2)`, unset quarters
//! counted as 0, produced only when some quarter is non-zero. The `+ 1` offset
//! matches the figures users have always been shown.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::fields::{Field, Quarter};
use crate::model::TableSetModel;
use crate::snapshot::{RowValues, ValueSnapshot};

/// Round half away from zero to two decimals.
///
/// The scaled value is snapped to nine decimals first, so a decimal tie
/// such as `1.005` (stored as `1.00499999...`) still rounds up.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let snapped = (scaled * 1e9).round() / 1e9;
    if snapped.is_finite() {
        snapped.round() / 100.0
    } else {
        scaled.round() / 100.0
    }
}

/// Derived cells of one row. `None` means the cell stays unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RowAggregates {
    pub q1: Option<f64>,
    pub q2: Option<f64>,
    pub q3: Option<f64>,
    pub q4: Option<f64>,
    pub ytd: Option<f64>,
}

impl RowAggregates {
    pub fn compute(values: &RowValues) -> Self {
        let quarters = Quarter::ALL.map(|quarter| quarter_value(values, quarter));
        let [q1, q2, q3, q4] = quarters;

        let sum: f64 = quarters.iter().map(|q| q.unwrap_or(0.0)).sum();
        let ytd = quarters
            .iter()
            .any(|q| q.unwrap_or(0.0) != 0.0)
            .then(|| round2((sum + 1.0) / 4.0));

        Self {
            q1,
            q2,
            q3,
            q4,
            ytd,
        }
    }

    pub fn quarter(&self, quarter: Quarter) -> Option<f64> {
        match quarter {
            Quarter::Q1 => self.q1,
            Quarter::Q2 => self.q2,
            Quarter::Q3 => self.q3,
            Quarter::Q4 => self.q4,
        }
    }

    /// Value for a derived field; `None` for Year and month fields.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Quarter(quarter) => self.quarter(quarter),
            Field::Ytd => self.ytd,
            Field::Year | Field::Month(_) => None,
        }
    }
}

fn quarter_value(values: &RowValues, quarter: Quarter) -> Option<f64> {
    let cells = quarter.months().map(|month| values[month.index()]);
    if cells.iter().all(Option::is_none) {
        return None;
    }
    let sum: f64 = cells.iter().map(|c| c.unwrap_or(0.0)).sum();
    Some(round2((sum + 1.0) / 3.0))
}

/// Computed cells for every row, keyed by `(table, row)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    rows: BTreeMap<(usize, usize), RowAggregates>,
}

impl Aggregates {
    pub fn row(&self, table: usize, row: usize) -> Option<&RowAggregates> {
        self.rows.get(&(table, row))
    }

    pub fn get(&self, table: usize, row: usize, field: Field) -> Option<f64> {
        self.row(table, row).and_then(|aggregates| aggregates.get(field))
    }

    /// Number of rows covered, empty rows included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Every set derived cell as `(table, row, field, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Field, f64)> + '_ {
        self.rows.iter().flat_map(|(&(table, row), aggregates)| {
            Quarter::ALL
                .into_iter()
                .map(Field::Quarter)
                .chain(std::iter::once(Field::Ytd))
                .filter_map(move |field| {
                    aggregates
                        .get(field)
                        .map(|value| (table, row, field, value))
                })
        })
    }
}

/// Compute the derived cells of every existing row. Month cells are untouched.
pub fn aggregate(model: &TableSetModel, snapshot: &ValueSnapshot) -> Aggregates {
    let rows: BTreeMap<_, _> = model
        .rows()
        .map(|(table, row)| {
            let aggregates = RowAggregates::compute(&snapshot.row(table, row));
            ((table, row), aggregates)
        })
        .collect();
    debug!("Aggregated {} rows", rows.len());
    Aggregates { rows }
}
