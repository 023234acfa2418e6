//! Entered month values at submit time.
//!
//! A cell is `Option<f64>`: `None` is an empty cell. Zero is a real value and
//! never compares equal to empty.

use std::collections::BTreeMap;

use crate::error::TableError;
use crate::fields::Month;
use crate::model::TableSetModel;

pub type Cell = Option<f64>;

/// Month cells of one row, Jan..Dec.
pub type RowValues = [Cell; 12];

/// Parse raw cell input. Blank input is an empty cell.
pub fn parse_cell(raw: &str) -> Result<Cell, TableError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(TableError::NotANumber(trimmed.to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSnapshot {
    rows: BTreeMap<(usize, usize), RowValues>,
}

impl ValueSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a cell; anything never entered is empty.
    pub fn get(&self, table: usize, row: usize, month: Month) -> Cell {
        self.rows
            .get(&(table, row))
            .and_then(|values| values[month.index()])
    }

    pub fn set(&mut self, table: usize, row: usize, month: Month, cell: Cell) {
        let values = self.rows.entry((table, row)).or_insert([None; 12]);
        values[month.index()] = cell;
    }

    pub fn clear(&mut self, table: usize, row: usize, month: Month) {
        self.set(table, row, month, None);
    }

    /// All twelve month cells of a row in calendar order.
    pub fn row(&self, table: usize, row: usize) -> RowValues {
        self.rows.get(&(table, row)).copied().unwrap_or([None; 12])
    }

    /// Number of filled cells across the snapshot.
    pub fn filled_count(&self) -> usize {
        self.rows
            .values()
            .map(|values| values.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    /// Drop entries for rows that are not part of `model`.
    pub fn retain_shape(&mut self, model: &TableSetModel) {
        self.rows
            .retain(|&(table, row), _| model.ensure_row(table, row).is_ok());
    }
}
