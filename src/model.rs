//! Shape of the form: how many tables exist and how many rows (years) each holds.
//!
//! Tables and rows only grow. A fresh model has one table with one row.
//! Rows are numbered from 1; row 1 is the most recent year.

use log::debug;
use serde::Serialize;

use crate::error::TableError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSetModel {
    row_counts: Vec<usize>,
}

impl Default for TableSetModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSetModel {
    pub fn new() -> Self {
        Self {
            row_counts: vec![1],
        }
    }

    /// Append a table with a single row.
    pub fn create_table(&mut self) {
        self.row_counts.push(1);
        debug!("Created table {}", self.row_counts.len() - 1);
    }

    /// Add one row (an earlier year) to `table`.
    pub fn add_row(&mut self, table: usize) -> Result<(), TableError> {
        let table_count = self.table_count();
        let count = self
            .row_counts
            .get_mut(table)
            .ok_or(TableError::OutOfRange { table, table_count })?;
        *count += 1;
        debug!("Table {} now has {} rows", table, count);
        Ok(())
    }

    pub fn table_count(&self) -> usize {
        self.row_counts.len()
    }

    pub fn row_counts(&self) -> &[usize] {
        &self.row_counts
    }

    pub fn row_count(&self, table: usize) -> Result<usize, TableError> {
        self.row_counts
            .get(table)
            .copied()
            .ok_or(TableError::OutOfRange {
                table,
                table_count: self.table_count(),
            })
    }

    /// Check that `(table, row)` exists.
    pub fn ensure_row(&self, table: usize, row: usize) -> Result<(), TableError> {
        let row_count = self.row_count(table)?;
        if row == 0 || row > row_count {
            return Err(TableError::RowOutOfRange {
                table,
                row,
                row_count,
            });
        }
        Ok(())
    }

    /// Index of the table with the fewest rows; the lowest index wins ties.
    pub fn reference_table(&self) -> usize {
        let mut min_idx = 0;
        for (idx, &count) in self.row_counts.iter().enumerate() {
            if count < self.row_counts[min_idx] {
                min_idx = idx;
            }
        }
        min_idx
    }

    /// All existing `(table, row)` pairs, tables in order, rows from 1 upward.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_counts
            .iter()
            .enumerate()
            .flat_map(|(table, &count)| (1..=count).map(move |row| (table, row)))
    }
}

/// Calendar year shown in the Year column of `row`.
pub fn year_for_row(current_year: i32, row: usize) -> i32 {
    current_year - row as i32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_has_one_table_one_row() {
        let model = TableSetModel::new();
        assert_eq!(model.table_count(), 1);
        assert_eq!(model.row_counts(), &[1]);
    }

    #[test]
    fn test_create_table_appends_single_row_table() {
        let mut model = TableSetModel::new();
        model.add_row(0).unwrap();
        model.create_table();
        assert_eq!(model.table_count(), 2);
        assert_eq!(model.row_counts(), &[2, 1]);
    }

    #[test]
    fn test_add_row_keeps_table_count() {
        let mut model = TableSetModel::new();
        model.create_table();
        model.add_row(1).unwrap();
        model.add_row(1).unwrap();
        assert_eq!(model.table_count(), 2);
        assert_eq!(model.row_counts(), &[1, 3]);
    }

    #[test]
    fn test_add_row_out_of_range() {
        let mut model = TableSetModel::new();
        let err = model.add_row(1).unwrap_err();
        assert_eq!(
            err,
            TableError::OutOfRange {
                table: 1,
                table_count: 1
            }
        );
        assert_eq!(model.row_counts(), &[1]);
    }

    #[test]
    fn test_row_counts_len_matches_table_count() {
        let mut model = TableSetModel::new();
        for step in 0..20 {
            if step % 3 == 0 {
                model.create_table();
            } else {
                let table = step % model.table_count();
                model.add_row(table).unwrap();
            }
            assert_eq!(model.row_counts().len(), model.table_count());
        }
    }

    #[test]
    fn test_reference_table_lowest_index_on_tie() {
        let mut model = TableSetModel::new();
        model.add_row(0).unwrap();
        model.create_table();
        model.create_table();
        // [2, 1, 1]
        assert_eq!(model.reference_table(), 1);

        let single = TableSetModel::new();
        assert_eq!(single.reference_table(), 0);
    }

    #[test]
    fn test_ensure_row() {
        let mut model = TableSetModel::new();
        model.add_row(0).unwrap();
        assert!(model.ensure_row(0, 1).is_ok());
        assert!(model.ensure_row(0, 2).is_ok());
        assert!(matches!(
            model.ensure_row(0, 3),
            Err(TableError::RowOutOfRange { row_count: 2, .. })
        ));
        assert!(model.ensure_row(0, 0).is_err());
        assert!(matches!(
            model.ensure_row(5, 1),
            Err(TableError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rows_iteration_order() {
        let mut model = TableSetModel::new();
        model.add_row(0).unwrap();
        model.create_table();
        let rows: Vec<_> = model.rows().collect();
        assert_eq!(rows, vec![(0, 1), (0, 2), (1, 1)]);
    }

    #[test]
    fn test_year_for_row() {
        assert_eq!(year_for_row(2026, 1), 2026);
        assert_eq!(year_for_row(2026, 3), 2024);
    }
}
