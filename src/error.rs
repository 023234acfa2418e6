//! Error types for the table-set model, value entry, and validation.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::fields::{Field, Month};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Table {table} does not exist (table count: {table_count})")]
    OutOfRange { table: usize, table_count: usize },
    #[error("Row {row} does not exist in table {table} (row count: {row_count})")]
    RowOutOfRange {
        table: usize,
        row: usize,
        row_count: usize,
    },
    #[error("{0} is computed and cannot be edited")]
    NotEditable(Field),
    #[error("Unknown field '{0}'")]
    UnknownField(String),
    #[error("Not a number: '{0}'")]
    NotANumber(String),
    #[error("Invalid")]
    Invalid(Violation),
}

/// Why a submission failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The cell is filled in one table and empty in the reference table, or the reverse.
    Mismatch,
    /// A filled cell appears after the table's filled block was already closed by a gap.
    GapReopened,
}

/// The first cell that made a submission invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub table: usize,
    pub row: usize,
    pub month: Month,
    /// Table the cell was compared against.
    pub reference: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Mismatch => write!(
                f,
                "table {} row {} {} does not match table {}",
                self.table, self.row, self.month, self.reference
            ),
            ViolationKind::GapReopened => write!(
                f,
                "table {} row {} {} is filled after a gap",
                self.table, self.row, self.month
            ),
        }
    }
}

impl From<Violation> for TableError {
    fn from(violation: Violation) -> Self {
        TableError::Invalid(violation)
    }
}
