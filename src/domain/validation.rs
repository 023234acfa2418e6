//! Cross-table consistency check for filled and empty month cells.
//!
//! The table with the fewest rows is the reference. Every other table must be
//! filled exactly where the reference is filled, for the rows the reference
//! has. Rows past the reference's last row are extra history and are skipped.
//!
//! Within one table the participating cells are scanned most recent first:
//! rows from 1 downward, and inside a row from Dec back to Jan. Filled cells
//! must form one unbroken block in that scan. The first empty cell after the
//! block is tolerated; a filled cell after it is an error.

use log::debug;

use crate::error::{Violation, ViolationKind};
use crate::fields::Month;
use crate::model::TableSetModel;
use crate::snapshot::{Cell, ValueSnapshot};

/// Fill state of one table's scan. Reset per table, never per row.
#[derive(Debug, Default)]
struct FillScan {
    seen_value: bool,
    seen_empty: bool,
}

impl FillScan {
    fn check(&mut self, cell: Cell, reference_cell: Cell) -> Result<(), ViolationKind> {
        if !self.seen_value && !self.seen_empty && cell.is_some() {
            self.seen_value = true;
        }
        if self.seen_value && !self.seen_empty && cell.is_none() {
            self.seen_empty = true;
        }

        if cell.is_some() != reference_cell.is_some() {
            return Err(ViolationKind::Mismatch);
        }
        if self.seen_value && self.seen_empty && cell.is_some() {
            return Err(ViolationKind::GapReopened);
        }
        Ok(())
    }
}

/// Validate a submission. Stops at the first offending cell.
pub fn validate(model: &TableSetModel, snapshot: &ValueSnapshot) -> Result<(), Violation> {
    let reference = model.reference_table();
    let reference_rows = model.row_counts()[reference];

    for (table, &row_count) in model.row_counts().iter().enumerate() {
        let mut scan = FillScan::default();
        for row in 1..=row_count.min(reference_rows) {
            for &month in Month::ALL.iter().rev() {
                let cell = snapshot.get(table, row, month);
                let reference_cell = snapshot.get(reference, row, month);
                if let Err(kind) = scan.check(cell, reference_cell) {
                    let violation = Violation {
                        kind,
                        table,
                        row,
                        month,
                        reference,
                    };
                    debug!("Validation failed: {}", violation);
                    return Err(violation);
                }
            }
        }
    }

    debug!(
        "Validated {} tables against reference table {}",
        model.table_count(),
        reference
    );
    Ok(())
}
