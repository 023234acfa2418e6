//! One form session: the table shape, the values entered so far, and the
//! result of the last submit.
//!
//! Every user action is a discrete transition. Adding tables or rows only
//! rebuilds the view; validation and aggregation run on submit alone.

use log::{debug, info};

use crate::domain::{aggregate, validate, Aggregates};
use crate::error::{TableError, Violation};
use crate::fields::Field;
use crate::model::{year_for_row, TableSetModel};
use crate::snapshot::{Cell, ValueSnapshot};

/// A triggering action from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddTable,
    AddRow(usize),
    Submit,
}

/// What the presentation layer should show after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The shape changed; redraw the tables.
    Rebuilt,
    /// Submission rejected. Nothing was computed.
    Invalid(Violation),
    /// Submission accepted with the computed cells.
    Valid(Aggregates),
}

#[derive(Debug, Clone)]
pub struct Session {
    model: TableSetModel,
    values: ValueSnapshot,
    current_year: i32,
    aggregates: Option<Aggregates>,
}

impl Session {
    pub fn new(current_year: i32) -> Self {
        Self::from_parts(TableSetModel::new(), ValueSnapshot::new(), current_year)
    }

    pub fn from_parts(model: TableSetModel, mut values: ValueSnapshot, current_year: i32) -> Self {
        values.retain_shape(&model);
        Self {
            model,
            values,
            current_year,
            aggregates: None,
        }
    }

    pub fn model(&self) -> &TableSetModel {
        &self.model
    }

    pub fn values(&self) -> &ValueSnapshot {
        &self.values
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Year displayed in row `row`.
    pub fn year_for(&self, row: usize) -> i32 {
        year_for_row(self.current_year, row)
    }

    /// Aggregates from the last valid submit, if the shape and values are unchanged since.
    pub fn aggregates(&self) -> Option<&Aggregates> {
        self.aggregates.as_ref()
    }

    pub fn apply(&mut self, action: Action) -> Result<Outcome, TableError> {
        match action {
            Action::AddTable => {
                self.model.create_table();
                self.aggregates = None;
                info!("Added table {}", self.model.table_count() - 1);
                Ok(Outcome::Rebuilt)
            }
            Action::AddRow(table) => {
                self.model.add_row(table)?;
                self.aggregates = None;
                info!(
                    "Added year {} to table {}",
                    self.year_for(self.model.row_count(table)?),
                    table
                );
                Ok(Outcome::Rebuilt)
            }
            Action::Submit => Ok(self.submit()),
        }
    }

    fn submit(&mut self) -> Outcome {
        match validate(&self.model, &self.values) {
            Ok(()) => {
                let aggregates = aggregate(&self.model, &self.values);
                info!(
                    "Submission valid, {} derived cells over {} rows",
                    aggregates.cells().count(),
                    aggregates.row_count()
                );
                self.aggregates = Some(aggregates.clone());
                Outcome::Valid(aggregates)
            }
            Err(violation) => {
                info!("Submission invalid: {}", violation);
                self.aggregates = None;
                Outcome::Invalid(violation)
            }
        }
    }

    /// Enter a value into a month cell. `None` empties it.
    pub fn enter(
        &mut self,
        table: usize,
        row: usize,
        field: Field,
        cell: Cell,
    ) -> Result<(), TableError> {
        let month = field.as_month().ok_or(TableError::NotEditable(field))?;
        self.model.ensure_row(table, row)?;
        debug!("Set table {} row {} {} to {:?}", table, row, month, cell);
        self.values.set(table, row, month, cell);
        self.aggregates = None;
        Ok(())
    }
}
