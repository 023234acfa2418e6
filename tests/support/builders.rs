use yeartab::fields::Month;
use yeartab::model::TableSetModel;
use yeartab::snapshot::ValueSnapshot;
use yeartab::workbook::{DocumentFormat, Workbook};

/// Builds a table shape and its entered values through the public API.
pub struct TablesBuilder {
    model: TableSetModel,
    values: ValueSnapshot,
}

impl TablesBuilder {
    /// One table per entry, each with the given number of rows.
    pub fn with_rows(rows: &[usize]) -> Self {
        let mut model = TableSetModel::new();
        for (table, &count) in rows.iter().enumerate() {
            if table > 0 {
                model.create_table();
            }
            for _ in 1..count {
                model.add_row(table).expect("table exists");
            }
        }
        Self {
            model,
            values: ValueSnapshot::new(),
        }
    }

    pub fn value(mut self, table: usize, row: usize, month: Month, value: f64) -> Self {
        self.values.set(table, row, month, Some(value));
        self
    }

    /// Fill `months` of one row with `value`.
    pub fn fill(mut self, table: usize, row: usize, months: &[Month], value: f64) -> Self {
        for &month in months {
            self.values.set(table, row, month, Some(value));
        }
        self
    }

    pub fn build(self) -> (TableSetModel, ValueSnapshot) {
        (self.model, self.values)
    }

    pub fn workbook(self, year: Option<i32>) -> Workbook {
        Workbook::from_parts(&self.model, &self.values, year)
    }

    pub fn yaml(self, year: Option<i32>) -> String {
        self.workbook(year)
            .render(DocumentFormat::Yaml)
            .expect("workbook renders")
    }
}
