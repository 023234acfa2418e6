//! Workbook documents: a whole form submission as YAML or JSON.
//!
//! ```yaml
//! year: 2026
//! tables:
//!   - rows:
//!       - { jan: 5, feb: 3 }   # row 1, the most recent year
//!       - {}
//!   - rows:
//!       - { jan: 1 }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::TableError;
use crate::fields::{Field, Month};
use crate::model::TableSetModel;
use crate::snapshot::ValueSnapshot;

/// Month cells of one row as written in a document. Missing keys are empty.
pub type RowEntry = BTreeMap<Field, Option<f64>>;

/// Filled months of one snapshot row.
pub fn row_entry(snapshot: &ValueSnapshot, table: usize, row: usize) -> RowEntry {
    Month::ALL
        .iter()
        .filter_map(|&month| {
            snapshot
                .get(table, row, month)
                .map(|value| (Field::Month(month), Some(value)))
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    #[serde(default)]
    pub rows: Vec<RowEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub tables: Vec<TableEntry>,
}

/// Serialization format of a workbook file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

impl Workbook {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read workbook from {}", path.display()))?;

        Self::parse(&content, DocumentFormat::from_path(path))
            .with_context(|| format!("Failed to parse workbook {}", path.display()))
    }

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let workbook = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
            DocumentFormat::Json => serde_json::from_str(content)?,
        };
        Ok(workbook)
    }

    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        let rendered = match format {
            DocumentFormat::Yaml => serde_yaml::to_string(self)?,
            DocumentFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(rendered)
    }

    /// Empty workbook with one table per entry of `row_counts`, every month listed.
    pub fn blank(row_counts: &[usize]) -> Self {
        let empty_row: RowEntry = Month::ALL
            .iter()
            .map(|&month| (Field::Month(month), None))
            .collect();

        Self {
            year: None,
            tables: row_counts
                .iter()
                .map(|&count| TableEntry {
                    rows: vec![empty_row.clone(); count],
                })
                .collect(),
        }
    }

    /// Capture a model and its entered values. Only filled months are written.
    pub fn from_parts(model: &TableSetModel, snapshot: &ValueSnapshot, year: Option<i32>) -> Self {
        let tables = model
            .row_counts()
            .iter()
            .enumerate()
            .map(|(table, &count)| TableEntry {
                rows: (1..=count)
                    .map(|row| row_entry(snapshot, table, row))
                    .collect(),
            })
            .collect();

        Self { year, tables }
    }

    /// Build the model through `create_table`/`add_row` and collect the values.
    pub fn into_parts(&self) -> Result<(TableSetModel, ValueSnapshot)> {
        if self.tables.is_empty() {
            anyhow::bail!("Workbook has no tables");
        }

        let mut model = TableSetModel::new();
        let mut snapshot = ValueSnapshot::new();

        for (table, entry) in self.tables.iter().enumerate() {
            if entry.rows.is_empty() {
                anyhow::bail!("Table {} has no rows", table);
            }
            if table > 0 {
                model.create_table();
            }
            for (idx, row_entry) in entry.rows.iter().enumerate() {
                let row = idx + 1;
                if row > 1 {
                    model.add_row(table)?;
                }
                for (&field, &value) in row_entry {
                    let month = field
                        .as_month()
                        .ok_or(TableError::NotEditable(field))
                        .with_context(|| format!("Table {} row {}", table, row))?;
                    if let Some(number) = value.filter(|v| !v.is_finite()) {
                        return Err(TableError::NotANumber(number.to_string()))
                            .with_context(|| format!("Table {} row {} {}", table, row, month));
                    }
                    snapshot.set(table, row, month, value);
                }
            }
        }

        Ok((model, snapshot))
    }
}
