//! `yeartab check`: validate a workbook and print its aggregates.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use yeartab::config::{Config, OutputFormat};
use yeartab::render::{render_session, Report};
use yeartab::session::{Action, Outcome, Session};
use yeartab::ui::{self, colors};
use yeartab::workbook::Workbook;

use super::resolve_year;

pub fn cmd_check(file: &Path, format: Option<OutputFormat>, year: Option<i32>) -> Result<()> {
    let config = Config::load()?;
    let workbook = Workbook::load(file)?;
    let (model, values) = workbook
        .into_parts()
        .with_context(|| format!("Invalid workbook {}", file.display()))?;
    let year = resolve_year(&config, year, workbook.year)?;

    info!(
        "Checking {} ({} tables, rows {:?})",
        file.display(),
        model.table_count(),
        model.row_counts()
    );

    let mut session = Session::from_parts(model, values, year);
    let outcome = session.apply(Action::Submit)?;
    let format = format.unwrap_or(config.output.format);

    let output = check_output(
        &session,
        &outcome,
        format,
        &config.output.empty_marker,
        ui::is_quiet(),
    )?;
    println!("{}", output);

    if matches!(outcome, Outcome::Invalid(_)) {
        std::process::exit(1);
    }
    Ok(())
}

fn check_output(
    session: &Session,
    outcome: &Outcome,
    format: OutputFormat,
    marker: &str,
    quiet: bool,
) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(Report::new(session, outcome).to_json()?);
    }

    let mut lines = Vec::new();
    match outcome {
        Outcome::Valid(_) => {
            if !quiet {
                lines.push(render_session(session, marker));
                lines.push(String::new());
            }
            lines.push(ui::submit_status(true).to_string());
        }
        Outcome::Invalid(violation) => {
            lines.push(ui::submit_status(false).to_string());
            if !quiet {
                lines.push(format!("  {}", colors::secondary(&violation.to_string())));
            }
        }
        Outcome::Rebuilt => {}
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yeartab::fields::{Field, Month};
    use yeartab::model::TableSetModel;
    use yeartab::snapshot::ValueSnapshot;

    fn session(values: &[(usize, usize, Month, f64)], rows: &[usize]) -> Session {
        let mut model = TableSetModel::new();
        for (table, &count) in rows.iter().enumerate() {
            if table > 0 {
                model.create_table();
            }
            for _ in 1..count {
                model.add_row(table).unwrap();
            }
        }
        let mut session = Session::from_parts(model, ValueSnapshot::new(), 2026);
        for &(table, row, month, value) in values {
            session
                .enter(table, row, Field::Month(month), Some(value))
                .unwrap();
        }
        session
    }

    #[test]
    fn test_text_output_valid() {
        colored::control::set_override(false);
        let mut session = session(&[(0, 1, Month::Jan, 2.0)], &[1]);
        let outcome = session.apply(Action::Submit).unwrap();
        let text = check_output(&session, &outcome, OutputFormat::Text, "-", false).unwrap();
        assert!(text.contains("Table 0"));
        assert!(text.ends_with("● Valid"));
    }

    #[test]
    fn test_text_output_invalid_quiet() {
        colored::control::set_override(false);
        let mut session = session(&[(0, 1, Month::Jan, 2.0)], &[1, 1]);
        let outcome = session.apply(Action::Submit).unwrap();
        let text = check_output(&session, &outcome, OutputFormat::Text, "-", true).unwrap();
        assert_eq!(text, "✗ Invalid");

        let text = check_output(&session, &outcome, OutputFormat::Text, "-", false).unwrap();
        assert!(text.contains("table 1 row 1 Jan does not match table 0"));
    }

    #[test]
    fn test_json_output() {
        let mut session = session(&[], &[2]);
        let outcome = session.apply(Action::Submit).unwrap();
        let text = check_output(&session, &outcome, OutputFormat::Json, "-", false).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["tables"][0]["rows"][1]["year"], 2025);
    }
}
