//! `yeartab session`: a line-oriented form session on standard input.
//!
//! Each line is one action. Adding a table or a row redraws the tables;
//! `submit` validates and, when valid, fills in Q1..Q4 and YTD.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use yeartab::config::Config;
use yeartab::fields::Field;
use yeartab::render::render_session;
use yeartab::session::{Action, Outcome, Session};
use yeartab::snapshot::{parse_cell, Cell};
use yeartab::ui::{self, colors};
use yeartab::workbook::{DocumentFormat, Workbook};

use super::resolve_year;

const HELP: &str = "\
Commands:
  add-table                      Append a table with one row
  add-row <table>                Add the previous year to a table
  set <table> <row> <month> <v>  Enter a month value (row 1 is the current year)
  clear <table> <row> <month>    Empty a month cell
  show                           Print all tables
  submit                         Validate and compute Q1..Q4 and YTD
  save <file>                    Write the tables to a workbook (.yaml or .json)
  help                           Show this help
  quit                           Leave the session";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    AddTable,
    AddRow(usize),
    Set {
        table: usize,
        row: usize,
        field: Field,
        cell: Cell,
    },
    Show,
    Submit,
    Save(PathBuf),
    Help,
    Quit,
}

fn parse_index(raw: Option<&str>, what: &str) -> Result<usize> {
    let raw = raw.with_context(|| format!("Missing {}", what))?;
    raw.parse()
        .with_context(|| format!("Invalid {} '{}'", what, raw))
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Ok(None);
    };

    let command = match name.to_lowercase().as_str() {
        "add-table" => Command::AddTable,
        "add-row" => Command::AddRow(parse_index(parts.next(), "table")?),
        "set" | "clear" => {
            let table = parse_index(parts.next(), "table")?;
            let row = parse_index(parts.next(), "row")?;
            let field: Field = parts.next().context("Missing month")?.parse()?;
            let cell = if name.eq_ignore_ascii_case("clear") {
                None
            } else {
                parse_cell(parts.next().context("Missing value")?)?
            };
            Command::Set {
                table,
                row,
                field,
                cell,
            }
        }
        "show" => Command::Show,
        "submit" => Command::Submit,
        "save" => Command::Save(PathBuf::from(parts.next().context("Missing file")?)),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => anyhow::bail!("Unknown command '{}'. Type 'help' for commands.", other),
    };

    if let Some(extra) = parts.next() {
        anyhow::bail!("Unexpected argument '{}'", extra);
    }
    Ok(Some(command))
}

pub fn cmd_session(year: Option<i32>, from: Option<&Path>) -> Result<()> {
    let config = Config::load()?;

    let mut session = match from {
        Some(path) => {
            let workbook = Workbook::load(path)?;
            let (model, values) = workbook
                .into_parts()
                .with_context(|| format!("Invalid workbook {}", path.display()))?;
            Session::from_parts(model, values, resolve_year(&config, year, workbook.year)?)
        }
        None => Session::new(resolve_year(&config, year, None)?),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut session,
        stdin.lock(),
        &mut stdout.lock(),
        &config.output.empty_marker,
        ui::is_quiet(),
    )
}

/// Drive `session` from `input` until `quit` or end of input.
fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    marker: &str,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        writeln!(out, "{}", render_session(session, marker))?;
        writeln!(out, "{}", colors::secondary("Type 'help' for commands."))?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{} {:#}", colors::error("error:"), err)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Err(err) = execute(session, command, out, marker, quiet) {
            writeln!(out, "{} {:#}", colors::error("error:"), err)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Apply a shape change and redraw the tables.
fn rebuild<W: Write>(
    session: &mut Session,
    action: Action,
    out: &mut W,
    marker: &str,
    quiet: bool,
) -> Result<()> {
    session.apply(action)?;
    if !quiet {
        writeln!(out, "{}", render_session(session, marker))?;
    }
    Ok(())
}

fn execute<W: Write>(
    session: &mut Session,
    command: Command,
    out: &mut W,
    marker: &str,
    quiet: bool,
) -> Result<()> {
    match command {
        Command::AddTable => rebuild(session, Action::AddTable, out, marker, quiet)?,
        Command::AddRow(table) => rebuild(session, Action::AddRow(table), out, marker, quiet)?,
        Command::Set {
            table,
            row,
            field,
            cell,
        } => session.enter(table, row, field, cell)?,
        Command::Show => writeln!(out, "{}", render_session(session, marker))?,
        Command::Submit => match session.apply(Action::Submit)? {
            Outcome::Valid(_) => {
                if !quiet {
                    writeln!(out, "{}", render_session(session, marker))?;
                }
                writeln!(out, "{}", ui::submit_status(true))?;
            }
            Outcome::Invalid(violation) => {
                writeln!(out, "{}", ui::submit_status(false))?;
                if !quiet {
                    writeln!(out, "  {}", colors::secondary(&violation.to_string()))?;
                }
            }
            Outcome::Rebuilt => {}
        },
        Command::Save(path) => {
            let workbook = Workbook::from_parts(
                session.model(),
                session.values(),
                Some(session.current_year()),
            );
            let content = workbook.render(DocumentFormat::from_path(&path))?;
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                writeln!(out, "{} Saved {}", colors::success("✓"), path.display())?;
            }
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}
