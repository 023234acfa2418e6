//! CLI entry point for yeartab.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands};

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", yeartab::ui::colors::error("Error:"), err);
        std::process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("YEARTAB_QUIET", "1");
    }
    init_logging(cli.verbose, yeartab::ui::is_quiet());

    match cli.command {
        Commands::Init { force } => cmd::init::cmd_init(force),
        Commands::Check { file, format, year } => cmd::check::cmd_check(&file, format, year),
        Commands::Template { rows, format } => cmd::template::cmd_template(&rows, format),
        Commands::Session { year, from } => cmd::session::cmd_session(year, from.as_deref()),
        Commands::Version { build } => cmd::util::cmd_version(build),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}

/// Level from `-v` count, `warn` by default, `error` when quiet. `RUST_LOG` still applies.
fn log_level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(log_level_filter(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(log_level_filter(0, false), LevelFilter::Warn);
        assert_eq!(log_level_filter(1, false), LevelFilter::Info);
        assert_eq!(log_level_filter(2, false), LevelFilter::Debug);
        assert_eq!(log_level_filter(7, false), LevelFilter::Trace);
        assert_eq!(log_level_filter(3, true), LevelFilter::Error);
    }

    #[test]
    fn test_parse_template_rows() {
        let cli = Cli::parse_from(["yeartab", "template", "--rows", "3", "--rows", "1"]);
        match cli.command {
            Commands::Template { rows, .. } => assert_eq!(rows, vec![3, 1]),
            _ => panic!("expected template command"),
        }
    }
}
