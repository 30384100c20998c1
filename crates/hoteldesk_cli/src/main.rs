//! `hoteldesk` entry point.
//!
//! # Responsibility
//! - Parse the command line, resolve prompted options and run one command.
//! - Map command failures onto distinct process exit codes.

mod cli;

use anyhow::{anyhow, Context, Result};
use hoteldesk_core::db::open_db_with_echo;
use hoteldesk_core::{
    init_logging, resolve_fields, CommandRegistry, EntryError, ErrorKind, LinePrompter, LogTarget,
};
use log::info;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let registry = CommandRegistry::standard().context("invalid command registry")?;
    let matches = cli::build(&registry).get_matches();
    let globals = cli::GlobalArgs::from_matches(&matches)?;

    init_logging(&effective_level(&globals), log_target(globals.log_dir.clone())?)
        .map_err(|message| anyhow!(message))?;

    let (name, sub_matches) = matches.subcommand().context("no command given")?;
    let spec = registry
        .get(name)
        .with_context(|| format!("unknown command `{name}`"))?;

    let stdin = io::stdin();
    let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
    let fields = resolve_fields(spec, cli::supplied_fields(spec, sub_matches), &mut prompter)?;

    info!(
        "event=command_start module=cli status=start command={name} db={}",
        globals.db.display()
    );
    let mut conn = match open_db_with_echo(&globals.db, globals.echo) {
        Ok(conn) => conn,
        Err(err) => return Ok(report(&EntryError::from(err))),
    };

    match spec.run(&mut conn, &fields) {
        Ok(confirmation) => {
            println!("{confirmation}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report(&err)),
    }
}

fn report(err: &EntryError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(exit_code(err.kind()))
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Parse => 2,
        ErrorKind::ConstraintViolation => 3,
        ErrorKind::Connection => 4,
    }
}

/// `--echo` needs at least `info` for the echoed statements to show.
fn effective_level(globals: &cli::GlobalArgs) -> String {
    let level = globals.log_level.trim().to_ascii_lowercase();
    if globals.echo && matches!(level.as_str(), "warn" | "warning" | "error") {
        return "info".to_string();
    }
    level
}

fn log_target(log_dir: Option<PathBuf>) -> Result<LogTarget> {
    let Some(dir) = log_dir else {
        return Ok(LogTarget::Stderr);
    };
    if dir.is_absolute() {
        return Ok(LogTarget::Directory(dir));
    }
    let cwd = std::env::current_dir().context("cannot resolve relative --log-dir")?;
    Ok(LogTarget::Directory(cwd.join(dir)))
}

#[cfg(test)]
mod tests {
    use super::{exit_code, log_target};
    use hoteldesk_core::{ErrorKind, LogTarget};
    use std::path::PathBuf;

    #[test]
    fn each_failure_kind_has_its_own_exit_code() {
        let codes = [
            exit_code(ErrorKind::Parse),
            exit_code(ErrorKind::ConstraintViolation),
            exit_code(ErrorKind::Connection),
        ];
        assert_eq!(codes, [2, 3, 4]);
    }

    #[test]
    fn relative_log_dir_is_anchored_to_cwd() {
        assert_eq!(log_target(None).unwrap(), LogTarget::Stderr);
        match log_target(Some(PathBuf::from("logs"))).unwrap() {
            LogTarget::Directory(dir) => {
                assert!(dir.is_absolute());
                assert!(dir.ends_with("logs"));
            }
            other => panic!("unexpected target: {other}"),
        }
    }
}
