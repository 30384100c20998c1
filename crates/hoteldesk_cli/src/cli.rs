//! clap wiring generated from the core command registry.
//!
//! # Responsibility
//! - Define global options (database path, logging, SQL echo).
//! - Expose one subcommand per registered command with its `--option value`
//!   pairs.
//! - Collect supplied option values for prompt resolution.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches};
use hoteldesk_core::{CommandRegistry, CommandSpec, FieldValues, OptionKind, DEFAULT_DB_PATH};
use std::path::PathBuf;

/// Options shared by every command.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// SQLite database file, created on first use.
    #[arg(long, env = "HOTELDESK_DB", default_value = DEFAULT_DB_PATH, global = true)]
    pub db: PathBuf,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "HOTELDESK_LOG_LEVEL", global = true)]
    #[arg(default_value = hoteldesk_core::default_log_level())]
    pub log_level: String,

    /// Write rotating log files to this directory instead of stderr.
    #[arg(long, env = "HOTELDESK_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log every SQL statement executed by the command.
    #[arg(long, global = true)]
    pub echo: bool,
}

impl GlobalArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        <Self as FromArgMatches>::from_arg_matches(matches)
    }
}

/// Builds the full command line from `registry`.
pub fn build(registry: &CommandRegistry) -> Command {
    let root = Command::new("hoteldesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Data entry for the hotel management database")
        .subcommand_required(true)
        .arg_required_else_help(true);

    registry
        .iter()
        .fold(GlobalArgs::augment_args(root), |root, spec| {
            root.subcommand(subcommand(spec))
        })
}

fn subcommand(spec: &CommandSpec) -> Command {
    spec.options
        .iter()
        .fold(Command::new(spec.name).about(spec.about), |command, option| {
            let arg = Arg::new(option.name)
                .long(option.name)
                .help(option.help)
                .action(ArgAction::Set);
            let arg = match option.kind {
                OptionKind::Integer => arg.value_parser(value_parser!(i64)),
                OptionKind::Text => arg.value_parser(value_parser!(String)),
            };
            let arg = match option.default {
                Some(default) => arg.default_value(default),
                None => arg,
            };
            command.arg(arg)
        })
}

/// Reads the option values given on the command line (including defaults).
pub fn supplied_fields(spec: &CommandSpec, matches: &ArgMatches) -> FieldValues {
    spec.options
        .iter()
        .filter_map(|option| {
            let value = match option.kind {
                OptionKind::Integer => matches.get_one::<i64>(option.name).map(i64::to_string),
                OptionKind::Text => matches.get_one::<String>(option.name).cloned(),
            };
            value.map(|value| (option.name, value))
        })
        .collect()
}
