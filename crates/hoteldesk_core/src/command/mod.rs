//! Command registry for the entry CLI.
//!
//! # Responsibility
//! - Declare every command with its options, prompts and defaults.
//! - Map unique command names onto entry handlers.
//!
//! # Invariants
//! - Command names are unique; a duplicate is a registration error, never a
//!   silent replacement.
//! - Option names match the field names read by `model::*::from_fields`.

pub mod prompt;
mod specs;

use crate::model::fields::FieldValues;
use crate::service::entry_service::{Confirmation, EntryResult};
use rusqlite::Connection;
use std::collections::HashMap;

pub use specs::STANDARD_COMMANDS;

/// How an option value is checked at the interface boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Passed through as text; any parsing happens in the entity builder.
    Text,
    /// Must be a base-10 integer before the handler runs.
    Integer,
}

/// One `--option value` pair accepted by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    /// Label shown when the value has to be prompted.
    pub prompt: &'static str,
    pub help: &'static str,
    /// Options with a default are never prompted.
    pub default: Option<&'static str>,
    pub kind: OptionKind,
}

impl OptionSpec {
    pub const fn text(name: &'static str, prompt: &'static str, help: &'static str) -> Self {
        Self {
            name,
            prompt,
            help,
            default: None,
            kind: OptionKind::Text,
        }
    }

    pub const fn integer(name: &'static str, prompt: &'static str, help: &'static str) -> Self {
        Self {
            name,
            prompt,
            help,
            default: None,
            kind: OptionKind::Integer,
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

/// Entry point invoked with an open connection and resolved fields.
pub type Handler = fn(&mut Connection, &FieldValues) -> EntryResult<Confirmation>;

/// Declarative description of one command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub about: &'static str,
    pub options: &'static [OptionSpec],
    pub handler: Handler,
}

impl CommandSpec {
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.name == name)
    }

    pub fn run(&self, conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
        (self.handler)(conn, fields)
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("options", &self.options.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("command `{0}` is registered more than once")]
    DuplicateCommand(&'static str),
}

/// Name-keyed command table, in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry of all shipped commands.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::from_specs(STANDARD_COMMANDS.iter().copied())
    }

    pub fn from_specs(specs: impl IntoIterator<Item = CommandSpec>) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, spec: CommandSpec) -> Result<(), RegistryError> {
        if self.index.contains_key(spec.name) {
            return Err(RegistryError::DuplicateCommand(spec.name));
        }
        self.index.insert(spec.name, self.commands.len());
        self.commands.push(spec);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandRegistry, RegistryError, STANDARD_COMMANDS};

    #[test]
    fn standard_registry_reaches_customer_and_order_separately() {
        let registry = CommandRegistry::standard().unwrap();
        assert_eq!(registry.len(), STANDARD_COMMANDS.len());

        let customer = registry.get("add_customer").unwrap();
        assert!(customer.option("customername").is_some());
        assert!(customer.option("orderid").is_none());

        let order = registry.get("add_order").unwrap();
        assert!(order.option("orderid").is_some());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut specs = STANDARD_COMMANDS.to_vec();
        let mut shadow = specs[0];
        shadow.about = "a second definition";
        specs.push(shadow);

        let err = CommandRegistry::from_specs(specs).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCommand(STANDARD_COMMANDS[0].name));
    }

    #[test]
    fn every_command_except_initdb_has_a_defaulted_status() {
        for spec in STANDARD_COMMANDS.iter().filter(|spec| spec.name != "initdb") {
            let status = spec
                .option("status")
                .unwrap_or_else(|| panic!("{} lacks status", spec.name));
            assert!(status.default.is_some(), "{} status has no default", spec.name);
        }
    }
}
