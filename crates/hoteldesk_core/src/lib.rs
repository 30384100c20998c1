//! Core domain logic for the hotel desk entry tool.
//! Owns the schema, typed entities, sessions and entry commands.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::prompt::{resolve_fields, LinePrompter, PromptError, Prompter};
pub use command::{CommandRegistry, CommandSpec, OptionKind, OptionSpec, RegistryError};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::fields::{FieldError, FieldValues};
pub use model::ledger::{Expense, Item, Order, Payment};
pub use model::lodging::{Booking, Room, RoomType};
pub use model::people::{Customer, Employee};
pub use model::{EntityKind, RowId, Stored};
pub use repo::record::{Record, RepoError, RepoResult};
pub use repo::record_repo::{RecordRepository, SqliteRecordRepository};
pub use repo::session::{Session, StagedRow};
pub use service::entry_service::{Confirmation, EntryError, EntryResult, ErrorKind};

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "mydb.db";

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
