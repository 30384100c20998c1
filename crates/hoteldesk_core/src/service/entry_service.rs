//! Entity-creation use cases behind every entry command.
//!
//! # Responsibility
//! - Turn resolved command fields into one typed entity.
//! - Persist it through a scoped [`Session`] and report a confirmation.
//!
//! # Invariants
//! - Field parsing completes before a session is opened; a parse failure
//!   never touches storage.
//! - Any storage failure after the session opens is rolled back.
//! - Every handler returns the same `EntryResult<Confirmation>` contract.

use crate::db::migrations::{apply_migrations, current_user_version};
use crate::db::DbError;
use crate::model::fields::{FieldError, FieldValues};
use crate::model::ledger::{Expense, Order};
use crate::model::lodging::{Booking, Room, RoomType};
use crate::model::people::{Customer, Employee};
use crate::model::{EntityKind, RowId};
use crate::repo::record::{Record, RepoError};
use crate::repo::session::Session;
use log::{error, info, warn};
use rusqlite::{Connection, ErrorCode};
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type EntryResult<T> = Result<T, EntryError>;

/// Coarse failure class, used by callers to pick presentation and exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    ConstraintViolation,
    Connection,
}

/// Failure of one entry command.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("{0}")]
    Parse(#[from] FieldError),
    #[error("constraint violation: {0}")]
    ConstraintViolation(rusqlite::Error),
    #[error("database error: {0}")]
    Connection(DbError),
    #[error("invalid persisted data: {0}")]
    InvalidData(String),
}

impl EntryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::Connection(_) | Self::InvalidData(_) => ErrorKind::Connection,
        }
    }
}

impl From<DbError> for EntryError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Sqlite(err) if is_constraint_violation(&err) => Self::ConstraintViolation(err),
            other => Self::Connection(other),
        }
    }
}

impl From<RepoError> for EntryError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Db(err) => err.into(),
            RepoError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

impl From<rusqlite::Error> for EntryError {
    fn from(value: rusqlite::Error) -> Self {
        DbError::Sqlite(value).into()
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation)
}

/// Successful outcome of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Schema is present at `schema_version`; `applied` migrations ran now.
    Initialized { schema_version: u32, applied: usize },
    /// One row of `kind` was committed with id `id`.
    Added { kind: EntityKind, id: RowId },
}

impl Display for Confirmation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized { .. } => f.write_str("Database initialized."),
            Self::Added {
                kind: EntityKind::Booking,
                ..
            } => f.write_str("Booking added successfully!"),
            Self::Added { kind, .. } => write!(f, "{kind} added successfully."),
        }
    }
}

/// Creates all tables if absent. Safe to call repeatedly.
pub fn init_db(conn: &mut Connection) -> EntryResult<Confirmation> {
    let applied = apply_migrations(conn)?;
    let schema_version = current_user_version(conn)?;
    info!(
        "event=init_db module=service status=ok schema_version={schema_version} applied={applied}"
    );
    Ok(Confirmation::Initialized {
        schema_version,
        applied,
    })
}

pub fn add_customer(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let customer = parse_entity(EntityKind::Customer, Customer::from_fields(fields))?;
    add_record(conn, &customer)
}

pub fn add_employee(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let employee = parse_entity(EntityKind::Employee, Employee::from_fields(fields))?;
    add_record(conn, &employee)
}

pub fn add_expense(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let expense = parse_entity(EntityKind::Expense, Expense::from_fields(fields))?;
    add_record(conn, &expense)
}

/// Records a booking. Check-out before check-in is accepted as given.
pub fn add_booking(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let booking = parse_entity(EntityKind::Booking, Booking::from_fields(fields))?;
    add_record(conn, &booking)
}

pub fn add_room(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let room = parse_entity(EntityKind::Room, Room::from_fields(fields))?;
    add_record(conn, &room)
}

pub fn add_roomtype(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let room_type = parse_entity(EntityKind::RoomType, RoomType::from_fields(fields))?;
    add_record(conn, &room_type)
}

pub fn add_order(conn: &mut Connection, fields: &FieldValues) -> EntryResult<Confirmation> {
    let order = parse_entity(EntityKind::Order, Order::from_fields(fields))?;
    add_record(conn, &order)
}

/// Persists one already-typed entity in its own session.
///
/// # Side effects
/// - Commits exactly one row on success.
/// - Rolls back and leaves storage untouched on failure.
/// - Emits `entry_add` logging events with duration and status.
pub fn add_record<T: Record>(conn: &mut Connection, record: &T) -> EntryResult<Confirmation> {
    let started_at = Instant::now();
    let entity = T::KIND.as_str();

    let mut session = Session::begin(conn).map_err(|err| {
        error!(
            "event=entry_add module=service status=error entity={entity} error_code=session_begin_failed error={err}"
        );
        EntryError::from(err)
    })?;

    let id = match session.add(record) {
        Ok(id) => id,
        Err(err) => {
            error!(
                "event=entry_add module=service status=error entity={entity} duration_ms={} error_code=insert_failed error={err}",
                started_at.elapsed().as_millis()
            );
            if let Err(rollback_err) = session.rollback() {
                error!(
                    "event=entry_rollback module=service status=error entity={entity} error={rollback_err}"
                );
            }
            return Err(err.into());
        }
    };

    session.commit().map_err(|err| {
        error!(
            "event=entry_add module=service status=error entity={entity} duration_ms={} error_code=commit_failed error={err}",
            started_at.elapsed().as_millis()
        );
        EntryError::from(err)
    })?;

    info!(
        "event=entry_add module=service status=ok entity={entity} id={id} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(Confirmation::Added { kind: T::KIND, id })
}

fn parse_entity<T>(kind: EntityKind, parsed: Result<T, FieldError>) -> EntryResult<T> {
    parsed.map_err(|err| {
        warn!(
            "event=entry_add module=service status=rejected entity={} field={}",
            kind.as_str(),
            err.field()
        );
        EntryError::Parse(err)
    })
}
