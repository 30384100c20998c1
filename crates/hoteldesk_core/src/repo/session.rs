//! Unit-of-work handle for entry commands.
//!
//! # Responsibility
//! - Stage entity inserts inside one SQLite transaction.
//! - Make every write visible only after an explicit commit.
//!
//! # Invariants
//! - A session that is dropped without `commit()` rolls back.
//! - A session borrows its connection exclusively for its whole lifetime.

use super::record::{Record, RepoResult};
use super::record_repo::{RecordRepository, SqliteRecordRepository};
use crate::model::{EntityKind, RowId};
use log::debug;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// One staged insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedRow {
    pub kind: EntityKind,
    pub id: RowId,
}

/// Transaction-scoped insert session.
pub struct Session<'conn> {
    tx: Transaction<'conn>,
    staged: Vec<StagedRow>,
}

impl<'conn> Session<'conn> {
    /// Starts an immediate transaction so the write lock is taken up front.
    pub fn begin(conn: &'conn mut Connection) -> RepoResult<Self> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        Ok(Self {
            tx,
            staged: Vec::new(),
        })
    }

    /// Inserts `record` inside the open transaction and returns its row id.
    pub fn add<T: Record>(&mut self, record: &T) -> RepoResult<RowId> {
        let id = SqliteRecordRepository::new(&self.tx).insert(record)?;
        debug!(
            "event=session_add module=repo status=ok entity={} id={id}",
            T::KIND.as_str()
        );
        self.staged.push(StagedRow { kind: T::KIND, id });
        Ok(id)
    }

    /// Rows staged so far, in insertion order.
    pub fn staged(&self) -> &[StagedRow] {
        &self.staged
    }

    /// Commits all staged rows.
    pub fn commit(self) -> RepoResult<Vec<StagedRow>> {
        self.tx.commit()?;
        Ok(self.staged)
    }

    /// Discards all staged rows.
    pub fn rollback(self) -> RepoResult<()> {
        self.tx.rollback()?;
        Ok(())
    }
}
