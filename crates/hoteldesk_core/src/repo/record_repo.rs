//! Generic SQLite repository over [`Record`] tables.
//!
//! # Responsibility
//! - Insert one entity row and return its assigned id.
//! - Read rows back for verification and tests.
//!
//! # Invariants
//! - Inserts run on whatever connection or transaction the caller passes.
//! - Rows are returned in ascending `id` order.

use super::record::{insert_sql, select_sql, Record, RepoResult};
use crate::model::{RowId, Stored};
use rusqlite::{params_from_iter, Connection};

/// Repository interface for entity rows.
pub trait RecordRepository {
    fn insert<T: Record>(&self, record: &T) -> RepoResult<RowId>;
    fn list<T: Record>(&self) -> RepoResult<Vec<Stored<T>>>;
    fn count<T: Record>(&self) -> RepoResult<u64>;
}

/// SQLite-backed entity repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn insert<T: Record>(&self, record: &T) -> RepoResult<RowId> {
        let mut stmt = self.conn.prepare_cached(&insert_sql::<T>())?;
        stmt.execute(params_from_iter(record.to_values()))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list<T: Record>(&self) -> RepoResult<Vec<Stored<T>>> {
        let mut stmt = self.conn.prepare(&select_sql::<T>())?;
        let mut rows = stmt.query([])?;
        let mut stored = Vec::new();

        while let Some(row) = rows.next()? {
            stored.push(Stored {
                id: row.get("id")?,
                record: T::from_row(row)?,
            });
        }

        Ok(stored)
    }

    fn count<T: Record>(&self) -> RepoResult<u64> {
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {};", T::TABLE),
            [],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
