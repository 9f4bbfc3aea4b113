//! Transaction boundary over the notice repository.
//!
//! # Responsibility
//! - Run a unit of repository work inside one SQLite transaction.
//! - Commit on success, roll back on any error or unwind.
//!
//! # Invariants
//! - Write units start `IMMEDIATE`, so concurrent writers queue on the
//!   busy timeout instead of failing a lock upgrade mid-transaction.
//! - Read units see one consistent snapshot.

use crate::repo::notice_repo::{
    ensure_notice_connection_ready, NoticeRepository, RepoError, RepoResult,
    SqliteNoticeRepository,
};
use rusqlite::{Connection, TransactionBehavior};

/// Unit-of-work seam services are generic over.
pub trait NoticeStore {
    /// Runs `work` inside a read transaction.
    fn read<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn NoticeRepository) -> Result<T, E>,
        E: From<RepoError>;

    /// Runs `work` inside a write transaction.
    fn write<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn NoticeRepository) -> Result<T, E>,
        E: From<RepoError>;
}

/// SQLite-backed notice store over a borrowed connection.
pub struct SqliteNoticeStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNoticeStore<'conn> {
    /// Constructs a store after checking the connection is migrated.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_notice_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn run<T, E, F>(&mut self, behavior: TransactionBehavior, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn NoticeRepository) -> Result<T, E>,
        E: From<RepoError>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(behavior)
            .map_err(RepoError::from)?;
        let value = work(&SqliteNoticeRepository::new_unchecked(&tx))?;
        tx.commit().map_err(RepoError::from)?;
        Ok(value)
    }
}

impl NoticeStore for SqliteNoticeStore<'_> {
    fn read<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn NoticeRepository) -> Result<T, E>,
        E: From<RepoError>,
    {
        self.run(TransactionBehavior::Deferred, work)
    }

    fn write<T, E, F>(&mut self, work: F) -> Result<T, E>
    where
        F: FnOnce(&dyn NoticeRepository) -> Result<T, E>,
        E: From<RepoError>,
    {
        self.run(TransactionBehavior::Immediate, work)
    }
}
