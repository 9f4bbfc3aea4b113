//! Notice repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide typed operations over the `notice` table, including the
//!   author join used by list views and the relative read-count update.
//!
//! # Invariants
//! - List order is `notice_yn DESC, notice_seq DESC`; notices whose author
//!   row is missing are left out (inner join).
//! - The read counter is only ever changed by a single relative UPDATE.
//! - Updates never touch `read_cnt`, `user_id`, `reg_id` or `reg_dt`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::notice::{Notice, NoticeSeq, NoticeValidationError, NoticeWithAuthor};
use crate::model::user::UserInfo;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

const NOTICE_COLUMNS: [&str; 10] = [
    "notice_seq",
    "title",
    "notice_yn",
    "contents",
    "user_id",
    "read_cnt",
    "reg_id",
    "reg_dt",
    "chg_id",
    "chg_dt",
];

const NOTICE_SELECT_SQL: &str = "SELECT
    notice_seq,
    title,
    notice_yn,
    contents,
    user_id,
    read_cnt,
    reg_id,
    reg_dt,
    chg_id,
    chg_dt
FROM notice";

const NOTICE_LIST_SQL: &str = "SELECT
    n.notice_seq AS notice_seq,
    n.title AS title,
    n.notice_yn AS notice_yn,
    n.contents AS contents,
    n.user_id AS user_id,
    n.read_cnt AS read_cnt,
    n.reg_id AS reg_id,
    n.reg_dt AS reg_dt,
    n.chg_id AS chg_id,
    n.chg_dt AS chg_dt,
    u.user_name AS user_name
FROM notice n
INNER JOIN user_info u ON u.user_id = n.user_id
ORDER BY n.notice_yn DESC, n.notice_seq DESC;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for notice persistence and query operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(#[from] NoticeValidationError),
    #[error("{0}")]
    Db(#[from] DbError),
    #[error("notice not found: {0}")]
    NotFound(NoticeSeq),
    /// A schema constraint (FK, CHECK, NOT NULL) rejected the write.
    #[error("notice write rejected by constraint: {0}")]
    Constraint(String),
    #[error("invalid persisted notice data: {0}")]
    InvalidData(String),
    #[error(
        "connection schema version {actual_version} does not match expected {expected_version}"
    )]
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    #[error("required table `{0}` is missing")]
    MissingRequiredTable(&'static str),
    #[error("required column `{table}.{column}` is missing")]
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.unwrap_or_else(|| err.to_string()))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Repository interface for notice persistence.
pub trait NoticeRepository {
    /// All notices joined to their author, pinned first then newest first.
    fn list_with_author(&self) -> RepoResult<Vec<NoticeWithAuthor>>;
    /// Full notice row, without author join.
    fn find_by_id(&self, notice_seq: NoticeSeq) -> RepoResult<Option<Notice>>;
    /// Adds one to the read counter in place; returns rows affected.
    fn increment_read_count(&self, notice_seq: NoticeSeq) -> RepoResult<usize>;
    /// Inserts when `notice_seq` is `None`, otherwise updates by key.
    /// Returns the row as persisted.
    fn save(&self, notice: &Notice) -> RepoResult<Notice>;
    /// Deletes by key; returns rows affected (0 for a missing row).
    fn delete_by_id(&self, notice_seq: NoticeSeq) -> RepoResult<usize>;
}

/// SQLite-backed notice repository.
///
/// Borrows either a plain connection or a transaction (via deref), so the
/// same statements run inside and outside a unit of work.
pub struct SqliteNoticeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoticeRepository<'conn> {
    /// Constructs a repository after checking the connection is migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_notice_connection_ready(conn)?;
        Ok(Self { conn })
    }

    /// Constructs a repository over a connection already known to be ready.
    pub(crate) fn new_unchecked(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn insert(&self, notice: &Notice) -> RepoResult<Notice> {
        self.conn.execute(
            "INSERT INTO notice (
                title,
                notice_yn,
                contents,
                user_id,
                read_cnt,
                reg_id,
                reg_dt,
                chg_id,
                chg_dt
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                notice.title.as_str(),
                notice.notice_yn.as_str(),
                notice.contents.as_str(),
                notice.user_id.as_str(),
                notice.read_cnt,
                notice.reg_id.as_str(),
                notice.reg_dt.as_str(),
                notice.chg_id.as_str(),
                notice.chg_dt.as_str(),
            ],
        )?;

        Ok(Notice {
            notice_seq: Some(self.conn.last_insert_rowid()),
            ..notice.clone()
        })
    }

    fn update(&self, notice_seq: NoticeSeq, notice: &Notice) -> RepoResult<Notice> {
        let changed = self.conn.execute(
            "UPDATE notice
             SET
                title = ?2,
                notice_yn = ?3,
                contents = ?4,
                chg_id = ?5,
                chg_dt = ?6
             WHERE notice_seq = ?1;",
            params![
                notice_seq,
                notice.title.as_str(),
                notice.notice_yn.as_str(),
                notice.contents.as_str(),
                notice.chg_id.as_str(),
                notice.chg_dt.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(notice_seq));
        }

        self.find_by_id(notice_seq)?
            .ok_or(RepoError::NotFound(notice_seq))
    }
}

impl NoticeRepository for SqliteNoticeRepository<'_> {
    fn list_with_author(&self) -> RepoResult<Vec<NoticeWithAuthor>> {
        let mut stmt = self.conn.prepare(NOTICE_LIST_SQL)?;
        let mut rows = stmt.query([])?;
        let mut notices = Vec::new();

        while let Some(row) = rows.next()? {
            let notice = parse_notice_row(row)?;
            let author = UserInfo {
                user_id: notice.user_id.clone(),
                user_name: row.get("user_name")?,
            };
            notices.push(NoticeWithAuthor { notice, author });
        }

        Ok(notices)
    }

    fn find_by_id(&self, notice_seq: NoticeSeq) -> RepoResult<Option<Notice>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTICE_SELECT_SQL} WHERE notice_seq = ?1;"))?;

        let mut rows = stmt.query([notice_seq])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_notice_row(row)?));
        }

        Ok(None)
    }

    fn increment_read_count(&self, notice_seq: NoticeSeq) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE notice SET read_cnt = read_cnt + 1 WHERE notice_seq = ?1;",
            [notice_seq],
        )?;
        Ok(changed)
    }

    fn save(&self, notice: &Notice) -> RepoResult<Notice> {
        notice.validate()?;

        match notice.notice_seq {
            None => self.insert(notice),
            Some(notice_seq) => self.update(notice_seq, notice),
        }
    }

    fn delete_by_id(&self, notice_seq: NoticeSeq) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM notice WHERE notice_seq = ?1;", [notice_seq])?;
        Ok(changed)
    }
}

fn parse_notice_row(row: &Row<'_>) -> RepoResult<Notice> {
    let notice = Notice {
        notice_seq: Some(row.get("notice_seq")?),
        title: row.get("title")?,
        notice_yn: row.get("notice_yn")?,
        contents: row.get("contents")?,
        user_id: row.get("user_id")?,
        read_cnt: row.get("read_cnt")?,
        reg_id: row.get("reg_id")?,
        reg_dt: row.get("reg_dt")?,
        chg_id: row.get("chg_id")?,
        chg_dt: row.get("chg_dt")?,
    };
    notice.validate().map_err(|err| {
        RepoError::InvalidData(format!(
            "notice_seq={}: {err}",
            notice.notice_seq.unwrap_or_default()
        ))
    })?;
    Ok(notice)
}

pub(crate) fn ensure_notice_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for table in ["notice", "user_info"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    for column in NOTICE_COLUMNS {
        if !table_has_column(conn, "notice", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notice",
                column,
            });
        }
    }

    for column in ["user_id", "user_name"] {
        if !table_has_column(conn, "user_info", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "user_info",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1;",
            [table],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
