use notice_core::db::migrations::latest_version;
use notice_core::db::{open_db, open_db_in_memory, open_db_with, DbError, DbOptions};
use rusqlite::Connection;
use std::time::Duration;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "notice");
    assert_table_exists(&conn, "user_info");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notice.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db_with(
        &path,
        &DbOptions {
            busy_timeout: Duration::from_millis(100),
        },
    )
    .unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "notice");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_enforces_pin_flag_and_author_reference() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO user_info (user_id, user_name) VALUES ('u1', 'Alice');",
        [],
    )
    .unwrap();

    let bad_flag = conn.execute(
        "INSERT INTO notice (title, notice_yn, contents, user_id, reg_id, reg_dt, chg_id, chg_dt)
         VALUES ('t', 'X', 'c', 'u1', 'u1', '2024-01-01 00:00:00', 'u1', '2024-01-01 00:00:00');",
        [],
    );
    assert!(bad_flag.is_err());

    let unknown_author = conn.execute(
        "INSERT INTO notice (title, notice_yn, contents, user_id, reg_id, reg_dt, chg_id, chg_dt)
         VALUES ('t', 'N', 'c', 'ghost', 'ghost', '2024-01-01 00:00:00', 'ghost', '2024-01-01 00:00:00');",
        [],
    );
    assert!(unknown_author.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
