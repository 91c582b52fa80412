use student_core::db::{init_schema, open_connection, DbError, STUDENTS_TABLE};
use student_core::DbConfig;

#[test]
fn init_schema_creates_students_table_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::new(
        dir.path().join("students.db").to_str().unwrap(),
        "registrar",
        "secret",
    )
    .unwrap();

    let conn = open_connection(&config).unwrap();
    init_schema(&conn).unwrap();
    init_schema(&conn).unwrap();

    let columns: Vec<String> = conn
        .prepare(&format!("PRAGMA table_info({STUDENTS_TABLE});"))
        .unwrap()
        .query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(columns, ["student_id", "first_name", "last_name"]);
}

#[test]
fn open_connection_accepts_sqlite_uri() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("file:{}", dir.path().join("uri.db").display());
    let config = DbConfig::new(url, "", "").unwrap();

    let conn = open_connection(&config).unwrap();
    init_schema(&conn).unwrap();
}

#[test]
fn open_connection_reports_unreachable_store() {
    let dir = tempfile::tempdir().unwrap();
    let url = dir.path().join("missing").join("students.db");
    let config = DbConfig::new(url.to_str().unwrap(), "", "").unwrap();

    let err = open_connection(&config).unwrap_err();
    match err {
        DbError::Open { url: reported, .. } => assert_eq!(reported, config.url),
        other => panic!("unexpected error: {other}"),
    }
}
