//! Tests for reader selection by driver identifier.

use sqlx::{mysql::MySqlPoolOptions, sqlite::SqlitePoolOptions};
use wink_schema::{Connection, Driver, SchemaError, SchemaReader, SchemaReaderFactory};

async fn sqlite_connection() -> Connection {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
        .into()
}

fn mysql_connection() -> Connection {
    // Lazy pools never connect until a query runs
    MySqlPoolOptions::new()
        .connect_lazy("mysql://root@127.0.0.1:3306/wink")
        .expect("Failed to build lazy pool")
        .into()
}

#[tokio::test]
async fn test_make_sqlite_reader() {
    let reader = SchemaReaderFactory::make("sqlite", &sqlite_connection().await).unwrap();

    assert_eq!(reader.driver(), Driver::Sqlite);
}

#[tokio::test]
async fn test_make_mysql_reader() {
    let reader = SchemaReaderFactory::make("mysql", &mysql_connection()).unwrap();

    assert_eq!(reader.driver(), Driver::MySql);
}

#[tokio::test]
async fn test_make_unsupported_driver() {
    let err = SchemaReaderFactory::make("postgres", &sqlite_connection().await)
        .err()
        .expect("postgres should be rejected");

    assert!(matches!(err, SchemaError::UnsupportedDriver { ref driver } if driver == "postgres"));
    assert_eq!(err.to_string(), "Unsupported database driver: postgres");
}

#[tokio::test]
async fn test_make_driver_is_case_sensitive() {
    let err = SchemaReaderFactory::make("SQLite", &sqlite_connection().await)
        .err()
        .expect("driver identifiers are lower-case");

    assert!(matches!(err, SchemaError::UnsupportedDriver { .. }));
}

#[tokio::test]
async fn test_make_driver_mismatch() {
    let err = SchemaReaderFactory::make("mysql", &sqlite_connection().await)
        .err()
        .expect("mysql reader cannot use a sqlite pool");

    assert!(matches!(
        err,
        SchemaError::DriverMismatch { ref driver, connection: "sqlite" } if driver == "mysql"
    ));
}

#[tokio::test]
async fn test_open_unsupported_driver() {
    let err = Connection::open("pgsql", "postgres://localhost/app")
        .await
        .err()
        .expect("pgsql should be rejected");

    assert!(matches!(err, SchemaError::UnsupportedDriver { .. }));
}
