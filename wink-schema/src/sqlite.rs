//! SQLite schema reader.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use tracing::debug;
use wink_core::Column;

use crate::{Driver, Result, SchemaError, SchemaReader};

/// Schema reader for SQLite using `sqlite_master` and `PRAGMA table_info`.
pub struct SqliteSchemaReader {
    pool: SqlitePool,
}

impl SqliteSchemaReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaReader for SqliteSchemaReader {
    fn driver(&self) -> Driver {
        Driver::Sqlite
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        debug!("listing SQLite tables");

        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SchemaError::query(e, "listing SQLite tables"))
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<Column>> {
        let query = format!(
            "PRAGMA table_info({})",
            self.driver().quote_identifier(table)
        );
        debug!(table, "listing SQLite columns");

        let rows: Vec<SqliteRow> = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SchemaError::query(e, format!("listing columns of '{}'", table)))?;

        rows.iter()
            .map(|row| {
                let name: String = row
                    .try_get("name")
                    .map_err(|e| SchemaError::query(e, "decoding column name"))?;
                let raw_type: String = row
                    .try_get("type")
                    .map_err(|e| SchemaError::query(e, "decoding column type"))?;
                Ok(Column::new(name, raw_type.to_lowercase()))
            })
            .collect()
    }
}
