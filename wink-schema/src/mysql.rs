//! MySQL/MariaDB schema reader.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row, mysql::MySqlRow};
use tracing::debug;
use wink_core::{Column, base_keyword};

use crate::{Driver, Result, SchemaError, SchemaReader};

/// Schema reader for MySQL/MariaDB using `SHOW TABLES` and `SHOW COLUMNS`.
pub struct MysqlSchemaReader {
    pool: MySqlPool,
}

impl MysqlSchemaReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn database_name(&self) -> Result<String> {
        let name: Option<String> = sqlx::query_scalar("SELECT DATABASE()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| SchemaError::query(e, "reading current MySQL database"))?;

        name.ok_or(SchemaError::NoDatabaseSelected)
    }
}

#[async_trait]
impl SchemaReader for MysqlSchemaReader {
    fn driver(&self) -> Driver {
        Driver::MySql
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        let database = self.database_name().await?;
        let key = format!("Tables_in_{}", database);
        debug!(database = %database, "listing MySQL tables");

        let rows: Vec<MySqlRow> = sqlx::query("SHOW TABLES")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SchemaError::query(e, "listing MySQL tables"))?;

        rows.iter()
            .map(|row| text_column(row, key.as_str()))
            .collect()
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<Column>> {
        let query = format!(
            "SHOW COLUMNS FROM {}",
            self.driver().quote_identifier(table)
        );
        debug!(table, "listing MySQL columns");

        let rows: Vec<MySqlRow> = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SchemaError::query(e, format!("listing columns of '{}'", table)))?;

        rows.iter()
            .map(|row| {
                let name = text_column(row, "Field")?;
                let raw_type = text_column(row, "Type")?;
                Ok(Column::new(name, normalize_mysql_type(&raw_type)))
            })
            .collect()
    }
}

/// Read a textual column that MySQL may report as a binary string.
///
/// `SHOW COLUMNS` returns `Type` as a blob on MySQL 8.
fn text_column(row: &MySqlRow, column: &str) -> Result<String> {
    row.try_get::<String, _>(column).or_else(|_| {
        row.try_get::<Vec<u8>, _>(column)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .map_err(|e| SchemaError::query(e, format!("decoding column '{}'", column)))
    })
}

/// Normalize a MySQL column type to the generator's vocabulary.
///
/// Only the base keyword is kept. `tinyint` is read as `boolean`, since MySQL
/// stores booleans as single-byte integers. Unlisted types pass through
/// lower-cased.
pub fn normalize_mysql_type(raw_type: &str) -> String {
    let base = base_keyword(raw_type);
    let normalized = match base.as_str() {
        "tinyint" => "boolean",
        "smallint" | "mediumint" | "int" | "bigint" | "year" => "integer",
        "decimal" => "decimal",
        "float" => "float",
        "double" => "double",
        "datetime" => "datetime",
        "timestamp" => "timestamp",
        "date" => "date",
        "time" => "time",
        "char" | "varchar" | "enum" => "string",
        "text" | "mediumtext" | "longtext" => "text",
        "json" => "json",
        _ => return base,
    };
    normalized.to_string()
}
