use async_trait::async_trait;
use wink_core::Column;

use crate::{Driver, Result};

/// Reads table and column metadata from one database backend.
///
/// Implementations exclude only the backend's own internal tables; skipping
/// application-level tables is the caller's concern.
#[async_trait]
pub trait SchemaReader: Send + Sync {
    /// Backend this reader introspects.
    fn driver(&self) -> Driver;

    /// List the table names of the connected database.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// List the columns of a table in the order the backend reports them.
    async fn list_columns(&self, table: &str) -> Result<Vec<Column>>;
}
