use crate::{
    Connection, Driver, MysqlSchemaReader, Result, SchemaError, SchemaReader, SqliteSchemaReader,
};

/// Selects the schema reader for a driver identifier.
pub struct SchemaReaderFactory;

impl SchemaReaderFactory {
    /// Create the reader for `driver` bound to `connection`.
    ///
    /// Fails with [`SchemaError::UnsupportedDriver`] for identifiers other than
    /// `mysql` and `sqlite`, and with [`SchemaError::DriverMismatch`] when the
    /// connection belongs to a different backend.
    pub fn make(driver: &str, connection: &Connection) -> Result<Box<dyn SchemaReader>> {
        let driver: Driver = driver.parse()?;

        match (driver, connection) {
            (Driver::MySql, Connection::MySql(pool)) => {
                Ok(Box::new(MysqlSchemaReader::new(pool.clone())))
            }
            (Driver::Sqlite, Connection::Sqlite(pool)) => {
                Ok(Box::new(SqliteSchemaReader::new(pool.clone())))
            }
            (driver, connection) => Err(SchemaError::DriverMismatch {
                driver: driver.to_string(),
                connection: connection.driver().as_str(),
            }),
        }
    }
}
