use std::{str::FromStr, time::Duration};

use sqlx::{
    MySqlPool, SqlitePool,
    mysql::MySqlPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::{Driver, Result, SchemaError};

/// Connection pool timeout.
const POOL_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// An established database connection handed to a schema reader.
///
/// Readers only ever read through the pool; cloning is cheap.
#[derive(Debug, Clone)]
pub enum Connection {
    MySql(MySqlPool),
    Sqlite(SqlitePool),
}

impl Connection {
    /// Open a connection for a driver identifier and verify it answers.
    ///
    /// Introspection is sequential, so the pool holds a single connection.
    pub async fn open(driver: &str, url: &str) -> Result<Self> {
        let driver: Driver = driver.parse()?;
        let connect_err = |source| SchemaError::Connect {
            driver: driver.as_str(),
            source,
        };

        let connection = match driver {
            Driver::MySql => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(1)
                    .acquire_timeout(POOL_CONNECTION_TIMEOUT)
                    .connect(url)
                    .await
                    .map_err(connect_err)?;
                Connection::MySql(pool)
            }
            Driver::Sqlite => {
                let options = SqliteConnectOptions::from_str(url)
                    .map_err(connect_err)?
                    .read_only(true);
                let pool = SqlitePoolOptions::new()
                    .max_connections(1)
                    .acquire_timeout(POOL_CONNECTION_TIMEOUT)
                    .connect_with(options)
                    .await
                    .map_err(connect_err)?;
                Connection::Sqlite(pool)
            }
        };

        connection.ping().await.map_err(connect_err)?;
        info!(driver = driver.as_str(), "connected to database");

        Ok(connection)
    }

    /// Backend this connection talks to
    pub fn driver(&self) -> Driver {
        match self {
            Connection::MySql(_) => Driver::MySql,
            Connection::Sqlite(_) => Driver::Sqlite,
        }
    }

    async fn ping(&self) -> std::result::Result<(), sqlx::Error> {
        match self {
            Connection::MySql(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
            Connection::Sqlite(pool) => sqlx::query("SELECT 1").execute(pool).await.map(|_| ()),
        }
    }
}

impl From<MySqlPool> for Connection {
    fn from(pool: MySqlPool) -> Self {
        Connection::MySql(pool)
    }
}

impl From<SqlitePool> for Connection {
    fn from(pool: SqlitePool) -> Self {
        Connection::Sqlite(pool)
    }
}
