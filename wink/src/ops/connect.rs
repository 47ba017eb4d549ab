//! Connection resolution shared by the database-backed commands.

use eyre::{Context, Result, bail};
use tracing::debug;
use wink_manifest::Manifest;
use wink_schema::{Connection, SchemaReader, SchemaReaderFactory};

/// A configured connection with its URL resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub name: String,
    pub driver: String,
    pub url: String,
}

impl ConnectionTarget {
    /// Resolve `name` (or the default connection) from the manifest, reading
    /// environment-backed URLs through `lookup`.
    pub fn resolve<F>(manifest: &Manifest, name: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some((name, config)) = manifest.connection(name) else {
            bail!(
                "unknown connection '{}' (configured: {})",
                name.unwrap_or_default(),
                manifest.connection_names().join(", ")
            );
        };

        let url = config.resolve_url(name, lookup)?;

        Ok(Self {
            name: name.to_string(),
            driver: config.driver.clone(),
            url,
        })
    }
}

/// Connect and build the schema reader for a target.
///
/// Nothing is introspected when the database is unreachable.
pub async fn open_reader(target: &ConnectionTarget) -> Result<Box<dyn SchemaReader>> {
    debug!(connection = %target.name, driver = %target.driver, "opening connection");

    let connection = Connection::open(&target.driver, &target.url)
        .await
        .wrap_err("could not connect to database")?;

    SchemaReaderFactory::make(&target.driver, &connection).wrap_err("failed to create schema reader")
}
