//! Manifest types for wink.toml files.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Error, Result};

/// Framework-internal tables skipped when no exclusion list is configured.
pub const DEFAULT_EXCLUDED_TABLES: &[&str] = &[
    "migrations",
    "failed_jobs",
    "password_resets",
    "cache",
    "cache_locks",
    "sessions",
    "personal_access_tokens",
    "telescope_entries",
    "telescope_entries_tags",
    "telescope_monitoring",
];

/// Root manifest for wink.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Database connections available for introspection
    pub database: DatabaseConfig,

    /// Output conventions
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Manifest {
    /// Look up a connection by name, falling back to the configured default.
    ///
    /// Returns the resolved name together with its configuration.
    pub fn connection<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> Option<(&'a str, &'a ConnectionConfig)> {
        let name = name.unwrap_or(&self.database.default);
        self.database
            .connections
            .get(name)
            .map(|config| (name, config))
    }

    /// Names of all configured connections, sorted.
    pub fn connection_names(&self) -> Vec<String> {
        self.database.connections.keys().cloned().collect()
    }
}

/// The `[database]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection used when none is selected explicitly
    pub default: String,

    #[serde(default)]
    pub connections: BTreeMap<String, ConnectionConfig>,
}

/// A `[database.connections.<name>]` entry
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Driver identifier, e.g. "mysql" or "sqlite"
    pub driver: String,

    /// Connection URL (takes precedence over `env`)
    pub url: Option<String>,

    /// Environment variable holding the connection URL
    pub env: Option<String>,
}

impl ConnectionConfig {
    /// Resolve the connection URL, reading `env` through `lookup` when no
    /// literal `url` is configured.
    pub fn resolve_url<F>(&self, connection: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        // Validation guarantees one of `url` or `env` is present
        let var = self.env.as_deref().unwrap_or("DATABASE_URL");
        lookup(var).ok_or_else(|| {
            Box::new(Error::MissingEnv {
                connection: connection.to_string(),
                var: var.to_string(),
            })
        })
    }
}

/// The `[generator]` section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Tables never generated, regardless of backend
    pub excluded_tables: Vec<String>,

    /// Root path for models (relative to the project root)
    pub models_path: String,

    /// Root path for factories
    pub factories_path: String,

    /// Root path for policies
    pub policies_path: String,

    /// Root path for controllers
    pub controllers_path: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            excluded_tables: DEFAULT_EXCLUDED_TABLES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            models_path: "app/Models".to_string(),
            factories_path: "database/factories".to_string(),
            policies_path: "app/Policies".to_string(),
            controllers_path: "app/Http/Controllers".to_string(),
        }
    }
}
