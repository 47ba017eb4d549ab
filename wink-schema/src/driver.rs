use std::{fmt, str::FromStr};

use crate::{
    SchemaError,
    quote::{quote_mysql, quote_sqlite},
};

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    MySql,
    Sqlite,
}

impl Driver {
    /// Driver identifier as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::MySql => "mysql",
            Driver::Sqlite => "sqlite",
        }
    }

    /// Quote an identifier for embedding in this backend's introspection queries
    pub fn quote_identifier(&self, name: &str) -> String {
        match self {
            Driver::MySql => quote_mysql(name),
            Driver::Sqlite => quote_sqlite(name),
        }
    }
}

impl FromStr for Driver {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Driver::MySql),
            "sqlite" => Ok(Driver::Sqlite),
            other => Err(SchemaError::UnsupportedDriver {
                driver: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
