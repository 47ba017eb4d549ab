//! Schema introspection for the wink generator.
//!
//! A [`SchemaReader`] lists the tables of a database and the columns of each
//! table, normalized into [`wink_core::Column`] values. One reader exists per
//! supported backend; [`SchemaReaderFactory`] picks the reader for a driver
//! identifier and an established [`Connection`].

mod connection;
mod driver;
mod error;
mod factory;
mod mysql;
mod quote;
mod reader;
mod sqlite;

pub use connection::Connection;
pub use driver::Driver;
pub use error::{Result, SchemaError};
pub use factory::SchemaReaderFactory;
pub use mysql::{MysqlSchemaReader, normalize_mysql_type};
pub use reader::SchemaReader;
pub use sqlite::SqliteSchemaReader;
