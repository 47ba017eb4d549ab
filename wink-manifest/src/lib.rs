//! Configuration for the wink generator.
//!
//! A `wink.toml` file names the database connections the generator may
//! introspect and the conventions it writes artifacts with: root paths for
//! each artifact kind and the tables that are never generated.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod parse;
mod template;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ConnectionConfig, DEFAULT_EXCLUDED_TABLES, DatabaseConfig, GeneratorConfig, Manifest,
};
pub use parse::parse_manifest;
pub use template::{DEFAULT_FILENAME, default_manifest};
