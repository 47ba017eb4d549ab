//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Error, Manifest, Result, SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "wink.toml")
    }
}

impl Manifest {
    /// Parse a wink.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let database = &manifest.database;

    if !database.connections.contains_key(&database.default) {
        return Err(ctx.unknown_connection_error(&database.default, manifest.connection_names()));
    }

    for (name, connection) in &database.connections {
        if connection.driver.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("connection '{}' has an empty driver", name),
                name,
            ));
        }
        if connection.url.is_none() && connection.env.is_none() {
            return Err(ctx.validation_error(
                format!("connection '{}' needs either `url` or `env`", name),
                name,
            ));
        }
    }

    let generator = &manifest.generator;
    for (key, path) in [
        ("models_path", &generator.models_path),
        ("factories_path", &generator.factories_path),
        ("policies_path", &generator.policies_path),
        ("controllers_path", &generator.controllers_path),
    ] {
        if path.trim().is_empty() {
            return Err(ctx.validation_error(format!("`{}` must not be empty", key), key));
        }
        if Path::new(path).is_absolute() {
            return Err(ctx.validation_error(
                format!("`{}` must be relative to the project root", key),
                path,
            ));
        }
    }

    Ok(())
}
