use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Find the span of the first quoted or bare occurrence of `needle`.
    pub fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        let quoted = format!("\"{}\"", needle);
        self.src
            .find(&quoted)
            .map(|offset| SourceSpan::from((offset, quoted.len())))
            .or_else(|| {
                self.src
                    .find(needle)
                    .map(|offset| SourceSpan::from((offset, needle.len())))
            })
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_span(needle),
            message: message.into(),
        })
    }

    /// Create an unknown default connection error.
    pub fn unknown_connection_error(&self, name: &str, available: Vec<String>) -> Box<Error> {
        Box::new(Error::UnknownConnection {
            src: self.named_source(),
            span: self.find_span(name),
            name: name.to_string(),
            available: available.join(", "),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'wink init' to create a default configuration"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse wink.toml")]
    #[diagnostic(code(wink::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown connection '{name}'")]
    #[diagnostic(
        code(wink::unknown_connection),
        help("declare it under [database.connections.{name}]; configured: {available}")
    )]
    UnknownConnection {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a configured connection")]
        span: Option<SourceSpan>,
        name: String,
        available: String,
    },

    #[error("{message}")]
    #[diagnostic(code(wink::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("environment variable '{var}' for connection '{connection}' is not set")]
    #[diagnostic(
        code(wink::missing_env),
        help("export {var} or set `url` on the connection")
    )]
    MissingEnv { connection: String, var: String },
}
