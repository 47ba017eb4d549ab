//! Laravel artifact generation for the wink generator.
//!
//! Turns the tables reported by a [`wink_schema::SchemaReader`] into PHP
//! source files: an Eloquent model per table and, on request, a factory, a
//! policy and a controller, plus resource route registrations.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware PHP code builder
//! - [`spec`] - Per-table artifact descriptions and output layout
//! - [`files`] - One [`wink_core::GeneratedFile`] per artifact kind
//! - [`generator`] - The orchestrator driving a full run

pub mod builder;
pub mod files;
pub mod generator;
pub mod spec;

pub use builder::CodeBuilder;
pub use generator::{
    GenerateOptions, GenerateResult, Generator, PreviewResult, RenderedFile, WrittenFile,
    filter_tables,
};
pub use spec::{ArtifactKind, ArtifactSpec, ControllerStyle, DEFAULT_DIRECTORY, OutputLayout};
