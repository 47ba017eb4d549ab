//! Core utilities and types for the wink generator.
//!
//! This crate provides the backend-independent column model, the raw type
//! mapper and the naming rules shared by the schema readers and the
//! artifact generators.

mod column;
mod file;
mod naming;
mod type_mapper;

pub use column::Column;
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming rules
pub use naming::{
    AUDIT_COLUMNS, PRIMARY_KEY, class_name, namespace_from_directory, namespace_from_path,
    route_name,
};
pub use type_mapper::{
    CastCategory, PhpTypeMapper, SemanticType, TypeMapper, base_keyword, map_column_type,
};
