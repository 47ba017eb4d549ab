use crate::type_mapper::{CastCategory, SemanticType, base_keyword, map_column_type};

/// A table column as reported by a schema reader.
///
/// The semantic type and cast are derived from `raw_type` on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Backend-native type string, e.g. `varchar(255)` or `integer`
    pub raw_type: String,
    pub semantic_type: SemanticType,
    pub cast: Option<CastCategory>,
}

impl Column {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        let raw_type = raw_type.into();
        let (semantic_type, cast) = map_column_type(&raw_type);
        Self {
            name: name.into(),
            raw_type,
            semantic_type,
            cast,
        }
    }

    /// Lower-cased base keyword of the raw type
    pub fn base_type(&self) -> String {
        base_keyword(&self.raw_type)
    }
}
