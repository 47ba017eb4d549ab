//! Mapping between raw column types and backend-independent types.

/// Backend-independent data category of a column.
///
/// Unrecognized raw types map to [`SemanticType::Unknown`]; mapping never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Integer,
    Float,
    Boolean,
    String,
    StructuredData,
    Unknown,
}

impl SemanticType {
    /// Get the semantic type name
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Integer => "integer",
            SemanticType::Float => "float",
            SemanticType::Boolean => "boolean",
            SemanticType::String => "string",
            SemanticType::StructuredData => "structured-data",
            SemanticType::Unknown => "unknown",
        }
    }
}

/// Serialization hint applied at the application boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastCategory {
    Integer,
    Decimal,
    Float,
    Boolean,
    DateTime,
    Date,
    Timestamp,
    Json,
}

impl CastCategory {
    /// Get the cast name as written into a model's cast map
    pub fn as_str(&self) -> &'static str {
        match self {
            CastCategory::Integer => "integer",
            CastCategory::Decimal => "decimal",
            CastCategory::Float => "float",
            CastCategory::Boolean => "boolean",
            CastCategory::DateTime => "datetime",
            CastCategory::Date => "date",
            CastCategory::Timestamp => "timestamp",
            CastCategory::Json => "json",
        }
    }
}

/// Extract the lower-cased base keyword of a raw type.
///
/// The base keyword is the leading run of ASCII letters, so precision and
/// length suffixes are dropped: `"DECIMAL(8,2)"` becomes `"decimal"` and
/// `"int unsigned"` becomes `"int"`.
pub fn base_keyword(raw_type: &str) -> String {
    raw_type
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Map a raw, driver-reported column type to its semantic type and cast.
pub fn map_column_type(raw_type: &str) -> (SemanticType, Option<CastCategory>) {
    match base_keyword(raw_type).as_str() {
        "bigint" | "int" | "integer" | "smallint" | "tinyint" => {
            (SemanticType::Integer, Some(CastCategory::Integer))
        }
        "decimal" => (SemanticType::Float, Some(CastCategory::Decimal)),
        "float" | "double" => (SemanticType::Float, Some(CastCategory::Float)),
        "boolean" => (SemanticType::Boolean, Some(CastCategory::Boolean)),
        "datetime" | "time" => (SemanticType::String, Some(CastCategory::DateTime)),
        "date" => (SemanticType::String, Some(CastCategory::Date)),
        "timestamp" => (SemanticType::String, Some(CastCategory::Timestamp)),
        "json" => (SemanticType::StructuredData, Some(CastCategory::Json)),
        "text" | "string" | "varchar" | "char" | "uuid" => (SemanticType::String, None),
        _ => (SemanticType::Unknown, None),
    }
}

/// Trait for mapping semantic types to language-specific type strings.
///
/// Implement this trait for each target language to provide type mappings.
pub trait TypeMapper {
    /// Map a semantic type to a language-specific type string
    fn map_semantic_type(&self, semantic_type: SemanticType) -> &'static str;
}

/// PHP type mapper used for model property annotations
pub struct PhpTypeMapper;

impl TypeMapper for PhpTypeMapper {
    fn map_semantic_type(&self, semantic_type: SemanticType) -> &'static str {
        match semantic_type {
            SemanticType::Integer => "int",
            SemanticType::Float => "float",
            SemanticType::Boolean => "bool",
            SemanticType::String => "string",
            SemanticType::StructuredData => "array",
            SemanticType::Unknown => "mixed",
        }
    }
}
