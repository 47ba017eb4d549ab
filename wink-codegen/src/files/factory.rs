use std::path::{Path, PathBuf};

use wink_core::{CastCategory, Column, GeneratedFile, SemanticType};

use super::{php_header, php_string};
use crate::ArtifactSpec;

/// Test-data factory for a table's model
pub struct FactoryFile {
    spec: ArtifactSpec,
}

impl FactoryFile {
    pub fn new(spec: ArtifactSpec) -> Self {
        Self { spec }
    }
}

/// Faker expression producing sample data for a column.
///
/// Text and identifier types are recognized by their base keyword, the rest
/// by cast and then semantic type. Columns of unknown type get `null`.
pub fn faker_for(column: &Column) -> &'static str {
    match column.base_type().as_str() {
        "text" | "mediumtext" | "longtext" => return "fake()->paragraph()",
        "uuid" => return "fake()->uuid()",
        "time" => return "fake()->time()",
        _ => {}
    }

    match column.cast {
        Some(CastCategory::Date) => return "fake()->date()",
        Some(CastCategory::DateTime | CastCategory::Timestamp) => return "fake()->dateTime()",
        Some(CastCategory::Decimal | CastCategory::Float) => return "fake()->randomFloat()",
        Some(CastCategory::Json) => return "fake()->json()",
        _ => {}
    }

    match column.semantic_type {
        SemanticType::Boolean => "fake()->boolean()",
        SemanticType::Integer => "fake()->randomNumber()",
        SemanticType::Float => "fake()->randomFloat()",
        SemanticType::String => "fake()->word()",
        SemanticType::StructuredData => "fake()->json()",
        SemanticType::Unknown => "null",
    }
}

impl GeneratedFile for FactoryFile {
    fn path(&self, base: &Path) -> PathBuf {
        self.spec.path(base)
    }

    fn render(&self) -> String {
        let spec = &self.spec;

        php_header(&spec.namespace())
            .line(&format!("use {};", spec.model_class()))
            .line("use Illuminate\\Database\\Eloquent\\Factories\\Factory;")
            .blank()
            .braced(
                &format!("class {} extends Factory", spec.artifact_class()),
                |b| {
                    b.line(&format!("protected $model = {}::class;", spec.class_name))
                        .blank()
                        .braced("public function definition(): array", |b| {
                            b.when(spec.columns.is_empty(), |b| b.line("return [];"))
                                .when(!spec.columns.is_empty(), |b| {
                                    b.block_with_close("return [", "];", |b| {
                                        b.each(&spec.columns, |b, column| {
                                            b.line(&format!(
                                                "{} => {},",
                                                php_string(&column.name),
                                                faker_for(column)
                                            ))
                                        })
                                    })
                                })
                        })
                },
            )
            .build()
    }
}
