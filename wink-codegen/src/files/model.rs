use std::path::{Path, PathBuf};

use wink_core::{AUDIT_COLUMNS, Column, GeneratedFile, PRIMARY_KEY, PhpTypeMapper, TypeMapper};

use super::{php_header, php_string};
use crate::ArtifactSpec;

/// Eloquent model for a table
pub struct ModelFile {
    spec: ArtifactSpec,
}

impl ModelFile {
    pub fn new(spec: ArtifactSpec) -> Self {
        Self { spec }
    }
}

/// Columns assignable in bulk: all but the primary key and audit timestamps
pub fn fillable(columns: &[Column]) -> Vec<&str> {
    columns
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| *name != PRIMARY_KEY && !AUDIT_COLUMNS.contains(name))
        .collect()
}

/// `(column, cast)` pairs for every non-key column with a cast
pub fn casts(columns: &[Column]) -> Vec<(&str, &'static str)> {
    columns
        .iter()
        .filter(|c| c.name != PRIMARY_KEY)
        .filter_map(|c| c.cast.map(|cast| (c.name.as_str(), cast.as_str())))
        .collect()
}

impl GeneratedFile for ModelFile {
    fn path(&self, base: &Path) -> PathBuf {
        self.spec.path(base)
    }

    fn render(&self) -> String {
        let spec = &self.spec;
        let mapper = PhpTypeMapper;

        let properties = spec.columns.iter().map(|c| {
            format!(
                "@property {} ${}",
                mapper.map_semantic_type(c.semantic_type),
                c.name
            )
        });

        let fillable = fillable(&spec.columns)
            .iter()
            .map(|name| php_string(name))
            .collect::<Vec<_>>()
            .join(", ");
        let casts = casts(&spec.columns);

        php_header(&spec.namespace())
            .line("use Illuminate\\Database\\Eloquent\\Model;")
            .blank()
            .doc_block(properties)
            .braced(&format!("class {} extends Model", spec.class_name), |b| {
                b.line(&format!(
                    "protected $connection = {};",
                    php_string(&spec.connection)
                ))
                .line(&format!("protected $table = {};", php_string(&spec.table)))
                .line(&format!("protected $fillable = [{}];", fillable))
                .when(casts.is_empty(), |b| b.line("protected $casts = [];"))
                .when(!casts.is_empty(), |b| {
                    b.block_with_close("protected $casts = [", "];", |b| {
                        b.each(&casts, |b, (name, cast)| {
                            b.line(&format!("{} => '{}',", php_string(name), cast))
                        })
                    })
                })
            })
            .build()
    }
}
