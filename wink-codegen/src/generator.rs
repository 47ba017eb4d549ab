//! End-to-end generation over every table of a database.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::{debug, info};
use wink_core::{Column, File, GeneratedFile, WriteResult, class_name};
use wink_schema::SchemaReader;

use crate::{
    ArtifactKind, ArtifactSpec, ControllerStyle, OutputLayout,
    files::{ControllerFile, FactoryFile, ModelFile, PolicyFile, RouteEntry, RoutesFile},
};

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Connection name embedded in every model
    pub connection: String,
    pub layout: OutputLayout,
    pub factories: bool,
    pub policies: bool,
    /// Controller flavour, or `None` to skip controllers
    pub controllers: Option<ControllerStyle>,
    /// Tables never generated
    pub excluded_tables: Vec<String>,
}

impl GenerateOptions {
    /// Models only, default layout, nothing excluded
    pub fn new(connection: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            layout: OutputLayout::default(),
            factories: false,
            policies: false,
            controllers: None,
            excluded_tables: Vec::new(),
        }
    }

    /// Whether resource routes are accumulated
    pub fn resource_routes(&self) -> bool {
        self.controllers == Some(ControllerStyle::Resource)
    }
}

/// Drop excluded tables, keeping backend order.
pub fn filter_tables(tables: Vec<String>, excluded: &[String]) -> Vec<String> {
    tables
        .into_iter()
        .filter(|table| !excluded.iter().any(|e| e == table))
        .collect()
}

/// A rendered artifact, before or after it is written
#[derive(Debug, Clone)]
pub struct RenderedFile {
    /// Artifact label (e.g., "Model", "Routes")
    pub label: &'static str,
    /// Class or file name
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

/// A file written by [`Generator::generate`]
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub label: &'static str,
    pub name: String,
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Tables processed, in order
    pub tables: Vec<String>,
    pub files: Vec<WrittenFile>,
}

/// Result of a preview run
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Tables processed, in order
    pub tables: Vec<String>,
    pub files: Vec<RenderedFile>,
}

/// Drives schema introspection and artifact rendering for one connection.
///
/// Tables are processed one at a time, each artifact completing before the
/// next starts. The first failure stops the run; files already written stay.
pub struct Generator<'a> {
    reader: &'a dyn SchemaReader,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(reader: &'a dyn SchemaReader, options: GenerateOptions) -> Self {
        Self { reader, options }
    }

    /// Tables that would be generated, after exclusion
    pub async fn tables(&self) -> Result<Vec<String>> {
        let tables = self
            .reader
            .list_tables()
            .await
            .wrap_err("failed to list tables")?;
        Ok(filter_tables(tables, &self.options.excluded_tables))
    }

    /// Render every artifact without touching the disk
    pub async fn preview(&self, base: &Path) -> Result<PreviewResult> {
        let mut files = Vec::new();
        let tables = self
            .run(base, |file| {
                files.push(file);
                Ok(())
            })
            .await?;
        Ok(PreviewResult { tables, files })
    }

    /// Render and write every artifact under `base`
    pub async fn generate(&self, base: &Path) -> Result<GenerateResult> {
        let mut files = Vec::new();
        let tables = self
            .run(base, |rendered| {
                let result = File::new(&rendered.path, rendered.content).write()?;
                info!(path = %rendered.path.display(), "{} {} written", rendered.label, rendered.name);
                files.push(WrittenFile {
                    label: rendered.label,
                    name: rendered.name,
                    path: rendered.path,
                    result,
                });
                Ok(())
            })
            .await?;

        Ok(GenerateResult { tables, files })
    }

    async fn run<F>(&self, base: &Path, mut sink: F) -> Result<Vec<String>>
    where
        F: FnMut(RenderedFile) -> Result<()>,
    {
        let options = &self.options;
        let tables = self.tables().await?;
        let mut routes = RoutesFile::new(options.layout.clone());

        for table in &tables {
            info!(table = %table, class = %class_name(table), "generating artifacts");

            let columns = self.columns(table).await?;
            let model = self.spec(ArtifactKind::Model, table, columns.clone());
            sink(rendered(&model, &ModelFile::new(model.clone()), base))?;

            if options.factories {
                // Factories read the columns afresh
                let columns = self.columns(table).await?;
                let spec = self.spec(ArtifactKind::Factory, table, columns);
                sink(rendered(&spec, &FactoryFile::new(spec.clone()), base))?;
            }

            if options.policies {
                let spec = self.spec(ArtifactKind::Policy, table, columns.clone());
                sink(rendered(&spec, &PolicyFile::new(spec.clone()), base))?;
            }

            if let Some(style) = options.controllers {
                let spec = self.spec(ArtifactKind::Controller(style), table, columns);
                if style == ControllerStyle::Resource {
                    routes.push(RouteEntry::for_spec(&spec));
                }
                sink(rendered(&spec, &ControllerFile::new(spec.clone()), base))?;
            }
        }

        if options.resource_routes() {
            debug!(routes = routes.entries().len(), "writing resource routes");
            sink(RenderedFile {
                label: "Routes",
                name: "GeneratedRoutes".to_string(),
                path: routes.path(base),
                content: routes.render(),
            })?;
        }

        Ok(tables)
    }

    async fn columns(&self, table: &str) -> Result<Vec<Column>> {
        self.reader
            .list_columns(table)
            .await
            .wrap_err_with(|| format!("failed to read columns of '{}'", table))
    }

    fn spec(&self, kind: ArtifactKind, table: &str, columns: Vec<Column>) -> ArtifactSpec {
        ArtifactSpec::new(
            kind,
            table,
            &self.options.connection,
            self.options.layout.clone(),
            columns,
        )
    }
}

fn rendered(spec: &ArtifactSpec, file: &dyn GeneratedFile, base: &Path) -> RenderedFile {
    RenderedFile {
        label: spec.kind.label(),
        name: spec.artifact_class(),
        path: file.path(base),
        content: file.render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tables: &[&str]) -> Vec<String> {
        tables.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_filter_tables_keeps_order() {
        let tables = names(&["users", "migrations", "posts", "sessions", "comments"]);
        let excluded = names(&["migrations", "sessions"]);

        assert_eq!(
            filter_tables(tables, &excluded),
            names(&["users", "posts", "comments"])
        );
    }

    #[test]
    fn test_filter_tables_exact_match_only() {
        let tables = names(&["migrations_log", "Migrations"]);
        let excluded = names(&["migrations"]);

        assert_eq!(filter_tables(tables.clone(), &excluded), tables);
    }

    #[test]
    fn test_resource_routes() {
        let mut options = GenerateOptions::new("app");
        assert!(!options.resource_routes());

        options.controllers = Some(ControllerStyle::Bare);
        assert!(!options.resource_routes());

        options.controllers = Some(ControllerStyle::Resource);
        assert!(options.resource_routes());
    }
}
