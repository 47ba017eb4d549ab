//! Generate operation - artifacts from a live database schema.

use std::path::Path;

use eyre::{Context, Result};
use tracing::info;
use wink_codegen::{ControllerStyle, GenerateOptions as ArtifactOptions, Generator, OutputLayout};
use wink_manifest::Manifest;

use crate::{
    ops::{ConnectionTarget, open_reader},
    reports::{GenerateReport, GenerationOutcome},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Connection to introspect, or the configured default.
    pub connection: Option<&'a str>,
    /// Directory placed under each artifact root.
    pub directory: &'a str,
    /// Project root the artifact roots are relative to.
    pub base: &'a Path,
    pub factories: bool,
    pub policies: bool,
    pub controllers: bool,
    /// Resource controllers and routes; implies `controllers`.
    pub resource: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

impl GenerateOptions<'_> {
    fn controller_style(&self) -> Option<ControllerStyle> {
        if self.resource {
            Some(ControllerStyle::Resource)
        } else if self.controllers {
            Some(ControllerStyle::Bare)
        } else {
            None
        }
    }
}

/// Execute the generate operation.
pub async fn generate(manifest: &Manifest, opts: GenerateOptions<'_>) -> Result<GenerateReport> {
    let target = ConnectionTarget::resolve(manifest, opts.connection, |var| {
        std::env::var(var).ok()
    })?;
    let reader = open_reader(&target).await?;

    let options = ArtifactOptions {
        connection: target.name.clone(),
        layout: OutputLayout::new(&manifest.generator, opts.directory),
        factories: opts.factories,
        policies: opts.policies,
        controllers: opts.controller_style(),
        excluded_tables: manifest.generator.excluded_tables.clone(),
    };
    let generator = Generator::new(reader.as_ref(), options);

    let outcome = if opts.dry_run {
        let preview = generator
            .preview(opts.base)
            .await
            .wrap_err("Failed to render artifacts")?;
        GenerationOutcome::Preview {
            tables: preview.tables,
            files: preview.files,
        }
    } else {
        let result = generator
            .generate(opts.base)
            .await
            .wrap_err("Failed to generate artifacts")?;
        info!(
            tables = result.tables.len(),
            files = result.files.len(),
            "generation finished"
        );
        GenerationOutcome::Written(result)
    };

    Ok(GenerateReport {
        connection: target.name,
        driver: target.driver,
        outcome,
    })
}
