use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wink_codegen::DEFAULT_DIRECTORY;
use wink_manifest::Manifest;

use super::{UnwrapOrExit, block_on};
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Connection to introspect (defaults to the configured default)
    #[arg(long)]
    pub connection: Option<String>,

    /// Directory placed under each artifact root
    #[arg(short, long, default_value = DEFAULT_DIRECTORY)]
    pub directory: String,

    /// Generate factories for the models
    #[arg(long)]
    pub factories: bool,

    /// Generate policies for the models
    #[arg(long)]
    pub policies: bool,

    /// Generate controllers for the models
    #[arg(long)]
    pub controllers: bool,

    /// Generate resource controllers and routes (implies --controllers)
    #[arg(long)]
    pub resource: bool,

    /// Path to wink.toml
    #[arg(short, long, default_value = "wink.toml")]
    pub config: PathBuf,

    /// Project root the artifact paths are relative to
    #[arg(short, long, default_value = ".")]
    pub base: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let opts = GenerateOptions {
            connection: self.connection.as_deref(),
            directory: &self.directory,
            base: &self.base,
            factories: self.factories,
            policies: self.policies,
            controllers: self.controllers,
            resource: self.resource,
            dry_run: self.dry_run,
        };
        let report = block_on(ops::generate(&manifest, opts))??;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
