use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wink_manifest::DEFAULT_FILENAME;

use crate::{
    ops::{
        self,
        init::{ManifestFile, default_url},
    },
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Database driver of the default connection
    #[arg(long, default_value = "sqlite", value_parser = ["mysql", "sqlite"])]
    pub driver: String,

    /// Connection URL (defaults to a conventional URL for the driver)
    #[arg(long)]
    pub url: Option<String>,

    /// Directory to write wink.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing wink.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let url = self
            .url
            .as_deref()
            .unwrap_or_else(|| default_url(&self.driver));
        let file = ManifestFile::new(DEFAULT_FILENAME, &self.driver, url, self.force);

        let report = ops::init(&self.output, &file)?;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
