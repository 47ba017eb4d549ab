use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wink_manifest::Manifest;

use super::{UnwrapOrExit, block_on};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TablesCommand {
    /// Connection to introspect (defaults to the configured default)
    #[arg(long)]
    pub connection: Option<String>,

    /// Path to wink.toml
    #[arg(short, long, default_value = "wink.toml")]
    pub config: PathBuf,
}

impl TablesCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        let report = block_on(ops::tables(&manifest, self.connection.as_deref()))??;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
