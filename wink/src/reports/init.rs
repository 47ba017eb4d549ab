//! Init command report data structures.

use std::path::PathBuf;

use wink_core::WriteResult;

use super::output::{Output, Report};

/// Report data from writing the default configuration.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the configuration file.
    pub path: PathBuf,
    /// Whether the file was written or left alone.
    pub result: WriteResult,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display().to_string();
        match self.result {
            WriteResult::Written => {
                out.added_item(&path);
                out.newline();
                out.preformatted("Next steps:");
                out.preformatted("  edit the connection URL, then run `wink tables`");
            }
            WriteResult::Skipped => {
                out.skipped_item(&path);
                out.warning(&format!("{} already exists; pass --force to overwrite", path));
            }
        }
    }
}
