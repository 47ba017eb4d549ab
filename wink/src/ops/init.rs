//! Init operation - write a default wink.toml.

use std::path::{Path, PathBuf};

use eyre::Result;
use wink_core::{FileRules, GeneratedFile};
use wink_manifest::default_manifest;

use crate::reports::InitReport;

/// Default configuration file
pub struct ManifestFile {
    path: PathBuf,
    driver: String,
    url: String,
    force: bool,
}

impl ManifestFile {
    pub fn new(path: impl Into<PathBuf>, driver: &str, url: &str, force: bool) -> Self {
        Self {
            path: path.into(),
            driver: driver.to_string(),
            url: url.to_string(),
            force,
        }
    }
}

impl GeneratedFile for ManifestFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        if self.force {
            FileRules::always_overwrite()
        } else {
            FileRules::if_missing()
        }
    }

    fn render(&self) -> String {
        default_manifest(&self.driver, &self.url)
    }
}

/// Conventional connection URL for a driver in a fresh Laravel project
pub fn default_url(driver: &str) -> &'static str {
    match driver {
        "mysql" => "mysql://root@127.0.0.1:3306/laravel",
        _ => "sqlite://database/database.sqlite",
    }
}

/// Execute the init operation.
pub fn init(base: &Path, file: &ManifestFile) -> Result<InitReport> {
    let result = file.write(base)?;

    Ok(InitReport {
        path: file.path(base),
        result,
    })
}
