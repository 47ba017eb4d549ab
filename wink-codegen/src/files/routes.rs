use std::path::{Path, PathBuf};

use wink_core::{GeneratedFile, route_name};

use super::php_string;
use crate::{ArtifactKind, ArtifactSpec, CodeBuilder, ControllerStyle, OutputLayout};

/// One `Route::resource` registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Kebab-cased plural route name
    pub name: String,
    /// Fully qualified controller class
    pub controller: String,
}

impl RouteEntry {
    /// Registration for a table's resource controller
    pub fn for_spec(spec: &ArtifactSpec) -> Self {
        let controller_namespace = spec
            .layout
            .namespace(ArtifactKind::Controller(ControllerStyle::Resource));
        Self {
            name: route_name(&spec.class_name),
            controller: format!("{}\\{}Controller", controller_namespace, spec.class_name),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Route::resource({}, \\{}::class);",
            php_string(&self.name),
            self.controller
        )
    }
}

/// Resource routes accumulated over a run, written once at the end
pub struct RoutesFile {
    layout: OutputLayout,
    entries: Vec<RouteEntry>,
}

impl RoutesFile {
    pub fn new(layout: OutputLayout) -> Self {
        Self {
            layout,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: RouteEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl GeneratedFile for RoutesFile {
    fn path(&self, base: &Path) -> PathBuf {
        self.layout.routes_path(base)
    }

    fn render(&self) -> String {
        CodeBuilder::php()
            .line("<?php")
            .blank()
            .line("use Illuminate\\Support\\Facades\\Route;")
            .blank()
            .each(&self.entries, |b, entry| b.line(&entry.render()))
            .build()
    }
}
