//! Per-table artifact descriptions and the output layout they share.

use std::path::{Path, PathBuf};

use wink_core::{Column, class_name, namespace_from_directory, namespace_from_path};
use wink_manifest::GeneratorConfig;

/// Directory used under each root when none is given.
pub const DEFAULT_DIRECTORY: &str = "Generated";

/// Kind of artifact generated for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Model,
    Factory,
    Policy,
    Controller(ControllerStyle),
}

impl ArtifactKind {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "Model",
            ArtifactKind::Factory => "Factory",
            ArtifactKind::Policy => "Policy",
            ArtifactKind::Controller(_) => "Controller",
        }
    }

    /// Suffix appended to the class name
    pub fn class_suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "",
            ArtifactKind::Factory => "Factory",
            ArtifactKind::Policy => "Policy",
            ArtifactKind::Controller(_) => "Controller",
        }
    }
}

/// Controller flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerStyle {
    /// Empty controller with a placeholder comment
    #[default]
    Bare,
    /// CRUD controller paired with a resource route
    Resource,
}

/// Root paths of each artifact kind plus the directory placed under each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub models_path: String,
    pub factories_path: String,
    pub policies_path: String,
    pub controllers_path: String,
    pub directory: String,
}

impl OutputLayout {
    pub fn new(config: &GeneratorConfig, directory: impl Into<String>) -> Self {
        Self {
            models_path: config.models_path.clone(),
            factories_path: config.factories_path.clone(),
            policies_path: config.policies_path.clone(),
            controllers_path: config.controllers_path.clone(),
            directory: directory.into(),
        }
    }

    fn root(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Model => &self.models_path,
            ArtifactKind::Factory => &self.factories_path,
            ArtifactKind::Policy => &self.policies_path,
            ArtifactKind::Controller(_) => &self.controllers_path,
        }
    }

    /// Namespace of an artifact kind (e.g., `App\Models\Generated`)
    pub fn namespace(&self, kind: ArtifactKind) -> String {
        join_namespace(
            &namespace_from_path(self.root(kind)),
            &namespace_from_directory(&self.directory),
        )
    }

    /// Namespace of the framework base controller
    pub fn base_controller(&self) -> String {
        join_namespace(&namespace_from_path(&self.controllers_path), "Controller")
    }

    /// Output directory of an artifact kind, relative to `base`
    pub fn directory_path(&self, base: &Path, kind: ArtifactKind) -> PathBuf {
        let mut path = base.join(self.root(kind));
        for segment in self
            .directory
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
        {
            path.push(segment);
        }
        path
    }

    /// Location of the accumulated resource routes
    pub fn routes_path(&self, base: &Path) -> PathBuf {
        self.directory_path(base, ArtifactKind::Model)
            .join("GeneratedRoutes.php")
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default(), DEFAULT_DIRECTORY)
    }
}

fn join_namespace(root: &str, suffix: &str) -> String {
    match (root.is_empty(), suffix.is_empty()) {
        (_, true) => root.to_string(),
        (true, false) => suffix.to_string(),
        (false, false) => format!("{}\\{}", root, suffix),
    }
}

/// Everything a renderer needs to produce one artifact for one table.
///
/// Built and consumed per table. All kinds for a table share the class name
/// and layout, which keeps cross references between artifacts consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub table: String,
    /// Connection name embedded in the model
    pub connection: String,
    pub class_name: String,
    pub layout: OutputLayout,
    /// Columns in backend order
    pub columns: Vec<Column>,
}

impl ArtifactSpec {
    pub fn new(
        kind: ArtifactKind,
        table: impl Into<String>,
        connection: impl Into<String>,
        layout: OutputLayout,
        columns: Vec<Column>,
    ) -> Self {
        let table = table.into();
        Self {
            kind,
            class_name: class_name(&table),
            table,
            connection: connection.into(),
            layout,
            columns,
        }
    }

    /// Namespace of this artifact
    pub fn namespace(&self) -> String {
        self.layout.namespace(self.kind)
    }

    /// Namespace of the table's model, referenced by the other kinds
    pub fn model_namespace(&self) -> String {
        self.layout.namespace(ArtifactKind::Model)
    }

    /// Fully qualified model class
    pub fn model_class(&self) -> String {
        format!("{}\\{}", self.model_namespace(), self.class_name)
    }

    /// Class name of this artifact (e.g., `PostFactory`)
    pub fn artifact_class(&self) -> String {
        format!("{}{}", self.class_name, self.kind.class_suffix())
    }

    /// File path of this artifact under `base`
    pub fn path(&self, base: &Path) -> PathBuf {
        self.layout
            .directory_path(base, self.kind)
            .join(format!("{}.php", self.artifact_class()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ArtifactKind) -> ArtifactSpec {
        ArtifactSpec::new(kind, "post_tags", "app", OutputLayout::default(), vec![])
    }

    #[test]
    fn test_default_namespaces() {
        let layout = OutputLayout::default();

        assert_eq!(layout.namespace(ArtifactKind::Model), "App\\Models\\Generated");
        assert_eq!(
            layout.namespace(ArtifactKind::Factory),
            "Database\\Factories\\Generated"
        );
        assert_eq!(layout.namespace(ArtifactKind::Policy), "App\\Policies\\Generated");
        assert_eq!(
            layout.namespace(ArtifactKind::Controller(ControllerStyle::Resource)),
            "App\\Http\\Controllers\\Generated"
        );
        assert_eq!(layout.base_controller(), "App\\Http\\Controllers\\Controller");
    }

    #[test]
    fn test_nested_directory() {
        let layout = OutputLayout::new(&GeneratorConfig::default(), "Blog/Admin");

        assert_eq!(layout.namespace(ArtifactKind::Model), "App\\Models\\Blog\\Admin");
        assert_eq!(
            layout.directory_path(Path::new("/srv/app"), ArtifactKind::Policy),
            PathBuf::from("/srv/app/app/Policies/Blog/Admin")
        );
    }

    #[test]
    fn test_empty_directory() {
        let layout = OutputLayout::new(&GeneratorConfig::default(), "");

        assert_eq!(layout.namespace(ArtifactKind::Model), "App\\Models");
        assert_eq!(
            layout.directory_path(Path::new("."), ArtifactKind::Model),
            PathBuf::from("./app/Models")
        );
    }

    #[test]
    fn test_paths_per_kind() {
        let base = Path::new("/srv/app");

        assert_eq!(
            spec(ArtifactKind::Model).path(base),
            PathBuf::from("/srv/app/app/Models/Generated/PostTag.php")
        );
        assert_eq!(
            spec(ArtifactKind::Factory).path(base),
            PathBuf::from("/srv/app/database/factories/Generated/PostTagFactory.php")
        );
        assert_eq!(
            spec(ArtifactKind::Policy).path(base),
            PathBuf::from("/srv/app/app/Policies/Generated/PostTagPolicy.php")
        );
        assert_eq!(
            spec(ArtifactKind::Controller(ControllerStyle::Bare)).path(base),
            PathBuf::from("/srv/app/app/Http/Controllers/Generated/PostTagController.php")
        );
        assert_eq!(
            OutputLayout::default().routes_path(base),
            PathBuf::from("/srv/app/app/Models/Generated/GeneratedRoutes.php")
        );
    }

    #[test]
    fn test_kinds_share_class_name() {
        let kinds = [
            ArtifactKind::Model,
            ArtifactKind::Factory,
            ArtifactKind::Policy,
            ArtifactKind::Controller(ControllerStyle::Resource),
        ];

        for kind in kinds {
            let spec = spec(kind);
            assert_eq!(spec.class_name, "PostTag");
            assert_eq!(spec.model_class(), "App\\Models\\Generated\\PostTag");
        }
    }
}
