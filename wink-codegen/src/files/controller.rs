use std::path::{Path, PathBuf};

use wink_core::GeneratedFile;

use super::php_header;
use crate::{ArtifactKind, ArtifactSpec, CodeBuilder, ControllerStyle};

/// HTTP controller for a table's model
pub struct ControllerFile {
    spec: ArtifactSpec,
}

impl ControllerFile {
    pub fn new(spec: ArtifactSpec) -> Self {
        Self { spec }
    }

    fn style(&self) -> ControllerStyle {
        match self.spec.kind {
            ArtifactKind::Controller(style) => style,
            _ => ControllerStyle::Bare,
        }
    }

    fn resource_methods(&self, builder: CodeBuilder) -> CodeBuilder {
        let class = &self.spec.class_name;

        builder
            .braced("public function index()", |b| {
                b.line(&format!("return {}::all();", class))
            })
            .blank()
            .braced("public function store(Request $request)", |b| {
                b.line(&format!("return {}::create($request->all());", class))
            })
            .blank()
            .braced(&format!("public function show({} $model)", class), |b| {
                b.line("return $model;")
            })
            .blank()
            .braced(
                &format!("public function update(Request $request, {} $model)", class),
                |b| b.line("$model->update($request->all());").line("return $model;"),
            )
            .blank()
            .braced(&format!("public function destroy({} $model)", class), |b| {
                b.line("$model->delete();")
                    .line("return response()->noContent();")
            })
    }
}

impl GeneratedFile for ControllerFile {
    fn path(&self, base: &Path) -> PathBuf {
        self.spec.path(base)
    }

    fn render(&self) -> String {
        let spec = &self.spec;
        let resource = self.style() == ControllerStyle::Resource;

        php_header(&spec.namespace())
            .line(&format!("use {};", spec.layout.base_controller()))
            .line(&format!("use {};", spec.model_class()))
            .when(resource, |b| b.line("use Illuminate\\Http\\Request;"))
            .blank()
            .braced(
                &format!("class {} extends Controller", spec.artifact_class()),
                |b| {
                    if resource {
                        self.resource_methods(b)
                    } else {
                        b.line("// Add your controller methods here")
                    }
                },
            )
            .build()
    }
}
