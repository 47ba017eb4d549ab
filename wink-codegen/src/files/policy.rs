use std::path::{Path, PathBuf};

use wink_core::GeneratedFile;

use super::php_header;
use crate::ArtifactSpec;

/// Abilities stubbed in every policy, with their parameter lists
const ABILITIES: [(&str, &str); 5] = [
    ("viewAny", "$user"),
    ("view", "$user, $model"),
    ("create", "$user"),
    ("update", "$user, $model"),
    ("delete", "$user, $model"),
];

/// Permissive authorization policy placeholder
pub struct PolicyFile {
    spec: ArtifactSpec,
}

impl PolicyFile {
    pub fn new(spec: ArtifactSpec) -> Self {
        Self { spec }
    }
}

impl GeneratedFile for PolicyFile {
    fn path(&self, base: &Path) -> PathBuf {
        self.spec.path(base)
    }

    fn render(&self) -> String {
        php_header(&self.spec.namespace())
            .line("use Illuminate\\Auth\\Access\\HandlesAuthorization;")
            .blank()
            .braced(&format!("class {}", self.spec.artifact_class()), |b| {
                b.line("use HandlesAuthorization;")
                    .blank()
                    .each_separated(ABILITIES, |b, (name, params)| {
                        b.braced(&format!("public function {}({})", name, params), |b| {
                            b.line("return true;")
                        })
                    })
            })
            .build()
    }
}
