//! Generated PHP files.

mod controller;
mod factory;
mod model;
mod policy;
mod routes;

pub use controller::ControllerFile;
pub use factory::{FactoryFile, faker_for};
pub use model::{ModelFile, casts, fillable};
pub use policy::PolicyFile;
pub use routes::{RouteEntry, RoutesFile};

use crate::CodeBuilder;

/// Opening tag and namespace declaration shared by every class file
fn php_header(namespace: &str) -> CodeBuilder {
    CodeBuilder::php()
        .line("<?php")
        .blank()
        .line(&format!("namespace {};", namespace))
        .blank()
}

/// Single-quoted PHP string literal, escaping backslashes and quotes
fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
