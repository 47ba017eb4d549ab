//! Default wink.toml written by `wink init`.

use crate::DEFAULT_EXCLUDED_TABLES;

/// Conventional manifest filename
pub const DEFAULT_FILENAME: &str = "wink.toml";

/// Render a default manifest for the given driver and connection URL.
pub fn default_manifest(driver: &str, url: &str) -> String {
    let excluded = DEFAULT_EXCLUDED_TABLES
        .iter()
        .map(|t| format!("    \"{}\",", t))
        .collect::<Vec<_>>()
        .join("\n");

    let driver = toml_string(driver);
    let url = toml_string(url);

    format!(
        r#"[database]
default = "app"

[database.connections.app]
driver = {driver}
url = {url}
# env = "DATABASE_URL"

[generator]
# Tables that are never generated
excluded_tables = [
{excluded}
]
models_path = "app/Models"
factories_path = "database/factories"
policies_path = "app/Policies"
controllers_path = "app/Http/Controllers"
"#
    )
}

/// Quoted TOML string with any escaping the value needs
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
