//! Naming rules shared by every generated artifact.
//!
//! All artifacts for a table derive their names from these functions, which
//! keeps class references between generated files consistent.

use inflector::Inflector;

/// Conventional primary key column
pub const PRIMARY_KEY: &str = "id";

/// Audit timestamp columns maintained by the framework
pub const AUDIT_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

/// Class name for a table (e.g., "post_tags" -> "PostTag")
pub fn class_name(table: &str) -> String {
    table.to_singular().to_pascal_case()
}

/// Resource route name for a class (e.g., "PostTag" -> "post-tags")
pub fn route_name(class_name: &str) -> String {
    class_name.to_snake_case().to_plural().to_kebab_case()
}

/// Namespace suffix for an output directory (e.g., "Blog/Admin" -> "Blog\Admin")
pub fn namespace_from_directory(directory: &str) -> String {
    segments(directory).collect::<Vec<_>>().join("\\")
}

/// Root namespace for a project-relative path (e.g., "app/Http/Controllers" -> "App\Http\Controllers")
pub fn namespace_from_path(path: &str) -> String {
    segments(path).map(upper_first).collect::<Vec<_>>().join("\\")
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty() && *s != ".")
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
