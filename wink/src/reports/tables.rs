//! Tables command report data structures.

use super::output::{Output, Report};

/// Report data listing the tables a run would generate.
#[derive(Debug)]
pub struct TablesReport {
    /// Connection name.
    pub connection: String,
    /// Driver identifier of the connection.
    pub driver: String,
    /// Tables after exclusion, in backend order.
    pub tables: Vec<TableEntry>,
    /// Number of tables skipped by configuration.
    pub excluded: usize,
}

/// A table and the class generated for it.
#[derive(Debug)]
pub struct TableEntry {
    pub table: String,
    pub class_name: String,
}

impl Report for TablesReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value(
            "Connection",
            &format!("{} ({})", self.connection, self.driver),
        );
        out.newline();

        if self.tables.is_empty() {
            out.warning("no tables to generate");
        } else {
            out.section(&format!("Tables ({})", self.tables.len()));
            for entry in &self.tables {
                out.key_value_indented(&entry.table, &entry.class_name);
            }
        }

        if self.excluded > 0 {
            out.newline();
            out.preformatted(&format!("{} excluded by configuration", self.excluded));
        }
    }
}
