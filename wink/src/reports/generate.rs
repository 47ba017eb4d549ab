//! Generate command report data structures.

use wink_codegen::{GenerateResult, RenderedFile};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Connection name.
    pub connection: String,
    /// Driver identifier of the connection.
    pub driver: String,
    /// Files written or previewed.
    pub outcome: GenerationOutcome,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Files were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview {
        tables: Vec<String>,
        files: Vec<RenderedFile>,
    },
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.outcome {
            GenerationOutcome::Written(result) => self.render_written(out, result),
            GenerationOutcome::Preview { tables, files } => {
                self.render_preview(out, tables, files)
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, result: &GenerateResult) {
        out.key_value(
            "Connection",
            &format!("{} ({})", self.connection, self.driver),
        );
        out.newline();

        if result.tables.is_empty() {
            out.warning("no tables to generate");
        }

        for file in &result.files {
            let path = file.path.display();
            if file.label == "Routes" {
                out.preformatted(&format!("Generated routes written to: {}", path));
            } else {
                out.preformatted(&format!("{} {} generated at: {}", file.label, file.name, path));
            }
        }

        out.newline();
        out.preformatted(&format!(
            "All models and related files generated successfully! ({} {}, {} {})",
            result.tables.len(),
            plural(result.tables.len(), "table", "tables"),
            result.files.len(),
            plural(result.files.len(), "file", "files"),
        ));
    }

    fn render_preview(&self, out: &mut dyn Output, tables: &[String], files: &[RenderedFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} {} would be generated for {} {}",
            files.len(),
            plural(files.len(), "file", "files"),
            tables.len(),
            plural(tables.len(), "table", "tables"),
        ));
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
