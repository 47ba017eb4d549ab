//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render an indented key-value pair.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a skipped item (e.g., existing file left alone).
    fn skipped_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
#[derive(Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn skipped_item(&mut self, text: &str) {
        println!("  = {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Output collected into a string, one line per call.
#[cfg(test)]
#[derive(Default)]
pub struct StringOutput {
    pub buffer: String,
}

#[cfg(test)]
impl StringOutput {
    fn push(&mut self, line: String) {
        self.buffer.push_str(&line);
        self.buffer.push('\n');
    }
}

#[cfg(test)]
impl Output for StringOutput {
    fn section(&mut self, name: &str) {
        self.push(format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.push(format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.push(format!("  {}: {}", key, value));
    }

    fn added_item(&mut self, text: &str) {
        self.push(format!("  + {}", text));
    }

    fn skipped_item(&mut self, text: &str) {
        self.push(format!("  = {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.push(text.to_string());
    }

    fn newline(&mut self) {
        self.push(String::new());
    }
}
