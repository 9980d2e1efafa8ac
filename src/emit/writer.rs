//! Line-oriented output writer with indentation tracking
//!
//! All generators assemble their artifact text through this writer so the
//! emitted sources share one indentation and trailing-newline discipline.

const INDENT_WIDTH: usize = 2;

/// Writer that tracks indentation and builds generated source text
pub struct SourceWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    /// Get the generated text, with exactly one trailing newline.
    pub fn finish(mut self) -> String {
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, s: &str) {
        if !s.is_empty() {
            for _ in 0..self.indent_level * INDENT_WIDTH {
                self.output.push(' ');
            }
            self.output.push_str(s);
        }
        self.output.push('\n');
    }

    /// Write a blank line
    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write a pre-indented block verbatim, one line at a time.
    ///
    /// Leading and trailing blank lines of `text` are dropped so raw string
    /// literals can carry their own surrounding newlines.
    pub fn verbatim(&mut self, text: &str) {
        for line in text.trim_matches('\n').lines() {
            self.line(line.trim_end());
        }
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}
