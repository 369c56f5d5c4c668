//! Builder for generating properly indented Java source.

/// One indent level in generated Java.
const INDENT: &str = "    ";

/// Fluent API for building Java source with proper indentation.
///
/// # Example
///
/// ```
/// use barista_codegen::JavaWriter;
///
/// let code = JavaWriter::new()
///     .line("public class Book {")
///     .indent()
///     .line("private Long id;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public class Book {\n    private Long id;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JavaWriter {
    indent_level: usize,
    buffer: String,
}

impl JavaWriter {
    /// Create a new writer at indent level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add several lines, each with current indentation.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for l in lines {
            self = self.line(l.as_ref());
        }
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Consume the writer and return the built source.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_indent() {
        let code = JavaWriter::new()
            .line("if (x) {")
            .indent()
            .line("y();")
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "if (x) {\n    y();\n}\n");
    }

    #[test]
    fn test_lines() {
        let code = JavaWriter::new()
            .indent()
            .lines(["@Id", "@GeneratedValue"])
            .build();
        assert_eq!(code, "    @Id\n    @GeneratedValue\n");
    }

    #[test]
    fn test_blank_has_no_indent() {
        let code = JavaWriter::new().indent().line("a;").blank().line("b;").build();
        assert_eq!(code, "    a;\n\n    b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = JavaWriter::new().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_raw() {
        let code = JavaWriter::new().raw("no newline").build();
        assert_eq!(code, "no newline");
    }
}
