//! Header text writer with indentation tracking
//!
//! Indentation is applied lazily at the start of each non-empty line, so blank lines never carry
//! trailing whitespace.

/// Writer that tracks indentation and accumulates header text
pub struct HeaderWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl HeaderWriter {
    /// Create a new writer
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the accumulated output
    pub fn finish(self) -> String {
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

    /// Write indentation if at line start
    fn write_indent(&mut self) {
        if self.at_line_start {
            let indent = " ".repeat(self.indent_level * self.indent_width);
            self.output.push_str(&indent);
            self.at_line_start = false;
        }
    }

    fn write_segment(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string (with auto-indent). Embedded `\n` start new lines.
    pub fn write(&mut self, s: &str) {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.write_segment(first);
        }
        for line in lines {
            self.newline();
            self.write_segment(line);
        }
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Get current indentation level
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> HeaderWriter {
        HeaderWriter::new(2)
    }

    // ========================================
    // Write tests
    // ========================================

    #[test]
    fn test_new_writer_empty_output() {
        let writer = default_writer();
        assert_eq!(writer.current_indent(), 0);
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_write_multiple() {
        let mut writer = default_writer();
        writer.write("@interface Foo");
        writer.write(" : ");
        writer.write("NSObject");
        assert_eq!(writer.finish(), "@interface Foo : NSObject");
    }

    #[test]
    fn test_write_embedded_newlines() {
        let mut writer = default_writer();
        writer.writeln("\n@end");
        assert_eq!(writer.finish(), "\n@end\n");
    }

    // ========================================
    // Writeln / newline tests
    // ========================================

    #[test]
    fn test_writeln_multiple() {
        let mut writer = default_writer();
        writer.writeln("line1");
        writer.writeln("line2");
        assert_eq!(writer.finish(), "line1\nline2\n");
    }

    #[test]
    fn test_writeln_empty_string() {
        let mut writer = default_writer();
        writer.writeln("");
        assert_eq!(writer.finish(), "\n");
    }

    // ========================================
    // Indent/dedent tests
    // ========================================

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_indent_affects_output() {
        let mut writer = default_writer();
        writer.indent();
        writer.writeln("int count_;");
        writer.dedent();
        writer.writeln("}");
        assert_eq!(writer.finish(), "  int count_;\n}\n");
    }

    #[test]
    fn test_indent_width_4() {
        let mut writer = HeaderWriter::new(4);
        writer.indent();
        writer.indent();
        writer.write("text");
        assert_eq!(writer.finish(), "        text"); // 2 * 4 = 8 spaces
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut writer = default_writer();
        writer.indent();
        writer.writeln("/**\n\n */");
        assert_eq!(writer.finish(), "  /**\n\n   */\n");
    }

    #[test]
    fn test_indent_only_at_line_start() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("a");
        writer.write("b");
        writer.newline();
        writer.write("c");
        assert_eq!(writer.finish(), "  ab\n  c");
    }
}
