//! Header generation configuration
//!
//! Options that change the emitted text. Passed explicitly into [`crate::HeaderGenerator`]; nothing
//! here is read from process-wide state.

/// Placeholder substituted with the source file path in [`HeaderConfig::file_header`].
pub const SOURCE_PLACEHOLDER: &str = "{source}";

/// Default banner written at the top of every header.
pub const DEFAULT_FILE_HEADER: &str = "//\n//  Generated by the J2ObjC translator.  DO NOT EDIT!\n//  source: {source}\n//\n";

/// Header generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Emit `__attribute__((deprecated))` for `@Deprecated` declarations, bracketed by pragmas that
    /// silence the resulting warnings inside the header itself
    pub generate_deprecated_declarations: bool,
    /// Banner template; `{source}` is replaced by the source file path
    pub file_header: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            generate_deprecated_declarations: true,
            file_header: DEFAULT_FILE_HEADER.to_string(),
        }
    }
}

impl HeaderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable deprecation attributes
    pub fn with_deprecated_declarations(mut self, enabled: bool) -> Self {
        self.generate_deprecated_declarations = enabled;
        self
    }

    /// Replace the banner template
    pub fn with_file_header(mut self, template: impl Into<String>) -> Self {
        self.file_header = template.into();
        self
    }

    /// Render the banner for a source file.
    pub fn render_file_header(&self, source_file: &str) -> String {
        self.file_header.replace(SOURCE_PLACEHOLDER, source_file)
    }
}
