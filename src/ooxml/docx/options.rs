/// Output options for serializing paragraphs.
///
/// # Examples
///
/// ```rust
/// use wordml::ooxml::docx::{Paragraph, WriteOptions};
///
/// let mut para = Paragraph::new();
/// para.add_text("Hello");
///
/// let xml = para
///     .to_xml_with(&WriteOptions::new().with_namespaces(true))
///     .unwrap();
/// assert!(xml.starts_with("<w:p xmlns:w="));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Indent nested elements with `(character, count)` per level.
    /// `None` writes everything on one line, as Word does.
    pub indent: Option<(u8, usize)>,
    /// Declare the `w` and `r` prefixes on the `<w:p>` element so the
    /// fragment is namespace-well-formed on its own.
    pub declare_namespaces: bool,
}

impl WriteOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-print with `size` copies of `indent_char` per level.
    #[inline]
    pub fn with_indent(mut self, indent_char: u8, size: usize) -> Self {
        self.indent = Some((indent_char, size));
        self
    }

    /// Set whether to declare namespaces on the paragraph element.
    #[inline]
    pub fn with_namespaces(mut self, declare: bool) -> Self {
        self.declare_namespaces = declare;
        self
    }
}
