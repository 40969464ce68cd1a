/// Word (.docx) paragraph content.
///
/// This module reads and writes the inside of WordprocessingML paragraphs.
/// A paragraph's content is an ordered list of children, each exactly one of
/// a run, a hyperlink or a run-properties block, and is written back in the
/// order it was built or read.
///
/// # Architecture
///
/// - `Paragraph`: a `<w:p>` element owning its `Children`
/// - `Children`: the ordered, append-only child sequence and its codec
/// - `ParagraphChild`: one child, a closed enum over the supported kinds
/// - `Run`, `Hyperlink`, `RunProperties`, `Drawing`: the child records
///
/// Package assembly (zip container, relationships, content types) and
/// document-level parts are left to the caller; relationship ids used by
/// links and pictures are plain strings here.
///
/// # Example
///
/// ```rust
/// use wordml::ooxml::docx::{Children, ParagraphChild};
///
/// let children = Children::from_xml(
///     r#"<w:r><w:t>a</w:t></w:r><w:bookmarkStart w:id="0" w:name="x"/><w:r><w:t>b</w:t></w:r>"#,
/// )?;
/// assert_eq!(children.len(), 2);
/// for child in &children {
///     if let ParagraphChild::Run(run) = child {
///         println!("Run: {:?}", run.text());
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod drawing;
pub mod format;
pub mod hyperlink;
pub mod options;
pub mod paragraph;
pub mod run;

pub use drawing::Drawing;
pub use format::{RunProperties, UnderlineStyle, VerticalAlign};
pub use hyperlink::{Hyperlink, LinkKind};
pub use options::WriteOptions;
pub use paragraph::{Children, Paragraph, ParagraphChild};
pub use run::{Run, RunContent};
