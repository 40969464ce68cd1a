//! Wordml - ordered paragraph content for WordprocessingML (.docx)
//!
//! This library reads and writes the content of Word paragraphs: the
//! interleaved runs, hyperlinks and run-property blocks inside `<w:p>`.
//! Content is kept as an ordered list of typed children so that the
//! sequence and nesting survive a write/read cycle exactly.
//!
//! # Features
//!
//! - **Ordered children**: each child is exactly one of run, hyperlink or
//!   run properties, written back in insertion order
//! - **Forward-compatible reads**: elements outside the supported subset are
//!   skipped, never rejected
//! - **Streaming**: built on `quick-xml` readers and writers over any
//!   `BufRead` / `Write`
//!
//! # Example - Building a paragraph
//!
//! ```
//! use wordml::ooxml::docx::{Drawing, Paragraph};
//!
//! let mut para = Paragraph::new();
//! para.add_text("Status: ").bold(true);
//! para.add_text("green").color("00B050").size(28);
//! para.add_link("rId5", "details");
//! para.add_drawing(Drawing::new(1, "rId6", Drawing::px_to_emu(64), Drawing::px_to_emu(64)));
//!
//! let xml = para.to_xml()?;
//! assert!(xml.starts_with("<w:p><w:r>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Example - Reading paragraph content
//!
//! ```
//! use wordml::ooxml::docx::{Paragraph, ParagraphChild};
//!
//! let xml = r#"<w:p><w:pPr><w:jc w:val="both"/></w:pPr><w:r><w:rPr><w:i/></w:rPr><w:t>Hello</w:t></w:r><w:r></w:r></w:p>"#;
//! let para = Paragraph::from_xml(xml)?;
//!
//! // Paragraph properties are skipped and the empty run is dropped.
//! assert_eq!(para.children().len(), 1);
//! if let Some(ParagraphChild::Run(run)) = para.children().iter().next() {
//!     assert_eq!(run.text(), Some("Hello"));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// OOXML (Office Open XML) support
///
/// This module provides the WordprocessingML paragraph codec and the
/// shared XML helpers and error types it is built on.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use ooxml::docx::{
    Children, Drawing, Hyperlink, LinkKind, Paragraph, ParagraphChild, Run, RunContent,
    RunProperties, UnderlineStyle, VerticalAlign, WriteOptions,
};
pub use ooxml::{DecodeError, EncodeError};
