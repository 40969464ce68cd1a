//! Office Open XML (OOXML) support.
//!
//! # Architecture
//!
//! 1. **Shared utilities** (`xml`, `error`): namespace constants, token-stream
//!    helpers and the encode/decode error types
//! 2. **Format-specific modules**:
//!    - `docx`: WordprocessingML paragraph content
//!
//! # Example: Round-tripping a paragraph
//!
//! ```rust
//! use wordml::ooxml::docx::Paragraph;
//!
//! let mut para = Paragraph::new();
//! para.add_text("Total: ").bold(true);
//! para.add_field("PAGE");
//!
//! let xml = para.to_xml()?;
//! assert_eq!(Paragraph::from_xml(&xml)?, para);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod error;
pub mod xml;

// Re-export error types
pub use error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
